//! Error types for the CZML codec.

use thiserror::Error;

/// Main error type for CZML decode operations.
///
/// Encoding is infallible; every failure is produced while reading a JSON
/// value tree into the object model.
#[derive(Error, Debug)]
pub enum Error {
    /// Array length fits neither a single tuple nor a run of time-tagged chunks
    #[error(
        "Malformed tuple run: length {got_length} is neither {expected_arity} nor a multiple of {}",
        .expected_arity + 1
    )]
    MalformedTupleRun { expected_arity: usize, got_length: usize },

    /// Structured object lacks its value-bearing field
    #[error("Missing value field: {field}")]
    MissingValue { field: String },

    /// A JSON node is not of the kind the decode step requires
    #[error("Unexpected type: expected {expected} at {at}")]
    UnexpectedType { expected: String, at: String },

    /// Time tag could not be normalised to an instant
    #[error("Invalid time: {0}")]
    InvalidTime(String),

    /// JSON text or serde-derived record error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an unexpected-type error.
    pub fn unexpected(expected: impl Into<String>, at: impl Into<String>) -> Self {
        Self::UnexpectedType {
            expected: expected.into(),
            at: at.into(),
        }
    }

    /// Create a missing-value error.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingValue { field: field.into() }
    }

    /// Create a malformed tuple run error.
    pub fn malformed_run(expected_arity: usize, got_length: usize) -> Self {
        Self::MalformedTupleRun {
            expected_arity,
            got_length,
        }
    }
}

/// Result type alias for CZML operations.
pub type Result<T> = std::result::Result<T, Error>;

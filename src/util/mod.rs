//! Utility types and functions for the CZML codec.
//!
//! This module contains fundamental types used throughout the library:
//! - [`Error`] / [`Result`] - Error handling
//! - JSON node readers used by every codec
//! - Math type interop with glam (feature `math`)

mod error;
pub mod json;
#[cfg(feature = "math")]
mod math;

pub use error::*;
pub use json::JsonObject;
#[cfg(feature = "math")]
pub use math::*;

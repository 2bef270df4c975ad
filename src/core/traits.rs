//! The codec trait shared by every node of the object model.

use serde_json::Value;

use crate::util::json::JsonObject;
use crate::util::Result;

/// Two-way mapping between a type and its CZML JSON encoding.
///
/// `decode` accepts every surface syntax the dialect allows for the value;
/// `encode` emits the simplest form that decodes back to an equal value.
pub trait JsonCodec: Sized {
    /// Read a value from a JSON node.
    fn decode(json: &Value) -> Result<Self>;

    /// Render the value as a JSON node.
    fn encode(&self) -> Value;
}

impl JsonCodec for bool {
    fn decode(json: &Value) -> Result<Self> {
        crate::util::json::expect_bool(json, "boolean")
    }

    fn encode(&self) -> Value {
        Value::Bool(*self)
    }
}

impl JsonCodec for f64 {
    fn decode(json: &Value) -> Result<Self> {
        crate::util::json::expect_f64(json, "number")
    }

    fn encode(&self) -> Value {
        crate::util::json::f64_value(*self)
    }
}

impl JsonCodec for String {
    fn decode(json: &Value) -> Result<Self> {
        crate::util::json::expect_str(json, "string").map(str::to_owned)
    }

    fn encode(&self) -> Value {
        Value::String(self.clone())
    }
}

/// Decode an optional field of an object. Absent and `null` both yield `None`.
pub fn decode_field<T: JsonCodec>(obj: &JsonObject, key: &str) -> Result<Option<T>> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => T::decode(v).map(Some),
    }
}

/// Encode an optional field into an object, skipping it when absent.
pub fn encode_field<T: JsonCodec>(obj: &mut JsonObject, key: &str, value: Option<&T>) {
    if let Some(v) = value {
        obj.insert(key.to_owned(), v.encode());
    }
}

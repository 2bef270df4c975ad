//! Helpers for reading typed nodes out of a `serde_json` value tree.
//!
//! Every reader names the location it was reading so that
//! [`Error::UnexpectedType`] points at the offending field.

use serde_json::{Map, Value};

use super::{Error, Result};

/// JSON object type used throughout the codec.
pub type JsonObject = Map<String, Value>;

/// Short name of a JSON node kind, for error messages.
pub fn kind_name(json: &Value) -> &'static str {
    match json {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Require a JSON array.
pub fn expect_array<'a>(json: &'a Value, at: &str) -> Result<&'a [Value]> {
    json.as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| Error::unexpected(format!("array, found {}", kind_name(json)), at))
}

/// Require a JSON object.
pub fn expect_object<'a>(json: &'a Value, at: &str) -> Result<&'a JsonObject> {
    json.as_object()
        .ok_or_else(|| Error::unexpected(format!("object, found {}", kind_name(json)), at))
}

/// Require a JSON number.
pub fn expect_f64(json: &Value, at: &str) -> Result<f64> {
    json.as_f64()
        .ok_or_else(|| Error::unexpected(format!("number, found {}", kind_name(json)), at))
}

/// Whole non-negative number, in integer or float notation (`255`, `255.0`).
pub fn as_whole(json: &Value) -> Option<u64> {
    if let Some(v) = json.as_u64() {
        return Some(v);
    }
    let v = json.as_f64()?;
    let whole = v.is_finite() && v.fract() == 0.0 && (0.0..=u64::MAX as f64).contains(&v);
    whole.then_some(v as u64)
}

/// Require a whole JSON number that fits in a byte.
pub fn expect_u8(json: &Value, at: &str) -> Result<u8> {
    as_whole(json)
        .and_then(|v| u8::try_from(v).ok())
        .ok_or_else(|| Error::unexpected("integer in 0..=255", at))
}

/// Require a JSON string.
pub fn expect_str<'a>(json: &'a Value, at: &str) -> Result<&'a str> {
    json.as_str()
        .ok_or_else(|| Error::unexpected(format!("string, found {}", kind_name(json)), at))
}

/// Require a JSON boolean.
pub fn expect_bool(json: &Value, at: &str) -> Result<bool> {
    json.as_bool()
        .ok_or_else(|| Error::unexpected(format!("boolean, found {}", kind_name(json)), at))
}

/// Read an optional string field. `null` counts as absent.
pub fn opt_string(obj: &JsonObject, key: &str) -> Result<Option<String>> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => expect_str(v, key).map(|s| Some(s.to_owned())),
    }
}

/// Read an optional boolean field. `null` counts as absent.
pub fn opt_bool(obj: &JsonObject, key: &str) -> Result<Option<bool>> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => expect_bool(v, key).map(Some),
    }
}

/// Read an array of plain numbers.
pub fn f64_array(json: &Value, at: &str) -> Result<Vec<f64>> {
    expect_array(json, at)?
        .iter()
        .map(|v| expect_f64(v, at))
        .collect()
}

/// Number to JSON. Non-finite values have no JSON form and become `null`.
#[inline]
pub fn f64_value(v: f64) -> Value {
    serde_json::Number::from_f64(v)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

/// Insert `value` under `key` only when present.
pub fn put_opt(obj: &mut JsonObject, key: &str, value: Option<Value>) {
    if let Some(v) = value {
        obj.insert(key.to_owned(), v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_expect_helpers() {
        assert_eq!(expect_f64(&json!(2.5), "x").unwrap(), 2.5);
        assert_eq!(expect_u8(&json!(255), "x").unwrap(), 255);
        assert!(expect_u8(&json!(256), "x").is_err());
        assert!(expect_u8(&json!(1.5), "x").is_err());
        assert!(expect_u8(&json!(-1), "x").is_err());
        assert_eq!(expect_str(&json!("a"), "x").unwrap(), "a");
        assert!(expect_array(&json!({}), "x").is_err());
        assert!(expect_object(&json!([]), "x").is_err());
    }

    #[test]
    fn test_whole_numbers_in_float_notation() {
        assert_eq!(as_whole(&json!(7)), Some(7));
        assert_eq!(as_whole(&json!(7.0)), Some(7));
        assert_eq!(as_whole(&json!(7.5)), None);
        assert_eq!(as_whole(&json!(-7.0)), None);
        assert_eq!(expect_u8(&json!(255.0), "x").unwrap(), 255);
        assert_eq!(expect_u8(&json!(0.0), "x").unwrap(), 0);
        assert!(expect_u8(&json!(256.0), "x").is_err());
    }

    #[test]
    fn test_unexpected_type_names_location() {
        let err = expect_f64(&json!("nope"), "scale").unwrap_err();
        match err {
            Error::UnexpectedType { expected, at } => {
                assert!(expected.contains("string"));
                assert_eq!(at, "scale");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_optional_fields() {
        let obj = json!({"a": "x", "b": null, "c": true});
        let obj = obj.as_object().unwrap();
        assert_eq!(opt_string(obj, "a").unwrap().as_deref(), Some("x"));
        assert_eq!(opt_string(obj, "b").unwrap(), None);
        assert_eq!(opt_string(obj, "missing").unwrap(), None);
        assert_eq!(opt_bool(obj, "c").unwrap(), Some(true));
        assert!(opt_bool(obj, "a").is_err());
    }

    #[test]
    fn test_non_finite_numbers() {
        assert_eq!(f64_value(f64::NAN), Value::Null);
        assert_eq!(f64_value(1.0), json!(1.0));
    }
}

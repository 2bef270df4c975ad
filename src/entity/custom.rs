//! Pass-through for the free-form `properties` object.

use serde_json::Value;

use crate::core::JsonCodec;
use crate::util::json::expect_object;
use crate::util::{JsonObject, Result};

/// Application-defined key/value pairs, kept as raw JSON.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CustomProperties(pub JsonObject);

impl CustomProperties {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl JsonCodec for CustomProperties {
    fn decode(json: &Value) -> Result<Self> {
        expect_object(json, "properties").map(|obj| Self(obj.clone()))
    }

    fn encode(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

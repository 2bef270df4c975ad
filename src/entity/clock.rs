//! Document clock settings, normally carried by the `document` packet.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::JsonCodec;
use crate::util::json::expect_object;
use crate::util::Result;

/// Behaviour when the clock reaches the end of its interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClockRange {
    Unbounded,
    Clamped,
    LoopStop,
}

/// How the clock advances.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClockStep {
    TickDependent,
    SystemClockMultiplier,
    SystemClock,
}

/// Simulation clock.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<ClockRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<ClockStep>,
}

impl Clock {
    pub fn new(interval: impl Into<String>, current_time: impl Into<String>) -> Self {
        Self {
            interval: Some(interval.into()),
            current_time: Some(current_time.into()),
            ..Self::default()
        }
    }

    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = Some(multiplier);
        self
    }
}

impl JsonCodec for Clock {
    fn decode(json: &Value) -> Result<Self> {
        expect_object(json, "clock")?;
        Ok(Self::deserialize(json)?)
    }

    fn encode(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

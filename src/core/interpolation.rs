//! Interpolation metadata shared by sampled properties.
//!
//! These side-fields are written flat, next to the value field, in the same
//! JSON object. Absent fields are omitted on encode, never written as `null`.

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::core::TimeTag;
use crate::util::json::JsonObject;
use crate::util::Result;

/// Algorithm used to interpolate between samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterpolationAlgorithm {
    Linear,
    Lagrange,
    Hermite,
}

/// Behaviour outside the sampled time range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExtrapolationType {
    None,
    Hold,
    Extrapolate,
}

/// Interpolation and extrapolation side-record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterpolationMeta {
    /// Reference instant for seconds-since-epoch sample times.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epoch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_time: Option<TimeTag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_time: Option<TimeTag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpolation_algorithm: Option<InterpolationAlgorithm>,
    #[serde(
        default,
        deserialize_with = "whole_degree",
        skip_serializing_if = "Option::is_none"
    )]
    pub interpolation_degree: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward_extrapolation_type: Option<ExtrapolationType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backward_extrapolation_type: Option<ExtrapolationType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward_extrapolation_duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backward_extrapolation_duration: Option<f64>,
}

/// Degree written as `5` or `5.0`.
fn whole_degree<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<Option<u32>, D::Error> {
    let Some(v) = Option::<f64>::deserialize(d)? else {
        return Ok(None);
    };
    if v.is_finite() && v.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&v) {
        Ok(Some(v as u32))
    } else {
        Err(de::Error::custom(format!("interpolationDegree must be a whole number, got {v}")))
    }
}

impl InterpolationMeta {
    /// JSON keys owned by this record.
    pub const KEYS: [&'static str; 9] = [
        "epoch",
        "nextTime",
        "previousTime",
        "interpolationAlgorithm",
        "interpolationDegree",
        "forwardExtrapolationType",
        "backwardExtrapolationType",
        "forwardExtrapolationDuration",
        "backwardExtrapolationDuration",
    ];

    /// Metadata carrying only an epoch.
    pub fn with_epoch(epoch: impl Into<String>) -> Self {
        Self {
            epoch: Some(epoch.into()),
            ..Self::default()
        }
    }

    /// Check if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Read the flattened metadata fields out of a property object.
    ///
    /// Returns `None` when none of the fields is present.
    pub fn from_object(obj: &JsonObject) -> Result<Option<Self>> {
        let fields: JsonObject = Self::KEYS
            .iter()
            .filter_map(|k| obj.get(*k).map(|v| ((*k).to_owned(), v.clone())))
            .collect();
        if fields.is_empty() {
            return Ok(None);
        }
        let meta: Self = serde_json::from_value(Value::Object(fields))?;
        Ok((!meta.is_empty()).then_some(meta))
    }

    /// Write the present fields flat into a property object.
    pub fn write_into(&self, obj: &mut JsonObject) {
        if let Ok(Value::Object(fields)) = serde_json::to_value(self) {
            obj.extend(fields);
        }
    }
}

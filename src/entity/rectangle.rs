//! Rectangle: a cartographic rectangle on or above the ellipsoid.

use serde_json::Value;

use crate::core::{
    Boolean, Colors, JsonCodec, Number, Polymorphic, ScalarValue, WsenDegreesValue, WsenValue,
};
use crate::entity::Material;
use crate::util::{JsonObject, Result};

const DEGREES: &str = WsenDegreesValue::FIELD;

/// Rectangle bounds in radians or in degrees.
///
/// The unit is fixed by the field name the bounds were written under.
#[derive(Clone, Debug, PartialEq)]
pub enum RectangleCoordinates {
    Radians(Polymorphic<WsenValue>),
    Degrees(Polymorphic<WsenDegreesValue>),
}

impl RectangleCoordinates {
    /// Constant bounds in degrees.
    pub fn degrees(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self::Degrees(Polymorphic::Bare(WsenDegreesValue([west, south, east, north])))
    }

    /// Constant bounds in radians.
    pub fn radians(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self::Radians(Polymorphic::Bare(WsenValue([west, south, east, north])))
    }

    /// Constant bounds in degrees, whichever unit they were written in.
    pub fn to_degrees(&self) -> Option<[f64; 4]> {
        match self {
            Self::Radians(p) => p.constant().map(|v| v.0.map(f64::to_degrees)),
            Self::Degrees(p) => p.constant().map(|v| v.0),
        }
    }
}

impl JsonCodec for RectangleCoordinates {
    /// Objects holding `wsenDegrees` are degrees; everything else is radians.
    fn decode(json: &Value) -> Result<Self> {
        let degrees = json.as_object().is_some_and(|obj| obj.contains_key(DEGREES));
        if degrees {
            Polymorphic::decode(json).map(Self::Degrees)
        } else {
            Polymorphic::decode(json).map(Self::Radians)
        }
    }

    /// Degrees are always written as an object.
    fn encode(&self) -> Value {
        match self {
            Self::Radians(p) => p.encode(),
            Self::Degrees(p) => match p.encode() {
                obj @ Value::Object(_) => obj,
                bare => {
                    let mut obj = JsonObject::new();
                    obj.insert(DEGREES.to_owned(), bare);
                    Value::Object(obj)
                }
            },
        }
    }
}

czml_object! {
    pub struct Rectangle {
        "show" => show: Boolean,
        "coordinates" => coordinates: RectangleCoordinates,
        "material" => material: Material,
        "height" => height: Number,
        "extrudedHeight" => extruded_height: Number,
        "granularity" => granularity: Number,
        "rotation" => rotation: Number,
        "stRotation" => st_rotation: Number,
        "fill" => fill: Boolean,
        "outline" => outline: Boolean,
        "outlineColor" => outline_color: Colors,
        "closeTop" => close_top: Boolean,
        "closeBottom" => close_bottom: Boolean,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_degrees_keep_their_unit() {
        let json = json!({"wsenDegrees": [-120.0, 40.0, -110.0, 50.0]});
        let c = RectangleCoordinates::decode(&json).unwrap();
        assert!(matches!(c, RectangleCoordinates::Degrees(_)));
        assert_eq!(c.to_degrees(), Some([-120.0, 40.0, -110.0, 50.0]));
        assert_eq!(c.encode(), json);
        assert_eq!(RectangleCoordinates::degrees(-120.0, 40.0, -110.0, 50.0).encode(), json);
    }

    #[test]
    fn test_radians_default() {
        let c = RectangleCoordinates::decode(&json!([0.0, 0.5, 0.25, 1.0])).unwrap();
        assert_eq!(c, RectangleCoordinates::radians(0.0, 0.5, 0.25, 1.0));
        let c = RectangleCoordinates::decode(&json!({"wsen": [0.0, 0.5, 0.25, 1.0]})).unwrap();
        assert_eq!(c.encode(), json!([0.0, 0.5, 0.25, 1.0]));
    }

    #[test]
    fn test_rectangle() {
        let json = json!({
            "coordinates": {"wsenDegrees": [-120.0, 40.0, -110.0, 50.0], "interval": "a/b"},
            "fill": true,
            "material": {"solidColor": {"color": {"rgbaf": [1.0, 0.0, 0.0, 0.5]}}}
        });
        let r = Rectangle::decode(&json).unwrap();
        let out = r.encode();
        assert_eq!(out["coordinates"], json["coordinates"]);
        assert_eq!(out["material"]["solidColor"]["color"], json["material"]["solidColor"]["color"]);
    }
}

//! Sensor volumes and vectors from the `agi_` property family.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{Boolean, Colors, JsonCodec, Number, Polymorphic, UnitSphericalValue};
use crate::entity::Material;
use crate::util::json::expect_object;
use crate::util::Result;

/// Flat direction lists of a custom pattern sensor or fan.
///
/// Each list is a flattened sequence of 2- or 3-component directions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Directions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spherical: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_spherical: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cartesian: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_cartesian: Option<Vec<f64>>,
}

impl Directions {
    /// Directions as flattened `[clock, cone]` pairs.
    pub fn unit_spherical(pairs: Vec<f64>) -> Self {
        Self {
            unit_spherical: Some(pairs),
            ..Self::default()
        }
    }
}

impl JsonCodec for Directions {
    fn decode(json: &Value) -> Result<Self> {
        expect_object(json, "directions")?;
        Ok(Self::deserialize(json)?)
    }

    fn encode(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

czml_object! {
    /// Cone with optional inner cone and clock-angle limits.
    pub struct ConicSensor {
        "show" => show: Boolean,
        "innerHalfAngle" => inner_half_angle: Number,
        "outerHalfAngle" => outer_half_angle: Number,
        "minimumClockAngle" => minimum_clock_angle: Number,
        "maximumClockAngle" => maximum_clock_angle: Number,
        "radius" => radius: Number,
        "showIntersection" => show_intersection: Boolean,
        "intersectionColor" => intersection_color: Colors,
        "intersectionWidth" => intersection_width: Number,
        "showLateralSurfaces" => show_lateral_surfaces: Boolean,
        "lateralSurfaceMaterial" => lateral_surface_material: Material,
    }
}

czml_object! {
    /// Sensor whose footprint is an arbitrary list of directions.
    pub struct CustomPatternSensor {
        "show" => show: Boolean,
        "directions" => directions: Directions,
        "radius" => radius: Number,
        "showIntersection" => show_intersection: Boolean,
        "intersectionColor" => intersection_color: Colors,
        "intersectionWidth" => intersection_width: Number,
        "showLateralSurfaces" => show_lateral_surfaces: Boolean,
        "lateralSurfaceMaterial" => lateral_surface_material: Material,
    }
}

czml_object! {
    /// Pyramid bounded by two half angles.
    pub struct RectangularSensor {
        "show" => show: Boolean,
        "xHalfAngle" => x_half_angle: Number,
        "yHalfAngle" => y_half_angle: Number,
        "radius" => radius: Number,
        "showIntersection" => show_intersection: Boolean,
        "intersectionColor" => intersection_color: Colors,
        "intersectionWidth" => intersection_width: Number,
        "showLateralSurfaces" => show_lateral_surfaces: Boolean,
        "lateralSurfaceMaterial" => lateral_surface_material: Material,
    }
}

czml_object! {
    /// Flat fan swept through a list of directions.
    pub struct Fan {
        "show" => show: Boolean,
        "directions" => directions: Directions,
        "radius" => radius: Number,
        "perDirectionRadius" => per_direction_radius: Boolean,
        "material" => material: Material,
        "fill" => fill: Boolean,
        "outline" => outline: Boolean,
        "numberOfRings" => number_of_rings: Number,
        "outlineColor" => outline_color: Colors,
    }
}

czml_object! {
    /// Arrow pointing from the entity position.
    pub struct Vector {
        "show" => show: Boolean,
        "color" => color: Colors,
        "direction" => direction: Polymorphic<UnitSphericalValue>,
        "length" => length: Number,
        "minimumLengthInPixels" => minimum_length_in_pixels: Number,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_conic_sensor() {
        let json = json!({
            "show": true,
            "outerHalfAngle": 0.5,
            "radius": 1.0e7,
            "intersectionColor": {"rgba": [255, 255, 0, 255]},
            "lateralSurfaceMaterial": {"solidColor": {"color": [0, 255, 255, 64]}}
        });
        let s = ConicSensor::decode(&json).unwrap();
        assert!(s.lateral_surface_material.is_some());
        let out = s.encode();
        assert_eq!(out["intersectionColor"], json!([255, 255, 0, 255]));
        assert_eq!(out["lateralSurfaceMaterial"], json["lateralSurfaceMaterial"]);
    }

    #[test]
    fn test_fan_directions() {
        let json = json!({
            "directions": {"unitSpherical": [0.0, 0.5, 1.0, 0.5, 2.0, 0.5]},
            "perDirectionRadius": false
        });
        let fan = Fan::decode(&json).unwrap();
        assert_eq!(
            fan.directions,
            Some(Directions::unit_spherical(vec![0.0, 0.5, 1.0, 0.5, 2.0, 0.5]))
        );
        assert_eq!(fan.encode(), json);
        assert!(Fan::decode(&json!({"directions": [0.0, 1.0]})).is_err());
    }

    #[test]
    fn test_vector_direction() {
        let json = json!({"direction": {"unitSpherical": [1.0, 0.25]}, "length": 5.0e6});
        let v = Vector::decode(&json).unwrap();
        assert_eq!(
            v.direction.as_ref().and_then(|d| d.constant()),
            Some(&UnitSphericalValue([1.0, 0.25]))
        );
        assert_eq!(v.encode(), json!({"direction": [1.0, 0.25], "length": 5.0e6}));
    }
}

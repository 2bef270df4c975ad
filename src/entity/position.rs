//! Position, orientation and view-from properties.
//!
//! A position can be given in several coordinate channels at once; each
//! channel is its own tuple run. Radians and degrees are separate fields, never
//! a shared field with a unit tag.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{
    encode_field, CartesianValue, CartesianVelocityRun, Cartesian3Run, CartographicRun,
    InterpolationMeta, JsonCodec, Polymorphic, PropertyList, UnitQuaternionValue,
};
use crate::util::json::{expect_object, opt_string, put_opt, JsonObject};
use crate::util::{Error, Result};

/// Frame the cartesian coordinates are expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReferenceFrame {
    Fixed,
    Inertial,
}

/// Position of an entity, constant or sampled over time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Position {
    pub reference_frame: Option<ReferenceFrame>,
    /// Metres, `[x, y, z]`.
    pub cartesian: Option<Cartesian3Run>,
    /// `[longitude, latitude, height]` in radians and metres.
    pub cartographic_radians: Option<CartographicRun>,
    /// `[longitude, latitude, height]` in degrees and metres.
    pub cartographic_degrees: Option<CartographicRun>,
    /// `[x, y, z, vx, vy, vz]`.
    pub cartesian_velocity: Option<CartesianVelocityRun>,
    pub interval: Option<String>,
    pub reference: Option<String>,
    pub meta: Option<InterpolationMeta>,
}

impl Position {
    /// Constant cartesian position.
    pub fn cartesian(x: f64, y: f64, z: f64) -> Self {
        Self {
            cartesian: Some(Cartesian3Run::from([x, y, z])),
            ..Self::default()
        }
    }

    /// Constant position in degrees.
    pub fn degrees(lon: f64, lat: f64, height: f64) -> Self {
        Self {
            cartographic_degrees: Some(CartographicRun::from([lon, lat, height])),
            ..Self::default()
        }
    }

    /// Sampled cartesian position.
    pub fn sampled(run: Cartesian3Run, meta: Option<InterpolationMeta>) -> Self {
        Self {
            cartesian: Some(run),
            meta,
            ..Self::default()
        }
    }

    /// Position that aliases another packet's position.
    pub fn reference(reference: impl Into<String>) -> Self {
        Self {
            reference: Some(reference.into()),
            ..Self::default()
        }
    }

    pub fn with_interval(mut self, interval: impl Into<String>) -> Self {
        self.interval = Some(interval.into());
        self
    }

    /// Check if any coordinate channel is present.
    pub fn has_coordinates(&self) -> bool {
        self.cartesian.is_some()
            || self.cartographic_radians.is_some()
            || self.cartographic_degrees.is_some()
            || self.cartesian_velocity.is_some()
    }

    fn decode_object(obj: &JsonObject) -> Result<Self> {
        let reference_frame = match obj.get("referenceFrame") {
            None | Some(Value::Null) => None,
            Some(v) => Some(
                ReferenceFrame::deserialize(v)
                    .map_err(|_| Error::unexpected("FIXED or INERTIAL", "referenceFrame"))?,
            ),
        };
        let position = Self {
            reference_frame,
            cartesian: crate::core::decode_field(obj, "cartesian")?,
            cartographic_radians: crate::core::decode_field(obj, "cartographicRadians")?,
            cartographic_degrees: crate::core::decode_field(obj, "cartographicDegrees")?,
            cartesian_velocity: crate::core::decode_field(obj, "cartesianVelocity")?,
            interval: opt_string(obj, "interval")?,
            reference: opt_string(obj, "reference")?,
            meta: InterpolationMeta::from_object(obj)?,
        };
        if !position.has_coordinates() && position.reference.is_none() {
            return Err(Error::missing("cartesian"));
        }
        Ok(position)
    }
}

impl JsonCodec for Position {
    /// A bare array is read as a cartesian run.
    fn decode(json: &Value) -> Result<Self> {
        if json.is_array() {
            return Cartesian3Run::decode(json).map(|run| Self::sampled(run, None));
        }
        Self::decode_object(expect_object(json, "position")?)
    }

    fn encode(&self) -> Value {
        let mut obj = JsonObject::new();
        if let Some(frame) = self.reference_frame {
            put_opt(&mut obj, "referenceFrame", serde_json::to_value(frame).ok());
        }
        encode_field(&mut obj, "cartesian", self.cartesian.as_ref());
        encode_field(&mut obj, "cartographicRadians", self.cartographic_radians.as_ref());
        encode_field(&mut obj, "cartographicDegrees", self.cartographic_degrees.as_ref());
        encode_field(&mut obj, "cartesianVelocity", self.cartesian_velocity.as_ref());
        put_opt(&mut obj, "interval", self.interval.clone().map(Value::String));
        put_opt(&mut obj, "reference", self.reference.clone().map(Value::String));
        if let Some(meta) = &self.meta {
            meta.write_into(&mut obj);
        }
        Value::Object(obj)
    }
}

/// One or more positions, typically one per interval or one per vertex.
pub type Positions = PropertyList<Position>;

/// Rotation of an entity as a unit quaternion.
pub type Orientation = Polymorphic<UnitQuaternionValue>;

/// Suggested camera offset when tracking an entity.
pub type ViewFrom = Polymorphic<CartesianValue>;

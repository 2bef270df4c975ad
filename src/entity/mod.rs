//! Scene entity properties.
//!
//! Each entity property is a flat aggregate of optional codec-typed fields,
//! keyed by their JSON names. Fields are decoded one by one; a field that
//! fails to decode fails the whole property.
//!
//! - [`Position`] / [`Positions`] / [`Orientation`] / [`ViewFrom`]
//! - [`Material`] / [`PolylineMaterial`]
//! - [`Billboard`], [`Label`], [`Point`], [`Path`], [`Model`]
//! - [`Polyline`], [`Polygon`], [`Ellipse`], [`Ellipsoid`], [`Rectangle`], [`Wall`]
//! - [`Clock`]
//! - [`ConicSensor`], [`CustomPatternSensor`], [`Fan`], [`RectangularSensor`], [`Vector`]
//! - [`CustomProperties`]

/// Declares a flat property struct and its [`JsonCodec`](crate::core::JsonCodec).
///
/// Every field is optional and maps to one JSON key.
macro_rules! czml_object {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( $(#[$fmeta:meta])* $key:literal => $field:ident : $ty:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name {
            $( $(#[$fmeta])* pub $field: Option<$ty>, )*
        }

        impl $name {
            /// JSON keys read by this property.
            pub const FIELDS: &'static [&'static str] = &[$($key),*];
        }

        impl $crate::core::JsonCodec for $name {
            fn decode(json: &serde_json::Value) -> $crate::util::Result<Self> {
                let obj = $crate::util::json::expect_object(json, stringify!($name))?;
                Ok(Self {
                    $( $field: $crate::core::decode_field(obj, $key)?, )*
                })
            }

            fn encode(&self) -> serde_json::Value {
                #[allow(unused_mut)]
                let mut obj = $crate::util::JsonObject::new();
                $( $crate::core::encode_field(&mut obj, $key, self.$field.as_ref()); )*
                serde_json::Value::Object(obj)
            }
        }
    };
}

mod position;
mod material;
mod billboard;
mod label;
mod point;
mod path;
mod model;
mod polyline;
mod polygon;
mod ellipse;
mod ellipsoid;
mod rectangle;
mod wall;
mod clock;
mod sensor;
mod custom;

pub use position::{Position, Positions, Orientation, ViewFrom, ReferenceFrame};
pub use material::{
    Material, PolylineMaterial, SolidColorMaterial, ImageMaterial, GridMaterial,
    StripeMaterial, PolylineOutlineMaterial, PolylineGlowMaterial,
};
pub use billboard::Billboard;
pub use label::Label;
pub use point::Point;
pub use path::Path;
pub use model::Model;
pub use polyline::Polyline;
pub use polygon::Polygon;
pub use ellipse::Ellipse;
pub use ellipsoid::Ellipsoid;
pub use rectangle::{Rectangle, RectangleCoordinates};
pub use wall::Wall;
pub use clock::{Clock, ClockRange, ClockStep};
pub use sensor::{ConicSensor, CustomPatternSensor, Fan, RectangularSensor, Vector, Directions};
pub use custom::CustomProperties;

use crate::core::{
    Cartesian2Value, CartesianValue, NearFarScalarValue, Polymorphic, UnitCartesianValue,
};

/// Offset in eye coordinates, metres.
pub type EyeOffset = Polymorphic<CartesianValue>;
/// Offset in screen pixels.
pub type PixelOffset = Polymorphic<Cartesian2Value>;
/// Scalar varying with camera distance.
pub type NearFarScalarProperty = Polymorphic<NearFarScalarValue>;
/// Unit-length axis.
pub type AlignedAxis = Polymorphic<UnitCartesianValue>;
/// Radii of an ellipsoid.
pub type Radii = Polymorphic<CartesianValue>;

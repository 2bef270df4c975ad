//! Core layer - the codec primitives every property is built from.
//!
//! This module provides:
//! - [`JsonCodec`] - decode/encode contract for every node of the model
//! - [`TimeTag`] - ISO-8601 or seconds-since-epoch sample times
//! - [`InterpolationMeta`] - epoch and interpolation side-fields
//! - [`Tuple`] / [`TupleRun`] - fixed-arity tuples and the tuple-run codec
//! - [`Polymorphic`] - bare, timed-run or structured property values
//! - [`PropertyList`] - one-or-many property lists

mod traits;
mod time_tag;
mod interpolation;
mod tuple;
pub(crate) mod scalar;
mod values;
mod list;

pub use traits::{JsonCodec, decode_field, encode_field};
pub use time_tag::TimeTag;
pub use interpolation::{InterpolationMeta, InterpolationAlgorithm, ExtrapolationType};
pub use tuple::{
    Tuple, TupleRun, TupleComponent,
    Cartesian2, Cartesian3, Cartographic, CartesianVelocity, Rgba, Rgbaf,
    UnitQuaternion, NearFarScalar, BoundingRectangle, Wsen, Spherical2,
    Cartesian3Run, CartographicRun, CartesianVelocityRun, RgbaRun, RgbafRun, UnitQuaternionRun,
};
pub use scalar::{
    ScalarValue, Sampled, Structured, Polymorphic,
    IntervalField, IntervalValue, IntervalRun,
};
pub use values::{
    Number, Color, ColorRun, ColorOffsets, ColorProperty, Boolean,
    CartesianValue, UnitCartesianValue, Cartesian2Value, UnitSphericalValue,
    UnitQuaternionValue, NearFarScalarValue, BoundingRectangleValue, WsenValue, WsenDegreesValue,
    Text, Uri, Font, LabelStyle, HorizontalOrigin, VerticalOrigin, StripeOrientation,
    TextProperty, UriProperty, FontProperty, LabelStyleProperty,
    HorizontalOriginProperty, VerticalOriginProperty, StripeOrientationProperty,
};
pub use list::{PropertyList, Colors, Numbers};

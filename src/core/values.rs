//! Concrete value kinds for the polymorphic codec.
//!
//! - numbers, runs of 1-tuples
//! - colours, RGBA bytes or floats
//! - tuple kinds (`cartesian`, `nearFarScalar`, ...), runs of N-tuples
//! - booleans and string-like kinds, runs of interval objects

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::core::scalar::interval_scalar;
use crate::core::{
    IntervalField, JsonCodec, Polymorphic, RgbaRun, RgbafRun, Sampled, ScalarValue, Tuple,
    TupleComponent, TupleRun,
};
use crate::util::json::{expect_bool, expect_f64, expect_str, f64_array, f64_value, JsonObject};
use crate::util::{Error, Result};

// ============================================================================
// Shared tuple field handling
// ============================================================================

/// What a tuple-valued object field decoded to.
enum TupleField<T, const N: usize> {
    Value([T; N]),
    Run(TupleRun<T, N>),
    Offsets(Vec<f64>),
}

/// Read the value field of a structured tuple-valued object.
///
/// With an epoch the field is a list of plain numbers. Otherwise it is a tuple
/// run, and a single untimed tuple counts as a constant.
fn decode_tuple_field<T: TupleComponent, const N: usize>(
    json: &Value,
    has_epoch: bool,
    at: &str,
) -> Result<TupleField<T, N>> {
    if has_epoch && json.is_array() {
        return f64_array(json, at).map(TupleField::Offsets);
    }
    let run = TupleRun::<T, N>::decode(json)?;
    Ok(match run.samples() {
        [Tuple { time: None, values }] => TupleField::Value(*values),
        _ => TupleField::Run(run),
    })
}

fn encode_offsets(offsets: &[f64]) -> Value {
    Value::Array(offsets.iter().copied().map(f64_value).collect())
}

fn single_values<T: TupleComponent, const N: usize>(run: &TupleRun<T, N>) -> Option<[T; N]> {
    run.is_single().then(|| run.first().values)
}

// ============================================================================
// Number
// ============================================================================

impl ScalarValue for f64 {
    type Run = TupleRun<f64, 1>;
    type Offsets = Vec<f64>;

    const FIELD: &'static str = "number";

    fn decode_bare(json: &Value) -> Result<Self> {
        expect_f64(json, Self::FIELD)
    }

    fn encode_bare(&self) -> Value {
        f64_value(*self)
    }

    fn decode_run(json: &Value) -> Result<Self::Run> {
        TupleRun::decode(json)
    }

    fn encode_run(run: &Self::Run) -> Value {
        run.encode()
    }

    fn run_constant(run: &Self::Run) -> Option<Self> {
        single_values(run).map(|[v]| v)
    }

    fn decode_field(obj: &JsonObject, has_epoch: bool) -> Result<Option<Sampled<Self>>> {
        let Some(json) = obj.get(Self::FIELD) else {
            return Ok(None);
        };
        if let Some(v) = json.as_f64() {
            return Ok(Some(Sampled::Value(v)));
        }
        if has_epoch {
            return f64_array(json, Self::FIELD).map(|o| Some(Sampled::EpochOffsets(o)));
        }
        TupleRun::decode(json).map(|run| Some(Sampled::Run(run)))
    }

    fn encode_field(field: &Sampled<Self>, obj: &mut JsonObject) {
        let json = match field {
            Sampled::Value(v) => f64_value(*v),
            Sampled::Run(run) => run.encode(),
            Sampled::EpochOffsets(o) => encode_offsets(o),
        };
        obj.insert(Self::FIELD.to_owned(), json);
    }
}

/// Number-valued property.
pub type Number = Polymorphic<f64>;

// ============================================================================
// Color
// ============================================================================

/// Constant colour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    /// Bytes, `0..=255`.
    Rgba([u8; 4]),
    /// Floats, `0.0..=1.0`.
    Rgbaf([f64; 4]),
}

impl Color {
    pub const WHITE: Self = Self::Rgba([255, 255, 255, 255]);
    pub const BLACK: Self = Self::Rgba([0, 0, 0, 255]);

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::Rgba([r, g, b, a])
    }

    #[inline]
    pub const fn rgbaf(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self::Rgbaf([r, g, b, a])
    }

    /// Components as floats in `0.0..=1.0`.
    pub fn to_rgbaf(&self) -> [f64; 4] {
        match self {
            Self::Rgba(c) => c.map(|v| f64::from(v) / 255.0),
            Self::Rgbaf(c) => *c,
        }
    }
}

/// Timed colour samples.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorRun {
    Rgba(RgbaRun),
    Rgbaf(RgbafRun),
}

/// Epoch-relative colour samples, tagged with the field they came from.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorOffsets {
    Rgba(Vec<f64>),
    Rgbaf(Vec<f64>),
}

impl ScalarValue for Color {
    type Run = ColorRun;
    type Offsets = ColorOffsets;

    const FIELD: &'static str = "rgba";

    /// Bytes are tried before floats.
    fn decode_bare(json: &Value) -> Result<Self> {
        Tuple::<u8, 4>::decode_untimed(json, "rgba")
            .map(|t| Self::Rgba(t.values))
            .or_else(|_| {
                Tuple::<f64, 4>::decode_untimed(json, "rgbaf").map(|t| Self::Rgbaf(t.values))
            })
    }

    /// Float colours keep their `rgbaf` key: whole components would read back as bytes.
    fn encode_bare(&self) -> Value {
        match self {
            Self::Rgba(c) => Tuple::new(*c).encode_values(),
            Self::Rgbaf(c) => json!({ "rgbaf": Tuple::new(*c).encode_values() }),
        }
    }

    fn decode_run(json: &Value) -> Result<Self::Run> {
        RgbaRun::decode(json)
            .map(ColorRun::Rgba)
            .or_else(|_| RgbafRun::decode(json).map(ColorRun::Rgbaf))
    }

    fn encode_run(run: &Self::Run) -> Value {
        match run {
            ColorRun::Rgba(r) => r.encode(),
            ColorRun::Rgbaf(r) => json!({ "rgbaf": r.encode() }),
        }
    }

    fn run_constant(run: &Self::Run) -> Option<Self> {
        match run {
            ColorRun::Rgba(r) => single_values(r).map(Self::Rgba),
            ColorRun::Rgbaf(r) => single_values(r).map(Self::Rgbaf),
        }
    }

    fn decode_field(obj: &JsonObject, has_epoch: bool) -> Result<Option<Sampled<Self>>> {
        if let Some(json) = obj.get("rgba") {
            return Ok(Some(match decode_tuple_field::<u8, 4>(json, has_epoch, "rgba")? {
                TupleField::Value(v) => Sampled::Value(Self::Rgba(v)),
                TupleField::Run(r) => Sampled::Run(ColorRun::Rgba(r)),
                TupleField::Offsets(o) => Sampled::EpochOffsets(ColorOffsets::Rgba(o)),
            }));
        }
        if let Some(json) = obj.get("rgbaf") {
            return Ok(Some(match decode_tuple_field::<f64, 4>(json, has_epoch, "rgbaf")? {
                TupleField::Value(v) => Sampled::Value(Self::Rgbaf(v)),
                TupleField::Run(r) => Sampled::Run(ColorRun::Rgbaf(r)),
                TupleField::Offsets(o) => Sampled::EpochOffsets(ColorOffsets::Rgbaf(o)),
            }));
        }
        Ok(None)
    }

    fn encode_field(field: &Sampled<Self>, obj: &mut JsonObject) {
        let (key, json) = match field {
            Sampled::Value(Self::Rgba(c)) => ("rgba", Tuple::new(*c).encode_values()),
            Sampled::Value(Self::Rgbaf(c)) => ("rgbaf", Tuple::new(*c).encode_values()),
            Sampled::Run(ColorRun::Rgba(r)) => ("rgba", r.encode()),
            Sampled::Run(ColorRun::Rgbaf(r)) => ("rgbaf", r.encode()),
            Sampled::EpochOffsets(ColorOffsets::Rgba(o)) => ("rgba", encode_offsets(o)),
            Sampled::EpochOffsets(ColorOffsets::Rgbaf(o)) => ("rgbaf", encode_offsets(o)),
        };
        obj.insert(key.to_owned(), json);
    }
}

/// Colour-valued property.
pub type ColorProperty = Polymorphic<Color>;

// ============================================================================
// Tuple kinds
// ============================================================================

/// Declares a newtype over `[f64; N]` whose object field is `$field`.
macro_rules! tuple_kind {
    ($(#[$doc:meta])* $name:ident, $field:literal, $n:literal) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, PartialEq)]
        pub struct $name(pub [f64; $n]);

        impl From<[f64; $n]> for $name {
            fn from(v: [f64; $n]) -> Self {
                Self(v)
            }
        }

        impl ScalarValue for $name {
            type Run = TupleRun<f64, $n>;
            type Offsets = Vec<f64>;

            const FIELD: &'static str = $field;

            fn decode_bare(json: &Value) -> Result<Self> {
                Tuple::<f64, $n>::decode_untimed(json, $field).map(|t| Self(t.values))
            }

            fn encode_bare(&self) -> Value {
                Tuple::new(self.0).encode_values()
            }

            fn decode_run(json: &Value) -> Result<Self::Run> {
                TupleRun::decode(json)
            }

            fn encode_run(run: &Self::Run) -> Value {
                run.encode()
            }

            fn run_constant(run: &Self::Run) -> Option<Self> {
                single_values(run).map(Self)
            }

            fn decode_field(obj: &JsonObject, has_epoch: bool) -> Result<Option<Sampled<Self>>> {
                let Some(json) = obj.get($field) else {
                    return Ok(None);
                };
                Ok(Some(match decode_tuple_field::<f64, $n>(json, has_epoch, $field)? {
                    TupleField::Value(v) => Sampled::Value(Self(v)),
                    TupleField::Run(r) => Sampled::Run(r),
                    TupleField::Offsets(o) => Sampled::EpochOffsets(o),
                }))
            }

            fn encode_field(field: &Sampled<Self>, obj: &mut JsonObject) {
                let json = match field {
                    Sampled::Value(v) => v.encode_bare(),
                    Sampled::Run(r) => r.encode(),
                    Sampled::EpochOffsets(o) => encode_offsets(o),
                };
                obj.insert($field.to_owned(), json);
            }
        }
    };
}

tuple_kind!(
    /// Cartesian `[x, y, z]`.
    CartesianValue, "cartesian", 3
);
tuple_kind!(
    /// Unit-length cartesian `[x, y, z]`.
    UnitCartesianValue, "unitCartesian", 3
);
tuple_kind!(
    /// Cartesian `[x, y]`, typically pixels.
    Cartesian2Value, "cartesian2", 2
);
tuple_kind!(
    /// Direction as `[clock, cone]` radians.
    UnitSphericalValue, "unitSpherical", 2
);
tuple_kind!(
    /// `[x, y, z, w]` rotation.
    UnitQuaternionValue, "unitQuaternion", 4
);
tuple_kind!(
    /// `[nearDistance, nearValue, farDistance, farValue]`.
    NearFarScalarValue, "nearFarScalar", 4
);
tuple_kind!(
    /// `[x, y, width, height]` in pixels.
    BoundingRectangleValue, "boundingRectangle", 4
);
tuple_kind!(
    /// West, south, east, north in radians.
    WsenValue, "wsen", 4
);
tuple_kind!(
    /// West, south, east, north in degrees.
    WsenDegreesValue, "wsenDegrees", 4
);

// ============================================================================
// Boolean and string-like kinds
// ============================================================================

impl IntervalField for bool {
    const FIELD: &'static str = "boolean";

    fn decode_value(json: &Value) -> Result<Self> {
        expect_bool(json, "boolean")
    }

    fn encode_value(&self) -> Value {
        Value::Bool(*self)
    }
}
interval_scalar!(bool);

/// Boolean-valued property.
pub type Boolean = Polymorphic<bool>;

/// Declares a newtype over `String` whose object field is `$field`.
macro_rules! string_kind {
    ($(#[$doc:meta])* $name:ident, $field:literal) => {
        $(#[$doc])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl IntervalField for $name {
            const FIELD: &'static str = $field;

            fn decode_value(json: &Value) -> Result<Self> {
                expect_str(json, $field).map(Self::new)
            }

            fn encode_value(&self) -> Value {
                Value::String(self.0.clone())
            }
        }
        interval_scalar!($name);
    };
}

string_kind!(
    /// Free text.
    Text, "string"
);
string_kind!(
    /// URI or data URI of an image or model.
    Uri, "uri"
);
string_kind!(
    /// CSS font.
    Font, "font"
);

/// Declares an [`IntervalField`] for a serde-named enumeration.
macro_rules! enum_kind {
    ($name:ident, $field:literal) => {
        impl IntervalField for $name {
            const FIELD: &'static str = $field;

            fn decode_value(json: &Value) -> Result<Self> {
                Self::deserialize(json).map_err(|_| Error::unexpected(stringify!($name), $field))
            }

            fn encode_value(&self) -> Value {
                serde_json::to_value(self).unwrap_or(Value::Null)
            }
        }
        interval_scalar!($name);
    };
}

/// How label text is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LabelStyle {
    Fill,
    Outline,
    FillAndOutline,
}
enum_kind!(LabelStyle, "labelStyle");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HorizontalOrigin {
    Left,
    Center,
    Right,
}
enum_kind!(HorizontalOrigin, "horizontalOrigin");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerticalOrigin {
    Top,
    Center,
    Bottom,
    Baseline,
}
enum_kind!(VerticalOrigin, "verticalOrigin");

/// Direction of the bands of a stripe material.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StripeOrientation {
    Horizontal,
    Vertical,
}
enum_kind!(StripeOrientation, "stripeOrientation");

pub type TextProperty = Polymorphic<Text>;
pub type UriProperty = Polymorphic<Uri>;
pub type FontProperty = Polymorphic<Font>;
pub type LabelStyleProperty = Polymorphic<LabelStyle>;
pub type HorizontalOriginProperty = Polymorphic<HorizontalOrigin>;
pub type VerticalOriginProperty = Polymorphic<VerticalOrigin>;
pub type StripeOrientationProperty = Polymorphic<StripeOrientation>;

//! The scalar-or-structured codec.
//!
//! Most CZML properties accept three surface syntaxes for the same value:
//!
//! 1. the bare value (`5.0`, `true`, `"text"`, `[255, 0, 0, 255]`),
//! 2. a bare array holding a timed run of the value,
//! 3. an object carrying the value under a kind-specific field together with
//!    `interval`, `reference` and the flattened interpolation metadata.
//!
//! Decoding tries these in that order and keeps the first success. Encoding
//! goes back to the bare syntax whenever no side information is present.

use std::fmt;

use serde_json::Value;
use tracing::trace;

use crate::core::{InterpolationMeta, JsonCodec};
use crate::util::json::{expect_object, opt_string, put_opt, JsonObject};
use crate::util::{Error, Result};

/// A value kind usable inside [`Polymorphic`].
pub trait ScalarValue: Clone + PartialEq + fmt::Debug {
    /// Timed form of the value, read from a bare JSON array.
    type Run: Clone + PartialEq + fmt::Debug;
    /// Plain numbers written relative to an epoch.
    type Offsets: Clone + PartialEq + fmt::Debug;

    /// Name of the value field, for error messages.
    const FIELD: &'static str;

    /// Read the bare form.
    fn decode_bare(json: &Value) -> Result<Self>;
    /// Write the bare form.
    fn encode_bare(&self) -> Value;

    /// Read a bare array as a timed run.
    fn decode_run(json: &Value) -> Result<Self::Run>;
    /// Write a timed run.
    fn encode_run(run: &Self::Run) -> Value;

    /// Constant value of a run that holds a single sample.
    fn run_constant(_run: &Self::Run) -> Option<Self> {
        None
    }

    /// Read the value field(s) of a structured object.
    ///
    /// `has_epoch` is known before the value is read: with an epoch the value
    /// is a list of plain numbers rather than a run with embedded time tags.
    fn decode_field(obj: &JsonObject, has_epoch: bool) -> Result<Option<Sampled<Self>>>;
    /// Write the value field(s) of a structured object.
    fn encode_field(field: &Sampled<Self>, obj: &mut JsonObject);
}

/// Content of the value field of a structured object.
#[derive(Clone, Debug, PartialEq)]
pub enum Sampled<V: ScalarValue> {
    /// A constant.
    Value(V),
    /// Time-tagged samples.
    Run(V::Run),
    /// Numbers relative to the `epoch` of the enclosing object.
    EpochOffsets(V::Offsets),
}

/// Object form of a polymorphic property.
///
/// Either `value` or `reference` must be set. An object carrying neither
/// still encodes, but decoding it back fails with [`Error::MissingValue`].
/// The constructors on [`Polymorphic`] always set one of them.
#[derive(Clone, Debug, PartialEq)]
pub struct Structured<V: ScalarValue> {
    pub value: Option<Sampled<V>>,
    pub interval: Option<String>,
    pub reference: Option<String>,
    pub meta: Option<InterpolationMeta>,
}

impl<V: ScalarValue> Structured<V> {
    fn empty() -> Self {
        Self {
            value: None,
            interval: None,
            reference: None,
            meta: None,
        }
    }

    /// Check if only the value is carried.
    pub fn is_plain(&self) -> bool {
        self.interval.is_none()
            && self.reference.is_none()
            && self.meta.as_ref().map_or(true, InterpolationMeta::is_empty)
    }

    fn decode_object(obj: &JsonObject) -> Result<Self> {
        let meta = InterpolationMeta::from_object(obj)?;
        let has_epoch = meta.as_ref().is_some_and(|m| m.epoch.is_some());
        let value = V::decode_field(obj, has_epoch)?;
        let reference = opt_string(obj, "reference")?;
        if value.is_none() && reference.is_none() {
            return Err(Error::missing(V::FIELD));
        }
        Ok(Self {
            value,
            interval: opt_string(obj, "interval")?,
            reference,
            meta,
        })
    }

    fn encode_object(&self) -> Value {
        let mut obj = JsonObject::new();
        if let Some(field) = &self.value {
            V::encode_field(field, &mut obj);
        }
        put_opt(&mut obj, "interval", self.interval.clone().map(Value::String));
        put_opt(&mut obj, "reference", self.reference.clone().map(Value::String));
        if let Some(meta) = &self.meta {
            meta.write_into(&mut obj);
        }
        Value::Object(obj)
    }
}

/// A property value in any of its three surface syntaxes.
#[derive(Clone, Debug, PartialEq)]
pub enum Polymorphic<V: ScalarValue> {
    Bare(V),
    TimedRun(V::Run),
    Structured(Structured<V>),
}

impl<V: ScalarValue> Polymorphic<V> {
    /// Structured form that only points at another packet's property.
    pub fn reference(reference: impl Into<String>) -> Self {
        Self::Structured(Structured {
            reference: Some(reference.into()),
            ..Structured::empty()
        })
    }

    /// Structured form holding a constant for one interval.
    pub fn for_interval(value: V, interval: impl Into<String>) -> Self {
        Self::Structured(Structured {
            value: Some(Sampled::Value(value)),
            interval: Some(interval.into()),
            ..Structured::empty()
        })
    }

    /// Structured form holding a run with interpolation settings.
    pub fn interpolated(run: V::Run, meta: InterpolationMeta) -> Self {
        Self::Structured(Structured {
            value: Some(Sampled::Run(run)),
            meta: Some(meta),
            ..Structured::empty()
        })
    }

    /// Structured form holding epoch-relative samples.
    pub fn epoch_samples(offsets: V::Offsets, epoch: impl Into<String>) -> Self {
        Self::Structured(Structured {
            value: Some(Sampled::EpochOffsets(offsets)),
            meta: Some(InterpolationMeta::with_epoch(epoch)),
            ..Structured::empty()
        })
    }

    /// The constant value, if the property holds one.
    pub fn constant(&self) -> Option<&V> {
        match self {
            Self::Bare(v) => Some(v),
            Self::Structured(Structured {
                value: Some(Sampled::Value(v)),
                ..
            }) => Some(v),
            _ => None,
        }
    }

    /// Reference string, if any.
    pub fn reference_str(&self) -> Option<&str> {
        match self {
            Self::Structured(s) => s.reference.as_deref(),
            _ => None,
        }
    }

    /// Interval string, if any.
    pub fn interval(&self) -> Option<&str> {
        match self {
            Self::Structured(s) => s.interval.as_deref(),
            _ => None,
        }
    }

    /// Interpolation metadata, if any.
    pub fn meta(&self) -> Option<&InterpolationMeta> {
        match self {
            Self::Structured(s) => s.meta.as_ref(),
            _ => None,
        }
    }
}

impl<V: ScalarValue> JsonCodec for Polymorphic<V> {
    fn decode(json: &Value) -> Result<Self> {
        if let Ok(v) = V::decode_bare(json) {
            return Ok(Self::Bare(v));
        }
        if json.is_array() {
            return V::decode_run(json).map(Self::TimedRun).inspect_err(|e| {
                trace!(field = V::FIELD, error = %e, "bare array is not a run");
            });
        }
        let obj = expect_object(json, V::FIELD)?;
        Structured::decode_object(obj).map(Self::Structured)
    }

    fn encode(&self) -> Value {
        match self {
            Self::Bare(v) => v.encode_bare(),
            Self::TimedRun(run) => match V::run_constant(run) {
                Some(v) => v.encode_bare(),
                None => V::encode_run(run),
            },
            Self::Structured(s) if s.is_plain() => match &s.value {
                Some(Sampled::Value(v)) => v.encode_bare(),
                Some(Sampled::Run(run)) => match V::run_constant(run) {
                    Some(v) => v.encode_bare(),
                    None => V::encode_run(run),
                },
                _ => s.encode_object(),
            },
            Self::Structured(s) => s.encode_object(),
        }
    }
}

impl<V: ScalarValue> From<V> for Polymorphic<V> {
    fn from(v: V) -> Self {
        Self::Bare(v)
    }
}

// ============================================================================
// Interval runs
// ============================================================================

/// A value kind that expresses time variation as a list of
/// `{ "interval": ..., <field>: value }` objects.
pub trait IntervalField: Sized + Clone + PartialEq + fmt::Debug {
    /// Name of the value field inside each interval object.
    const FIELD: &'static str;
    fn decode_value(json: &Value) -> Result<Self>;
    fn encode_value(&self) -> Value;
}

/// One interval of an [`IntervalRun`].
#[derive(Clone, Debug, PartialEq)]
pub struct IntervalValue<V> {
    pub interval: Option<String>,
    pub value: V,
}

impl<V: IntervalField> IntervalValue<V> {
    pub fn new(interval: impl Into<String>, value: V) -> Self {
        Self {
            interval: Some(interval.into()),
            value,
        }
    }

    fn decode(json: &Value) -> Result<Self> {
        let obj = expect_object(json, V::FIELD)?;
        let value = obj.get(V::FIELD).ok_or_else(|| Error::missing(V::FIELD))?;
        Ok(Self {
            interval: opt_string(obj, "interval")?,
            value: V::decode_value(value)?,
        })
    }

    fn encode(&self) -> Value {
        let mut obj = JsonObject::new();
        put_opt(&mut obj, "interval", self.interval.clone().map(Value::String));
        obj.insert(V::FIELD.to_owned(), self.value.encode_value());
        Value::Object(obj)
    }
}

/// Non-empty list of interval values.
#[derive(Clone, Debug, PartialEq)]
pub struct IntervalRun<V>(Vec<IntervalValue<V>>);

#[allow(clippy::len_without_is_empty)]
impl<V: IntervalField> IntervalRun<V> {
    /// Returns `None` for an empty list.
    pub fn new(intervals: Vec<IntervalValue<V>>) -> Option<Self> {
        (!intervals.is_empty()).then_some(Self(intervals))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn intervals(&self) -> &[IntervalValue<V>] {
        &self.0
    }

    /// The value when the run is a single interval-less entry.
    fn constant(&self) -> Option<&V> {
        match self.0.as_slice() {
            [IntervalValue {
                interval: None,
                value,
            }] => Some(value),
            _ => None,
        }
    }
}

impl<V: IntervalField> JsonCodec for IntervalRun<V> {
    fn decode(json: &Value) -> Result<Self> {
        let items = crate::util::json::expect_array(json, V::FIELD)?;
        let intervals = items
            .iter()
            .map(IntervalValue::decode)
            .collect::<Result<Vec<_>>>()?;
        Self::new(intervals).ok_or_else(|| Error::missing(V::FIELD))
    }

    fn encode(&self) -> Value {
        Value::Array(self.0.iter().map(IntervalValue::encode).collect())
    }
}

/// Implements [`ScalarValue`] for a kind whose runs are interval lists.
///
/// The bare form is the kind's own JSON node, the structured form holds
/// either that node or an interval list under `FIELD`. Epoch offsets do not
/// apply.
macro_rules! interval_scalar {
    ($ty:ty) => {
        impl $crate::core::ScalarValue for $ty {
            type Run = $crate::core::IntervalRun<$ty>;
            type Offsets = std::convert::Infallible;

            const FIELD: &'static str = <$ty as $crate::core::IntervalField>::FIELD;

            fn decode_bare(json: &serde_json::Value) -> $crate::util::Result<Self> {
                <$ty as $crate::core::IntervalField>::decode_value(json)
            }

            fn encode_bare(&self) -> serde_json::Value {
                <$ty as $crate::core::IntervalField>::encode_value(self)
            }

            fn decode_run(json: &serde_json::Value) -> $crate::util::Result<Self::Run> {
                <Self::Run as $crate::core::JsonCodec>::decode(json)
            }

            fn encode_run(run: &Self::Run) -> serde_json::Value {
                $crate::core::JsonCodec::encode(run)
            }

            fn run_constant(run: &Self::Run) -> Option<Self> {
                $crate::core::scalar::interval_constant(run)
            }

            fn decode_field(
                obj: &$crate::util::JsonObject,
                _has_epoch: bool,
            ) -> $crate::util::Result<Option<$crate::core::Sampled<Self>>> {
                $crate::core::scalar::decode_interval_field(obj)
            }

            fn encode_field(
                field: &$crate::core::Sampled<Self>,
                obj: &mut $crate::util::JsonObject,
            ) {
                $crate::core::scalar::encode_interval_field(field, obj)
            }
        }
    };
}
pub(crate) use interval_scalar;

#[doc(hidden)]
pub fn interval_constant<V: IntervalField>(run: &IntervalRun<V>) -> Option<V> {
    run.constant().cloned()
}

#[doc(hidden)]
pub fn decode_interval_field<V>(obj: &JsonObject) -> Result<Option<Sampled<V>>>
where
    V: IntervalField + ScalarValue<Run = IntervalRun<V>>,
{
    let Some(json) = obj.get(<V as IntervalField>::FIELD) else {
        return Ok(None);
    };
    if json.is_array() {
        return IntervalRun::decode(json).map(|r| Some(Sampled::Run(r)));
    }
    V::decode_value(json).map(|v| Some(Sampled::Value(v)))
}

#[doc(hidden)]
pub fn encode_interval_field<V>(field: &Sampled<V>, obj: &mut JsonObject)
where
    V: IntervalField + ScalarValue<Run = IntervalRun<V>>,
{
    let json = match field {
        Sampled::Value(v) => v.encode_value(),
        Sampled::Run(run) => run.encode(),
        Sampled::EpochOffsets(_) => return,
    };
    obj.insert(<V as IntervalField>::FIELD.to_owned(), json);
}

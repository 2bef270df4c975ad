//! Fixed-arity tuples and the tuple-run codec.
//!
//! A tuple run is a flat JSON array holding either one N-tuple without a time
//! (`[v1..vN]`) or a repeating sequence of time-tagged chunks
//! (`[t, v1..vN, t, v1..vN, ...]`). Which one is decided by array length
//! alone: exactly `N` is a single untimed tuple, a non-zero multiple of
//! `N + 1` is a chunked run, anything else is malformed. The first element of
//! a chunk is never inspected to pick the branch.

use std::fmt;

use serde_json::Value;
use smallvec::SmallVec;
use tracing::trace;

use crate::core::{JsonCodec, TimeTag};
use crate::util::json::{expect_array, expect_f64, expect_u8, f64_value};
use crate::util::{Error, Result};

/// Scalar component of a tuple.
pub trait TupleComponent: Copy + Default + PartialEq + fmt::Debug {
    /// Read one component.
    fn decode_component(json: &Value, at: &str) -> Result<Self>;
    /// Write one component.
    fn encode_component(self) -> Value;
}

impl TupleComponent for f64 {
    #[inline]
    fn decode_component(json: &Value, at: &str) -> Result<Self> {
        expect_f64(json, at)
    }

    #[inline]
    fn encode_component(self) -> Value {
        f64_value(self)
    }
}

/// Byte components, used by RGBA colours.
impl TupleComponent for u8 {
    #[inline]
    fn decode_component(json: &Value, at: &str) -> Result<Self> {
        expect_u8(json, at)
    }

    #[inline]
    fn encode_component(self) -> Value {
        Value::from(self)
    }
}

/// N components with an optional leading time tag.
#[derive(Clone, Debug, PartialEq)]
pub struct Tuple<T, const N: usize> {
    pub time: Option<TimeTag>,
    pub values: [T; N],
}

impl<T: TupleComponent, const N: usize> Tuple<T, N> {
    /// Create an untimed tuple.
    #[inline]
    pub const fn new(values: [T; N]) -> Self {
        Self { time: None, values }
    }

    /// Create a time-tagged tuple.
    #[inline]
    pub fn timed(time: impl Into<TimeTag>, values: [T; N]) -> Self {
        Self {
            time: Some(time.into()),
            values,
        }
    }

    /// Read exactly `N` consecutive components.
    pub(crate) fn read_values(items: &[Value], at: &str) -> Result<[T; N]> {
        if items.len() != N {
            return Err(Error::malformed_run(N, items.len()));
        }
        let mut values = [T::default(); N];
        for (slot, item) in values.iter_mut().zip(items) {
            *slot = T::decode_component(item, at)?;
        }
        Ok(values)
    }

    /// Decode a bare `[v1..vN]` array with no time tag.
    pub fn decode_untimed(json: &Value, at: &str) -> Result<Self> {
        let items = expect_array(json, at)?;
        Self::read_values(items, at).map(Self::new)
    }

    /// Encode the components only, dropping any time tag.
    pub fn encode_values(&self) -> Value {
        Value::Array(self.values.iter().map(|v| v.encode_component()).collect())
    }
}

impl<T: TupleComponent, const N: usize> From<[T; N]> for Tuple<T, N> {
    fn from(values: [T; N]) -> Self {
        Self::new(values)
    }
}

// ============================================================================
// Tuple runs
// ============================================================================

/// Non-empty ordered sequence of tuples.
///
/// One sample means a constant value; several mean time-tagged samples.
/// Time tags are not checked for presence, order or representation.
#[derive(Clone, Debug, PartialEq)]
pub struct TupleRun<T, const N: usize> {
    samples: SmallVec<[Tuple<T, N>; 1]>,
}

#[allow(clippy::len_without_is_empty)]
impl<T: TupleComponent, const N: usize> TupleRun<T, N> {
    /// Number of JSON elements in one time-tagged chunk.
    pub const CHUNK: usize = N + 1;

    /// Run holding a single tuple.
    pub fn single(tuple: impl Into<Tuple<T, N>>) -> Self {
        let mut samples = SmallVec::new();
        samples.push(tuple.into());
        Self { samples }
    }

    /// Run from a list of samples. Returns `None` for an empty list.
    pub fn from_samples(samples: impl IntoIterator<Item = Tuple<T, N>>) -> Option<Self> {
        let samples: SmallVec<[Tuple<T, N>; 1]> = samples.into_iter().collect();
        (!samples.is_empty()).then_some(Self { samples })
    }

    /// Run from `(time, values)` pairs. Returns `None` for an empty list.
    pub fn from_timed<I, Tm>(samples: I) -> Option<Self>
    where
        I: IntoIterator<Item = (Tm, [T; N])>,
        Tm: Into<TimeTag>,
    {
        Self::from_samples(samples.into_iter().map(|(t, v)| Tuple::timed(t, v)))
    }

    /// Number of samples (at least one).
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the run is a single constant tuple.
    #[inline]
    pub fn is_single(&self) -> bool {
        self.samples.len() == 1
    }

    /// First sample. Always present.
    #[inline]
    pub fn first(&self) -> &Tuple<T, N> {
        &self.samples[0]
    }

    #[inline]
    pub fn samples(&self) -> &[Tuple<T, N>] {
        &self.samples
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tuple<T, N>> {
        self.samples.iter()
    }

    /// Append a sample, returning the extended run.
    pub fn with_sample(mut self, sample: Tuple<T, N>) -> Self {
        self.samples.push(sample);
        self
    }
}

impl<T: TupleComponent, const N: usize> JsonCodec for TupleRun<T, N> {
    fn decode(json: &Value) -> Result<Self> {
        let items = expect_array(json, "tuple run")?;
        let len = items.len();

        if len == N {
            let values = Tuple::<T, N>::read_values(items, "tuple run")?;
            return Ok(Self::single(Tuple::new(values)));
        }

        if len >= Self::CHUNK && len % Self::CHUNK == 0 {
            let samples = items
                .chunks_exact(Self::CHUNK)
                .map(|chunk| {
                    let time = TimeTag::decode(&chunk[0])?;
                    let values = Tuple::<T, N>::read_values(&chunk[1..], "tuple run")?;
                    Ok(Tuple {
                        time: Some(time),
                        values,
                    })
                })
                .collect::<Result<SmallVec<_>>>()?;
            return Ok(Self { samples });
        }

        trace!(arity = N, len, "array fits neither tuple nor chunked run");
        Err(Error::malformed_run(N, len))
    }

    /// A single sample is written without its time tag. In a longer run an
    /// untimed sample is written at `0` seconds.
    fn encode(&self) -> Value {
        if let [only] = self.samples.as_slice() {
            return only.encode_values();
        }
        let mut out = Vec::with_capacity(self.samples.len() * Self::CHUNK);
        for sample in &self.samples {
            out.push(
                sample
                    .time
                    .as_ref()
                    .map_or_else(|| f64_value(0.0), TimeTag::encode),
            );
            out.extend(sample.values.iter().map(|v| v.encode_component()));
        }
        Value::Array(out)
    }
}

impl<T: TupleComponent, const N: usize> From<Tuple<T, N>> for TupleRun<T, N> {
    fn from(tuple: Tuple<T, N>) -> Self {
        Self::single(tuple)
    }
}

impl<T: TupleComponent, const N: usize> From<[T; N]> for TupleRun<T, N> {
    fn from(values: [T; N]) -> Self {
        Self::single(Tuple::new(values))
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a TupleRun<T, N> {
    type Item = &'a Tuple<T, N>;
    type IntoIter = std::slice::Iter<'a, Tuple<T, N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

// ============================================================================
// Named instantiations
// ============================================================================

/// Pixel offset or other 2D cartesian.
pub type Cartesian2 = Tuple<f64, 2>;
/// 3D cartesian in metres.
pub type Cartesian3 = Tuple<f64, 3>;
/// Longitude, latitude, height.
pub type Cartographic = Tuple<f64, 3>;
/// Position followed by velocity.
pub type CartesianVelocity = Tuple<f64, 6>;
/// Colour as bytes.
pub type Rgba = Tuple<u8, 4>;
/// Colour as floats in `0.0..=1.0`.
pub type Rgbaf = Tuple<f64, 4>;
/// `[x, y, z, w]` rotation.
pub type UnitQuaternion = Tuple<f64, 4>;
/// Near distance, near value, far distance, far value.
pub type NearFarScalar = Tuple<f64, 4>;
/// x, y, width, height.
pub type BoundingRectangle = Tuple<f64, 4>;
/// West, south, east, north.
pub type Wsen = Tuple<f64, 4>;
/// Clock, cone.
pub type Spherical2 = Tuple<f64, 2>;

pub type Cartesian3Run = TupleRun<f64, 3>;
pub type CartographicRun = TupleRun<f64, 3>;
pub type CartesianVelocityRun = TupleRun<f64, 6>;
pub type RgbaRun = TupleRun<u8, 4>;
pub type RgbafRun = TupleRun<f64, 4>;
pub type UnitQuaternionRun = TupleRun<f64, 4>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_exact_arity_is_single_untimed() {
        let run = Cartesian3Run::decode(&json!([7.0, 8.0, 9.0])).unwrap();
        assert!(run.is_single());
        assert_eq!(run.first(), &Tuple::new([7.0, 8.0, 9.0]));
    }

    #[test]
    fn test_chunked_run() {
        let json = json!([
            "2012-08-04T16:00:00Z", 1.0, 2.0, 3.0,
            "2012-08-04T16:00:01Z", 4.0, 5.0, 6.0
        ]);
        let run = Cartesian3Run::decode(&json).unwrap();
        assert_eq!(run.len(), 2);
        assert_eq!(run.samples()[0].time, Some(TimeTag::iso("2012-08-04T16:00:00Z")));
        assert_eq!(run.samples()[1].values, [4.0, 5.0, 6.0]);
        assert_eq!(run.encode(), json);
    }

    #[test]
    fn test_numeric_and_mixed_times() {
        let json = json!([0.0, 1.0, 2.0, 3.0, "2012-08-04T16:00:01Z", 4.0, 5.0, 6.0]);
        let run = Cartesian3Run::decode(&json).unwrap();
        assert_eq!(run.samples()[0].time, Some(TimeTag::seconds(0.0)));
        assert!(run.samples()[1].time.as_ref().unwrap().is_iso8601());
        assert_eq!(run.encode(), json);
    }

    #[test]
    fn test_single_chunk_is_timed_sample() {
        // N + 1 elements: one chunk
        let run = Cartesian3Run::decode(&json!([10.0, 1.0, 2.0, 3.0])).unwrap();
        assert_eq!(run.len(), 1);
        assert_eq!(run.first().time, Some(TimeTag::seconds(10.0)));
        // time is dropped for a singleton on encode
        assert_eq!(run.encode(), json!([1.0, 2.0, 3.0]));
    }

    #[test]
    fn test_malformed_lengths() {
        for len in [0usize, 1, 2, 5, 6, 7, 9] {
            let arr = Value::Array(vec![json!(1.0); len]);
            match Cartesian3Run::decode(&arr) {
                Err(Error::MalformedTupleRun { expected_arity, got_length }) => {
                    assert_eq!(expected_arity, 3);
                    assert_eq!(got_length, len);
                }
                other => panic!("len {len}: expected malformed run, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_non_numeric_value_fails() {
        assert!(matches!(
            Cartesian3Run::decode(&json!([1.0, "x", 3.0])),
            Err(Error::UnexpectedType { .. })
        ));
        assert!(matches!(
            Cartesian3Run::decode(&json!([true, 1.0, 2.0, 3.0])),
            Err(Error::UnexpectedType { .. })
        ));
        assert!(Cartesian3Run::decode(&json!({"x": 1})).is_err());
    }

    #[test]
    fn test_rgba_bytes() {
        let run = RgbaRun::decode(&json!([255, 0, 128, 255])).unwrap();
        assert_eq!(run.first().values, [255, 0, 128, 255]);
        assert!(RgbaRun::decode(&json!([256, 0, 0, 0])).is_err());
        assert!(RgbaRun::decode(&json!([0.5, 0, 0, 0])).is_err());
    }

    #[test]
    fn test_arity_six() {
        let single = CartesianVelocityRun::decode(&json!([1, 2, 3, 4, 5, 6])).unwrap();
        assert!(single.is_single());
        let timed = CartesianVelocityRun::decode(&json!([0, 1, 2, 3, 4, 5, 6, 1, 1, 2, 3, 4, 5, 6]))
            .unwrap();
        assert_eq!(timed.len(), 2);
    }

    #[test]
    fn test_untimed_sample_in_run_encodes_zero() {
        let run = Cartesian3Run::single([1.0, 2.0, 3.0])
            .with_sample(Tuple::timed(5.0, [4.0, 5.0, 6.0]));
        assert_eq!(run.encode(), json!([0.0, 1.0, 2.0, 3.0, 5.0, 4.0, 5.0, 6.0]));
    }

    #[test]
    fn test_from_samples_rejects_empty() {
        assert!(Cartesian3Run::from_samples(Vec::new()).is_none());
        let run = Cartesian3Run::from_timed([("a", [0.0; 3]), ("b", [1.0; 3])]).unwrap();
        assert_eq!(run.len(), 2);
    }
}

//! One-or-many property lists.
//!
//! A list field holds either a single property or a JSON array of them. The
//! list always has at least one element in memory; a singleton is written
//! without the surrounding array.

use serde_json::Value;

use crate::core::{ColorProperty, JsonCodec, Number};
use crate::util::{Error, Result};

/// Non-empty list of properties of one kind.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyList<P>(Vec<P>);

#[allow(clippy::len_without_is_empty)]
impl<P> PropertyList<P> {
    /// List with one element.
    pub fn single(p: P) -> Self {
        Self(vec![p])
    }

    /// List from a vector. Returns `None` for an empty vector.
    pub fn new(items: Vec<P>) -> Option<Self> {
        (!items.is_empty()).then_some(Self(items))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// First element. Always present.
    #[inline]
    pub fn first(&self) -> &P {
        &self.0[0]
    }

    #[inline]
    pub fn as_slice(&self) -> &[P] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.0.iter()
    }

    /// Append an element, returning the extended list.
    pub fn with(mut self, p: P) -> Self {
        self.0.push(p);
        self
    }

    pub fn into_vec(self) -> Vec<P> {
        self.0
    }
}

impl<P: JsonCodec> JsonCodec for PropertyList<P> {
    /// An array of `P` is tried first, then a single `P`.
    fn decode(json: &Value) -> Result<Self> {
        if let Some(items) = json.as_array() {
            if let Ok(list) = items.iter().map(P::decode).collect::<Result<Vec<_>>>() {
                if let Some(list) = Self::new(list) {
                    return Ok(list);
                }
            }
        }
        P::decode(json).map(Self::single)
    }

    fn encode(&self) -> Value {
        match self.0.as_slice() {
            [only] => only.encode(),
            items => Value::Array(items.iter().map(P::encode).collect()),
        }
    }
}

impl<P> From<P> for PropertyList<P> {
    fn from(p: P) -> Self {
        Self::single(p)
    }
}

impl<P> TryFrom<Vec<P>> for PropertyList<P> {
    type Error = Error;

    fn try_from(items: Vec<P>) -> Result<Self> {
        Self::new(items).ok_or_else(|| Error::missing("list element"))
    }
}

impl<'a, P> IntoIterator for &'a PropertyList<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// One or more colour properties, typically one per interval.
pub type Colors = PropertyList<ColorProperty>;
/// One or more number properties, typically one per interval.
pub type Numbers = PropertyList<Number>;

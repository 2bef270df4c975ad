//! `glam` interop for tuple values.
//!
//! Conversions only: the wire contract carries raw components and this
//! module never interprets them beyond moving them into `glam` types.

pub use glam::{DQuat, DVec2, DVec3, DVec4};

use crate::core::Tuple;

impl From<DVec2> for Tuple<f64, 2> {
    fn from(v: DVec2) -> Self {
        Self::new(v.to_array())
    }
}

impl From<DVec3> for Tuple<f64, 3> {
    fn from(v: DVec3) -> Self {
        Self::new(v.to_array())
    }
}

impl From<DVec4> for Tuple<f64, 4> {
    fn from(v: DVec4) -> Self {
        Self::new(v.to_array())
    }
}

/// Quaternions are written `[x, y, z, w]`, the same order `glam` stores them.
impl From<DQuat> for Tuple<f64, 4> {
    fn from(q: DQuat) -> Self {
        Self::new(q.to_array())
    }
}

impl Tuple<f64, 2> {
    #[inline]
    pub fn to_dvec2(&self) -> DVec2 {
        DVec2::from_array(self.values)
    }
}

impl Tuple<f64, 3> {
    #[inline]
    pub fn to_dvec3(&self) -> DVec3 {
        DVec3::from_array(self.values)
    }
}

impl Tuple<f64, 4> {
    #[inline]
    pub fn to_dvec4(&self) -> DVec4 {
        DVec4::from_array(self.values)
    }

    /// Interpret as an `[x, y, z, w]` quaternion.
    #[inline]
    pub fn to_dquat(&self) -> DQuat {
        DQuat::from_array(self.values)
    }
}

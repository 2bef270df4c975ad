//! Ellipsoid centred on the entity position.

use crate::core::{Boolean, Colors, Number};
use crate::entity::{Material, Radii};

czml_object! {
    pub struct Ellipsoid {
        "show" => show: Boolean,
        "radii" => radii: Radii,
        "material" => material: Material,
        "fill" => fill: Boolean,
        "outline" => outline: Boolean,
        "outlineColor" => outline_color: Colors,
        "stackPartitions" => stack_partitions: Number,
        "slicePartitions" => slice_partitions: Number,
        "subdivisions" => subdivisions: Number,
    }
}

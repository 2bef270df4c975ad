//! Ellipse: a flat or extruded ellipse centred on the entity position.

use crate::core::{Boolean, Colors, Number};
use crate::entity::Material;

czml_object! {
    pub struct Ellipse {
        "show" => show: Boolean,
        "semiMajorAxis" => semi_major_axis: Number,
        "semiMinorAxis" => semi_minor_axis: Number,
        "rotation" => rotation: Number,
        "material" => material: Material,
        "height" => height: Number,
        "extrudedHeight" => extruded_height: Number,
        "granularity" => granularity: Number,
        "stRotation" => st_rotation: Number,
        "fill" => fill: Boolean,
        "outline" => outline: Boolean,
        "outlineColor" => outline_color: Colors,
        "numberOfVerticalLines" => number_of_vertical_lines: Number,
    }
}

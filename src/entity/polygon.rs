//! Polygon: a filled area bounded by a list of positions.

use crate::core::{Boolean, Colors, Number};
use crate::entity::{Material, Positions};

czml_object! {
    pub struct Polygon {
        "show" => show: Boolean,
        "positions" => positions: Positions,
        "material" => material: Material,
        "height" => height: Number,
        "extrudedHeight" => extruded_height: Number,
        "granularity" => granularity: Number,
        "stRotation" => st_rotation: Number,
        "fill" => fill: Boolean,
        "outline" => outline: Boolean,
        "outlineColor" => outline_color: Colors,
        "perPositionHeight" => per_position_height: Boolean,
    }
}

//! Wall: a vertical curtain hanging from a list of positions.

use crate::core::{Boolean, Colors, Number};
use crate::entity::{Material, Positions};

czml_object! {
    pub struct Wall {
        "show" => show: Boolean,
        "positions" => positions: Positions,
        "material" => material: Material,
        "granularity" => granularity: Number,
        "fill" => fill: Boolean,
        "outline" => outline: Boolean,
        "outlineColor" => outline_color: Colors,
    }
}

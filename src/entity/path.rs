//! Path: the trail an entity leaves as its position changes.

use crate::core::{Boolean, Number, Numbers};
use crate::entity::PolylineMaterial;

czml_object! {
    pub struct Path {
        "show" => show: Boolean,
        "material" => material: PolylineMaterial,
        "width" => width: Number,
        "resolution" => resolution: Number,
        "leadTime" => lead_time: Numbers,
        "trailTime" => trail_time: Numbers,
    }
}

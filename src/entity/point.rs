//! Point: a dot of fixed pixel size.

use crate::core::{Boolean, Colors, Number};
use crate::entity::NearFarScalarProperty;

czml_object! {
    pub struct Point {
        "show" => show: Boolean,
        "color" => color: Colors,
        "pixelSize" => pixel_size: Number,
        "outlineColor" => outline_color: Colors,
        "outlineWidth" => outline_width: Number,
        "scaleByDistance" => scale_by_distance: NearFarScalarProperty,
        "translucencyByDistance" => translucency_by_distance: NearFarScalarProperty,
    }
}

//! Label: text drawn at the entity position.

use crate::core::{
    Boolean, Colors, FontProperty, HorizontalOriginProperty, LabelStyleProperty, Number,
    TextProperty, VerticalOriginProperty,
};
use crate::entity::{EyeOffset, NearFarScalarProperty, PixelOffset};

czml_object! {
    pub struct Label {
        "show" => show: Boolean,
        "text" => text: TextProperty,
        "font" => font: FontProperty,
        "style" => style: LabelStyleProperty,
        "scale" => scale: Number,
        "fillColor" => fill_color: Colors,
        "outlineColor" => outline_color: Colors,
        "outlineWidth" => outline_width: Number,
        "horizontalOrigin" => horizontal_origin: HorizontalOriginProperty,
        "verticalOrigin" => vertical_origin: VerticalOriginProperty,
        "eyeOffset" => eye_offset: EyeOffset,
        "pixelOffset" => pixel_offset: PixelOffset,
        "translucencyByDistance" => translucency_by_distance: NearFarScalarProperty,
        "pixelOffsetScaleByDistance" => pixel_offset_scale_by_distance: NearFarScalarProperty,
    }
}

//! Billboard: a screen-aligned image at the entity position.

use crate::core::{
    Boolean, BoundingRectangleValue, Colors, HorizontalOriginProperty, Number, Polymorphic,
    UriProperty, VerticalOriginProperty,
};
use crate::entity::{AlignedAxis, EyeOffset, NearFarScalarProperty, PixelOffset};

czml_object! {
    pub struct Billboard {
        "show" => show: Boolean,
        "image" => image: UriProperty,
        "imageSubRegion" => image_sub_region: Polymorphic<BoundingRectangleValue>,
        "scale" => scale: Number,
        "rotation" => rotation: Number,
        "alignedAxis" => aligned_axis: AlignedAxis,
        "color" => color: Colors,
        "eyeOffset" => eye_offset: EyeOffset,
        "pixelOffset" => pixel_offset: PixelOffset,
        "horizontalOrigin" => horizontal_origin: HorizontalOriginProperty,
        "verticalOrigin" => vertical_origin: VerticalOriginProperty,
        "scaleByDistance" => scale_by_distance: NearFarScalarProperty,
        "translucencyByDistance" => translucency_by_distance: NearFarScalarProperty,
        "pixelOffsetScaleByDistance" => pixel_offset_scale_by_distance: NearFarScalarProperty,
    }
}

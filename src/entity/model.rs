//! Model: a glTF model at the entity position.

use crate::core::{Boolean, Number, UriProperty};

czml_object! {
    pub struct Model {
        "show" => show: Boolean,
        "gltf" => gltf: UriProperty,
        "scale" => scale: Number,
        "minimumPixelSize" => minimum_pixel_size: Number,
        "maximumScale" => maximum_scale: Number,
        "runAnimations" => run_animations: Boolean,
    }
}

//! Surface and polyline materials.
//!
//! A material object names exactly one kind (`solidColor`, `image`, ...);
//! nothing stops a producer from writing several, and all present kinds are
//! kept.

use crate::core::{
    Cartesian2Value, Colors, Number, Polymorphic, StripeOrientationProperty, UriProperty,
};

czml_object! {
    /// Uniform colour fill.
    pub struct SolidColorMaterial {
        "color" => color: Colors,
    }
}

czml_object! {
    /// Image fill, optionally repeated.
    pub struct ImageMaterial {
        "image" => image: UriProperty,
        "repeat" => repeat: Polymorphic<Cartesian2Value>,
    }
}

czml_object! {
    /// Grid lines over a transparent cell fill.
    pub struct GridMaterial {
        "color" => color: Colors,
        "cellAlpha" => cell_alpha: Number,
        "lineCount" => line_count: Polymorphic<Cartesian2Value>,
        "lineThickness" => line_thickness: Polymorphic<Cartesian2Value>,
        "lineOffset" => line_offset: Polymorphic<Cartesian2Value>,
    }
}

czml_object! {
    /// Alternating bands of two colours.
    pub struct StripeMaterial {
        "orientation" => orientation: StripeOrientationProperty,
        "evenColor" => even_color: Colors,
        "oddColor" => odd_color: Colors,
        "offset" => offset: Number,
        "repeat" => repeat: Number,
    }
}

czml_object! {
    /// Material for surfaces: polygons, ellipses, walls, sensors.
    pub struct Material {
        "solidColor" => solid_color: SolidColorMaterial,
        "image" => image: ImageMaterial,
        "grid" => grid: GridMaterial,
        "stripe" => stripe: StripeMaterial,
    }
}

impl Material {
    /// Solid colour material.
    pub fn solid(color: impl Into<Colors>) -> Self {
        Self {
            solid_color: Some(SolidColorMaterial {
                color: Some(color.into()),
            }),
            ..Self::default()
        }
    }
}

czml_object! {
    pub struct PolylineOutlineMaterial {
        "color" => color: Colors,
        "outlineColor" => outline_color: Colors,
        "outlineWidth" => outline_width: Number,
    }
}

czml_object! {
    pub struct PolylineGlowMaterial {
        "color" => color: Colors,
        "glowPower" => glow_power: Number,
    }
}

czml_object! {
    /// Material for lines: polylines and paths.
    pub struct PolylineMaterial {
        "solidColor" => solid_color: SolidColorMaterial,
        "polylineOutline" => polyline_outline: PolylineOutlineMaterial,
        "polylineGlow" => polyline_glow: PolylineGlowMaterial,
    }
}

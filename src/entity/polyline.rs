//! Polyline: a line through a list of positions.

use crate::core::{Boolean, Number};
use crate::entity::{PolylineMaterial, Positions};

czml_object! {
    pub struct Polyline {
        "show" => show: Boolean,
        "positions" => positions: Positions,
        "material" => material: PolylineMaterial,
        "width" => width: Number,
        "followSurface" => follow_surface: Boolean,
        "granularity" => granularity: Number,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::JsonCodec;
    use serde_json::json;

    #[test]
    fn test_polyline_positions() {
        let json = json!({
            "positions": [
                {"cartographicDegrees": [-75.0, 40.0, 0.0]},
                {"cartographicDegrees": [-80.0, 35.0, 0.0]}
            ],
            "width": 3.0,
            "material": {"polylineOutline": {"color": [255, 0, 0, 255], "outlineWidth": 1.0}}
        });
        let p = Polyline::decode(&json).unwrap();
        assert_eq!(p.positions.as_ref().map(|ps| ps.len()), Some(2));
        assert_eq!(p.encode(), json);
    }
}

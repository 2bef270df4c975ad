//! The closed vocabulary of packet properties.
//!
//! A packet holds at most one property of each [`PropertyKind`]. The
//! [`PropertySet`] is keyed by kind, so a second property of the same kind
//! replaces the first.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::warn;

use crate::core::{JsonCodec, PropertyList, TextProperty};
use crate::entity::{
    Billboard, Clock, ConicSensor, CustomPatternSensor, CustomProperties, Ellipse, Ellipsoid, Fan,
    Label, Model, Orientation, Path, Point, Polygon, Polyline, Positions, Rectangle,
    RectangularSensor, Vector, ViewFrom, Wall,
};
use crate::util::{JsonObject, Result};

/// Time intervals over which an entity exists, one or many.
pub type Availability = PropertyList<String>;

macro_rules! property_kinds {
    ($( $(#[$doc:meta])* $variant:ident($ty:ty) => $key:literal, $getter:ident; )*) => {
        /// Kind of a packet property, one per JSON key.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum PropertyKind {
            $( $(#[$doc])* $variant, )*
        }

        impl PropertyKind {
            /// Every kind, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// JSON key the property is written under.
            pub fn json_key(self) -> &'static str {
                match self {
                    $( Self::$variant => $key, )*
                }
            }

            /// Kind for a JSON key, `None` for keys outside the vocabulary.
            pub fn from_key(key: &str) -> Option<Self> {
                match key {
                    $( $key => Some(Self::$variant), )*
                    _ => None,
                }
            }
        }

        /// A decoded packet property.
        #[derive(Clone, Debug, PartialEq)]
        pub enum Property {
            $( $variant($ty), )*
        }

        impl Property {
            pub fn kind(&self) -> PropertyKind {
                match self {
                    $( Self::$variant(_) => PropertyKind::$variant, )*
                }
            }

            /// Decode the JSON node stored under `kind`'s key.
            pub fn decode(kind: PropertyKind, json: &Value) -> Result<Self> {
                match kind {
                    $(
                        PropertyKind::$variant => {
                            <$ty as JsonCodec>::decode(json).map(Self::$variant)
                        }
                    )*
                }
            }

            pub fn encode(&self) -> Value {
                match self {
                    $( Self::$variant(p) => p.encode(), )*
                }
            }
        }

        $(
            impl From<$ty> for Property {
                fn from(p: $ty) -> Self {
                    Self::$variant(p)
                }
            }
        )*

        impl PropertySet {
            $(
                pub fn $getter(&self) -> Option<&$ty> {
                    match self.0.get(&PropertyKind::$variant) {
                        Some(Property::$variant(p)) => Some(p),
                        _ => None,
                    }
                }
            )*
        }
    };
}

property_kinds! {
    Position(Positions) => "position", position;
    Orientation(Orientation) => "orientation", orientation;
    ViewFrom(ViewFrom) => "viewFrom", view_from;
    Billboard(Billboard) => "billboard", billboard;
    Label(Label) => "label", label;
    Point(Point) => "point", point;
    Path(Path) => "path", path;
    Model(Model) => "model", model;
    Polyline(Polyline) => "polyline", polyline;
    Polygon(Polygon) => "polygon", polygon;
    Ellipse(Ellipse) => "ellipse", ellipse;
    Ellipsoid(Ellipsoid) => "ellipsoid", ellipsoid;
    Rectangle(Rectangle) => "rectangle", rectangle;
    Wall(Wall) => "wall", wall;
    Clock(Clock) => "clock", clock;
    ConicSensor(ConicSensor) => "agi_conicSensor", conic_sensor;
    CustomPatternSensor(CustomPatternSensor) => "agi_customPatternSensor", custom_pattern_sensor;
    Fan(Fan) => "agi_fan", fan;
    RectangularSensor(RectangularSensor) => "agi_rectangularSensor", rectangular_sensor;
    Vector(Vector) => "agi_vector", vector;
    /// Free-form `properties` object.
    Custom(CustomProperties) => "properties", custom_properties;
    Description(TextProperty) => "description", description;
    Availability(Availability) => "availability", availability;
}

/// Properties of one packet, at most one per kind.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertySet(BTreeMap<PropertyKind, Property>);

impl PropertySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a property, returning the one of the same kind it replaced.
    pub fn insert(&mut self, property: impl Into<Property>) -> Option<Property> {
        let property = property.into();
        self.0.insert(property.kind(), property)
    }

    pub fn remove(&mut self, kind: PropertyKind) -> Option<Property> {
        self.0.remove(&kind)
    }

    pub fn get(&self, kind: PropertyKind) -> Option<&Property> {
        self.0.get(&kind)
    }

    pub fn contains(&self, kind: PropertyKind) -> bool {
        self.0.contains_key(&kind)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn kinds(&self) -> impl Iterator<Item = PropertyKind> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.0.values()
    }

    /// Decode every known property of a packet object.
    ///
    /// A property that fails to decode is logged and left out.
    pub fn decode_from(obj: &JsonObject) -> Self {
        let mut set = Self::new();
        for &kind in PropertyKind::ALL {
            let Some(json) = obj.get(kind.json_key()) else {
                continue;
            };
            if json.is_null() {
                continue;
            }
            match Property::decode(kind, json) {
                Ok(property) => {
                    set.insert(property);
                }
                Err(e) => warn!(property = kind.json_key(), error = %e, "dropping property"),
            }
        }
        set
    }

    /// Write every property under its JSON key.
    pub fn encode_into(&self, obj: &mut JsonObject) {
        for (kind, property) in &self.0 {
            obj.insert(kind.json_key().to_owned(), property.encode());
        }
    }
}

impl FromIterator<Property> for PropertySet {
    fn from_iter<I: IntoIterator<Item = Property>>(iter: I) -> Self {
        let mut set = Self::new();
        for p in iter {
            set.insert(p);
        }
        set
    }
}

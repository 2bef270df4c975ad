//! A single CZML packet.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use tracing::trace;

use crate::core::JsonCodec;
use crate::packet::{Property, PropertyKind, PropertySet};
use crate::util::json::{expect_object, opt_bool, opt_string, put_opt};
use crate::util::{JsonObject, Result};

/// Packet header keys outside the property vocabulary.
const HEADER_FIELDS: [&str; 5] = ["id", "name", "parent", "version", "delete"];

/// Check if `key` belongs to the packet vocabulary.
pub fn is_packet_field(key: &str) -> bool {
    HEADER_FIELDS.contains(&key) || PropertyKind::from_key(key).is_some()
}

/// Anything that can travel as a packet of a [`CzmlDocument`](crate::packet::CzmlDocument).
pub trait CzmlPacketLike: JsonCodec {
    /// Identity of the packet, if it has one.
    fn id(&self) -> Option<&str>;

    /// Render the packet as one server-sent event.
    fn to_event_source(&self) -> String {
        format!("event: czml\ndata: {}\n\n", self.encode())
    }
}

/// One scene entity: identity, lifecycle markers and a set of properties.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CzmlPacket {
    pub id: Option<String>,
    pub name: Option<String>,
    pub parent: Option<String>,
    /// Dialect version, normally only on the `document` packet.
    pub version: Option<String>,
    /// Removes the entity with this id from the scene.
    pub delete: Option<bool>,
    pub properties: PropertySet,
}

impl CzmlPacket {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// The conventional first packet of a document.
    pub fn document(version: impl Into<String>) -> Self {
        Self::new("document").with_version(version)
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_delete(mut self, delete: bool) -> Self {
        self.delete = Some(delete);
        self
    }

    /// Set a property, replacing any property of the same kind.
    pub fn with_property(mut self, property: impl Into<Property>) -> Self {
        self.properties.insert(property);
        self
    }

    pub fn without_property(mut self, kind: PropertyKind) -> Self {
        self.properties.remove(kind);
        self
    }

    #[inline]
    pub fn property(&self, kind: PropertyKind) -> Option<&Property> {
        self.properties.get(kind)
    }

    /// Check if the packet deletes its entity.
    #[inline]
    pub fn is_delete(&self) -> bool {
        self.delete == Some(true)
    }

    pub(crate) fn decode_object(obj: &JsonObject) -> Result<Self> {
        let packet = Self {
            id: opt_string(obj, "id")?,
            name: opt_string(obj, "name")?,
            parent: opt_string(obj, "parent")?,
            version: opt_string(obj, "version")?,
            delete: opt_bool(obj, "delete")?,
            properties: PropertySet::decode_from(obj),
        };
        for key in obj.keys().filter(|k| !is_packet_field(k)) {
            trace!(id = packet.id.as_deref(), field = %key, "ignoring unknown packet field");
        }
        Ok(packet)
    }

    pub(crate) fn encode_object(&self) -> JsonObject {
        let mut obj = JsonObject::new();
        put_opt(&mut obj, "id", self.id.clone().map(Value::String));
        put_opt(&mut obj, "name", self.name.clone().map(Value::String));
        put_opt(&mut obj, "parent", self.parent.clone().map(Value::String));
        put_opt(&mut obj, "version", self.version.clone().map(Value::String));
        put_opt(&mut obj, "delete", self.delete.map(Value::Bool));
        self.properties.encode_into(&mut obj);
        obj
    }
}

impl JsonCodec for CzmlPacket {
    /// Header fields of the wrong type fail the packet. Properties that
    /// fail are dropped, unknown fields are ignored.
    fn decode(json: &Value) -> Result<Self> {
        Self::decode_object(expect_object(json, "packet")?)
    }

    fn encode(&self) -> Value {
        Value::Object(self.encode_object())
    }
}

impl CzmlPacketLike for CzmlPacket {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Serialize for CzmlPacket {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.encode().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CzmlPacket {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let json = Value::deserialize(deserializer)?;
        Self::decode(&json).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, ColorProperty, Number};
    use crate::entity::{Point, Position, Positions};
    use serde_json::json;

    #[test]
    fn test_packet_roundtrip() {
        let json = json!({
            "id": "GroundStation/Pennsylvania",
            "name": "Pennsylvania",
            "parent": "GroundStations",
            "position": {"cartographicDegrees": [-77.0, 40.0, 0.0]},
            "point": {"pixelSize": 8.0, "color": [255, 0, 0, 255]}
        });
        let packet = CzmlPacket::decode(&json).unwrap();
        assert_eq!(packet.id(), Some("GroundStation/Pennsylvania"));
        assert_eq!(packet.properties.len(), 2);
        assert_eq!(packet.encode(), json);
    }

    #[test]
    fn test_unknown_fields_and_bad_properties() {
        let json = json!({
            "id": "sat",
            "agi_futureThing": {"x": 1},
            "position": {"cartesian": [1.0, 2.0, 3.0]},
            "billboard": [1, 2]
        });
        let packet = CzmlPacket::decode(&json).unwrap();
        assert!(packet.properties.position().is_some());
        assert!(packet.property(PropertyKind::Billboard).is_none());
        assert_eq!(
            packet.encode(),
            json!({"id": "sat", "position": {"cartesian": [1.0, 2.0, 3.0]}})
        );
    }

    #[test]
    fn test_bad_header_fails_packet() {
        assert!(CzmlPacket::decode(&json!({"id": 7})).is_err());
        assert!(CzmlPacket::decode(&json!({"id": "a", "delete": "yes"})).is_err());
        assert!(CzmlPacket::decode(&json!([{"id": "a"}])).is_err());
    }

    #[test]
    fn test_functional_updates() {
        let packet = CzmlPacket::new("a")
            .with_name("Alpha")
            .with_property(Positions::single(Position::cartesian(1.0, 2.0, 3.0)))
            .with_property(Point {
                pixel_size: Some(Number::Bare(4.0)),
                color: Some(ColorProperty::Bare(Color::WHITE).into()),
                ..Point::default()
            });
        assert_eq!(packet.properties.len(), 2);

        let trimmed = packet.clone().without_property(PropertyKind::Point).with_id("b");
        assert_eq!(trimmed.id(), Some("b"));
        assert!(trimmed.properties.point().is_none());
        assert!(packet.properties.point().is_some());

        let deleted = CzmlPacket::new("a").with_delete(true);
        assert!(deleted.is_delete());
        assert_eq!(deleted.encode(), json!({"id": "a", "delete": true}));
    }

    #[test]
    fn test_event_source() {
        let packet = CzmlPacket::document("1.0");
        assert_eq!(
            packet.to_event_source(),
            "event: czml\ndata: {\"id\":\"document\",\"version\":\"1.0\"}\n\n"
        );
    }

    #[test]
    fn test_serde_delegates_to_codec() {
        let packet: CzmlPacket =
            serde_json::from_str(r#"{"id": "x", "point": {"show": true}}"#).unwrap();
        assert!(packet.properties.point().is_some());
        let text = serde_json::to_string(&packet).unwrap();
        assert_eq!(text, r#"{"id":"x","point":{"show":true}}"#);
        assert!(serde_json::from_str::<CzmlPacket>("[]").is_err());
    }
}

//! Packets carrying application-defined fields next to the standard ones.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::core::JsonCodec;
use crate::packet::{is_packet_field, CzmlPacket, CzmlPacketLike};
use crate::util::json::expect_object;
use crate::util::{JsonObject, Result};

/// A standard packet plus every field outside the packet vocabulary.
///
/// Extra fields are kept as raw JSON and written back next to the packet's
/// own fields. An extra field never overrides a standard one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExtendedPacket {
    pub packet: CzmlPacket,
    pub extra: JsonObject,
}

impl ExtendedPacket {
    pub fn new(packet: CzmlPacket) -> Self {
        Self {
            packet,
            extra: JsonObject::new(),
        }
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    #[inline]
    pub fn extra(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

impl JsonCodec for ExtendedPacket {
    fn decode(json: &Value) -> Result<Self> {
        let obj = expect_object(json, "packet")?;
        let extra = obj
            .iter()
            .filter(|(k, _)| !is_packet_field(k))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Ok(Self {
            packet: CzmlPacket::decode_object(obj)?,
            extra,
        })
    }

    fn encode(&self) -> Value {
        let mut obj = self.packet.encode_object();
        for (k, v) in &self.extra {
            obj.entry(k.clone()).or_insert_with(|| v.clone());
        }
        Value::Object(obj)
    }
}

impl CzmlPacketLike for ExtendedPacket {
    fn id(&self) -> Option<&str> {
        self.packet.id()
    }
}

impl From<CzmlPacket> for ExtendedPacket {
    fn from(packet: CzmlPacket) -> Self {
        Self::new(packet)
    }
}

impl Serialize for ExtendedPacket {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.encode().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ExtendedPacket {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let json = Value::deserialize(deserializer)?;
        Self::decode(&json).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packet::CzmlDocument;
    use serde_json::json;

    #[test]
    fn test_extra_fields_survive() {
        let json = json!({
            "id": "truck-7",
            "position": {"cartographicDegrees": [-75.1, 39.9, 0.0]},
            "fleet": {"depot": "north", "capacity": 12},
            "driver": "pat"
        });
        let p = ExtendedPacket::decode(&json).unwrap();
        assert_eq!(p.id(), Some("truck-7"));
        assert_eq!(p.extra.len(), 2);
        assert_eq!(p.extra("driver"), Some(&json!("pat")));
        assert!(p.packet.properties.position().is_some());
        assert_eq!(p.encode(), json);
    }

    #[test]
    fn test_extra_never_overrides() {
        let p = ExtendedPacket::new(CzmlPacket::new("a"))
            .with_extra("id", "b")
            .with_extra("tag", 3);
        assert_eq!(p.encode(), json!({"id": "a", "tag": 3}));
    }

    #[test]
    fn test_document_of_extended_packets() {
        let text = r#"[{"id": "document", "version": "1.0"}, {"id": "x", "score": 0.5}, "junk"]"#;
        let doc: CzmlDocument<ExtendedPacket> = text.parse().unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.find("x").and_then(|p| p.extra("score")), Some(&json!(0.5)));
        assert!(doc.to_event_stream().contains("\"score\":0.5"));
    }
}

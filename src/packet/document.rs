//! The top-level document: an ordered array of packets.

use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::JsonCodec;
use crate::packet::{CzmlPacket, CzmlPacketLike};
use crate::util::json::expect_array;
use crate::util::{Error, Result};

/// Ordered sequence of packets.
///
/// `P` defaults to [`CzmlPacket`]; any [`CzmlPacketLike`] type can be carried
/// instead, e.g. [`ExtendedPacket`](crate::packet::ExtendedPacket).
#[derive(Clone, Debug, PartialEq)]
pub struct CzmlDocument<P = CzmlPacket> {
    packets: Vec<P>,
}

impl<P> Default for CzmlDocument<P> {
    fn default() -> Self {
        Self {
            packets: Vec::new(),
        }
    }
}

impl<P: CzmlPacketLike> CzmlDocument<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_packets(packets: Vec<P>) -> Self {
        Self { packets }
    }

    /// Append a packet, returning the extended document.
    pub fn with_packet(mut self, packet: P) -> Self {
        self.packets.push(packet);
        self
    }

    pub fn push(&mut self, packet: P) {
        self.packets.push(packet);
    }

    #[inline]
    pub fn packets(&self) -> &[P] {
        &self.packets
    }

    pub fn into_packets(self) -> Vec<P> {
        self.packets
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.packets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.packets.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.packets.iter()
    }

    /// First packet with the given id.
    pub fn find(&self, id: &str) -> Option<&P> {
        self.packets.iter().find(|p| p.id() == Some(id))
    }

    /// Compact JSON text.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.encode())?)
    }

    /// Indented JSON text.
    pub fn to_json_string_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.encode())?)
    }

    /// All packets as consecutive server-sent events.
    pub fn to_event_stream(&self) -> String {
        self.packets.iter().map(P::to_event_source).collect()
    }
}

impl<P: CzmlPacketLike> JsonCodec for CzmlDocument<P> {
    /// Packets that fail to decode are logged and dropped.
    fn decode(json: &Value) -> Result<Self> {
        let items = expect_array(json, "document")?;
        let mut packets = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match P::decode(item) {
                Ok(packet) => packets.push(packet),
                Err(e) => warn!(index, error = %e, "dropping packet"),
            }
        }
        debug!(decoded = packets.len(), total = items.len(), "decoded document");
        Ok(Self { packets })
    }

    fn encode(&self) -> Value {
        Value::Array(self.packets.iter().map(P::encode).collect())
    }
}

impl<P: CzmlPacketLike> FromStr for CzmlDocument<P> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let json: Value = serde_json::from_str(s)?;
        Self::decode(&json)
    }
}

impl<P: CzmlPacketLike> FromIterator<P> for CzmlDocument<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::from_packets(iter.into_iter().collect())
    }
}

impl<'a, P> IntoIterator for &'a CzmlDocument<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.packets.iter()
    }
}

impl<P: CzmlPacketLike> Serialize for CzmlDocument<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.encode().serialize(serializer)
    }
}

impl<'de, P: CzmlPacketLike> Deserialize<'de> for CzmlDocument<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let json = Value::deserialize(deserializer)?;
        Self::decode(&json).map_err(de::Error::custom)
    }
}

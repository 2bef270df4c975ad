//! Packet and document assembly.
//!
//! - [`PropertyKind`] / [`Property`] / [`PropertySet`] - the property vocabulary
//! - [`CzmlPacket`] - one scene entity
//! - [`CzmlPacketLike`] - what a document needs from its packets
//! - [`CzmlDocument`] - the top-level packet array
//! - [`ExtendedPacket`] - a packet with application-defined extra fields

mod property;
mod packet;
mod document;
mod extended;

pub use property::{Availability, Property, PropertyKind, PropertySet};
pub use packet::{is_packet_field, CzmlPacket, CzmlPacketLike};
pub use document::CzmlDocument;
pub use extended::ExtendedPacket;

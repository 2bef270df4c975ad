//! # CZML
//!
//! Bidirectional codec for CZML, the JSON dialect describing time-dynamic
//! scenes as an array of packets.
//!
//! Decoding never panics and tolerates partial damage: a packet that cannot be
//! read is dropped from its document, a property that cannot be read is
//! dropped from its packet, and unknown fields are ignored. Encoding writes
//! the most compact form that decodes back to the same value.
//!
//! ## Modules
//!
//! - [`util`] - Errors and JSON node helpers
//! - [`core`] - Codec primitives: time tags, tuple runs, polymorphic values, lists
//! - [`entity`] - Scene entity properties (position, billboard, sensors, ...)
//! - [`packet`] - Packets, documents and the property vocabulary
//!
//! ## Features
//!
//! - `time` - ISO-8601 resolution of [`TimeTag`](core::TimeTag) through `chrono`
//! - `math` - `glam` conversions for tuples
//!
//! ## Example
//!
//! ```
//! use czml::prelude::*;
//!
//! let text = r#"[
//!     {"id": "document", "version": "1.0"},
//!     {"id": "sat", "position": {"cartesian": [7.0, 8.0, 9.0]}}
//! ]"#;
//! let doc: CzmlDocument = text.parse()?;
//! let sat = doc.find("sat").unwrap();
//! assert!(sat.properties.position().is_some());
//!
//! let packet = CzmlPacket::new("station")
//!     .with_property(Positions::from(Position::degrees(-75.0, 40.0, 0.0)));
//! let doc = doc.with_packet(packet);
//! assert_eq!(doc.len(), 3);
//! # Ok::<(), czml::Error>(())
//! ```

pub mod util;
pub mod core;
pub mod entity;
pub mod packet;

// Re-export commonly used types
pub use util::{Error, Result};
pub use packet::{CzmlDocument, CzmlPacket, CzmlPacketLike, ExtendedPacket};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::util::{Error, Result};
    pub use crate::core::{
        JsonCodec, TimeTag, InterpolationMeta, InterpolationAlgorithm, ExtrapolationType,
        Tuple, TupleRun, Polymorphic, PropertyList, Number, Color, ColorProperty, Colors,
        Boolean, Text, TextProperty,
    };
    pub use crate::entity::*;
    pub use crate::packet::*;
}

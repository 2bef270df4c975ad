//! Document-level decoding, encoding and failure tolerance.

mod common;

use czml::core::{JsonCodec, Number, Text, TimeTag};
use czml::entity::{Clock, ClockRange, Label, Path, Position, Positions};
use czml::packet::{Property, PropertyKind};
use czml::{CzmlDocument, CzmlPacket, CzmlPacketLike, ExtendedPacket};
use serde_json::{json, Value};

/// A small scene: document header, a sampled satellite and a ground station.
fn scene() -> Value {
    json!([
        {
            "id": "document",
            "name": "simple",
            "version": "1.0",
            "clock": {
                "interval": "2012-03-15T10:00:00Z/2012-03-16T10:00:00Z",
                "currentTime": "2012-03-15T10:00:00Z",
                "multiplier": 60.0,
                "range": "LOOP_STOP",
                "step": "SYSTEM_CLOCK_MULTIPLIER"
            }
        },
        {
            "id": "Satellite/Geoeye1",
            "name": "Geoeye1",
            "availability": "2012-03-15T10:00:00Z/2012-03-16T10:00:00Z",
            "description": "<p>Earth observation satellite</p>",
            "billboard": {
                "image": "data:image/png;base64,iVBORw0KGgo=",
                "scale": 1.5,
                "show": true
            },
            "label": {
                "fillColor": {"rgba": [255, 255, 0, 255]},
                "font": "11pt Lucida Console",
                "horizontalOrigin": "LEFT",
                "outlineWidth": 2.0,
                "pixelOffset": {"cartesian2": [12.0, 0.0]},
                "style": "FILL_AND_OUTLINE",
                "text": "Geoeye 1"
            },
            "path": {
                "material": {"solidColor": {"color": [255, 255, 0, 255]}},
                "width": 1.0,
                "resolution": 120.0,
                "leadTime": [
                    {"interval": "2012-03-15T10:00:00Z/2012-03-15T11:00:00Z", "number": 3600.0},
                    {"interval": "2012-03-15T11:00:00Z/2012-03-16T10:00:00Z", "number": 0.0}
                ]
            },
            "position": {
                "interpolationAlgorithm": "LAGRANGE",
                "interpolationDegree": 5,
                "referenceFrame": "INERTIAL",
                "epoch": "2012-03-15T10:00:00Z",
                "cartesian": [
                    0.0, 4650397.56, -3390535.52, -4087729.48,
                    300.0, 4446602.73, -3712178.94, -4052525.84,
                    600.0, 4227050.75, -4013780.82, -4002900.71
                ]
            },
            "orientation": {"unitQuaternion": [0.0, 0.0, 0.0, 1.0]}
        },
        {
            "id": "Facility/AGI",
            "name": "AGI",
            "parent": "Facilities",
            "position": {"cartographicDegrees": [-75.5966, 40.0386, 0.0]},
            "point": {"color": [0, 255, 255, 255], "pixelSize": 10.0},
            "agi_conicSensor": {
                "outerHalfAngle": 0.7,
                "radius": 1.0e6,
                "lateralSurfaceMaterial": {"solidColor": {"color": {"rgbaf": [0.0, 1.0, 1.0, 0.5]}}}
            },
            "properties": {"operator": "AGI", "tier": 2}
        }
    ])
}

#[test]
fn test_end_to_end_scenario() {
    common::init_tracing();
    let json = json!([
        {"id": "a", "position": {"cartesian": [7.0, 8.0, 9.0]}},
        {"id": "a", "position": {"cartesian": [
            "2012-08-04T16:00:00Z", 1.0, 2.0, 3.0,
            "2012-08-04T16:00:01Z", 4.0, 5.0, 6.0
        ]}}
    ]);
    let doc = CzmlDocument::<CzmlPacket>::decode(&json).expect("Failed to decode document");
    assert_eq!(doc.len(), 2);
    for packet in &doc {
        assert_eq!(packet.id(), Some("a"));
    }

    let run = doc.packets()[1]
        .properties
        .position()
        .and_then(|p| p.first().cartesian.as_ref())
        .expect("second packet should carry a cartesian run");
    assert_eq!(run.len(), 2);
    assert_eq!(run.samples()[1].time, Some(TimeTag::iso("2012-08-04T16:00:01Z")));

    assert_eq!(doc.encode(), json, "re-encoding must keep every key and value");
}

#[test]
fn test_unknown_packet_field_tolerance() {
    common::init_tracing();
    let json = json!([{
        "id": "x",
        "name": "X",
        "agi_someFutureProperty": {"enabled": true},
        "position": {"cartographicDegrees": [1.0, 2.0, 3.0]},
        "point": {"pixelSize": 5.0}
    }]);
    let doc = CzmlDocument::<CzmlPacket>::decode(&json).expect("Failed to decode document");
    let packet = &doc.packets()[0];
    assert_eq!(packet.properties.len(), 2);
    assert!(packet.properties.position().is_some());
    assert!(packet.properties.point().is_some());

    let out = packet.encode();
    assert!(out.get("agi_someFutureProperty").is_none());
    assert_eq!(out["name"], json!("X"));
}

#[test]
fn test_partial_document_tolerance() {
    common::init_tracing();
    let json = json!([
        {"id": "document", "version": "1.0"},
        ["not", "a", "packet"],
        {"id": "ok", "point": {"pixelSize": 3.0}},
        42,
        {"id": "half-broken", "point": {"pixelSize": "big"}, "label": {"text": "fine"}}
    ]);
    let doc = CzmlDocument::<CzmlPacket>::decode(&json).expect("Failed to decode document");
    let ids: Vec<_> = doc.iter().filter_map(CzmlPacketLike::id).collect();
    assert_eq!(ids, ["document", "ok", "half-broken"]);

    let half = doc.find("half-broken").expect("packet with a bad property survives");
    assert!(half.properties.point().is_none());
    assert!(half.properties.label().is_some());
}

#[test]
fn test_scene_roundtrip() {
    common::init_tracing();
    let json = scene();
    let doc: CzmlDocument = serde_json::from_value(json.clone()).expect("Failed to decode scene");
    assert_eq!(doc.len(), 3);

    let header = doc.find("document").expect("document packet");
    let clock = header.properties.clock().expect("clock");
    assert_eq!(clock.range, Some(ClockRange::LoopStop));

    let sat = doc.find("Satellite/Geoeye1").expect("satellite packet");
    let position = sat.properties.position().expect("position").first();
    assert_eq!(position.cartesian.as_ref().map(|r| r.len()), Some(3));
    let path = sat.properties.path().expect("path");
    assert_eq!(path.lead_time.as_ref().map(|l| l.len()), Some(2));

    let facility = doc.find("Facility/AGI").expect("facility packet");
    assert_eq!(facility.parent.as_deref(), Some("Facilities"));
    assert_eq!(
        facility.properties.custom_properties().and_then(|c| c.get("tier")),
        Some(&json!(2))
    );

    let out = serde_json::to_value(&doc).expect("Failed to encode scene");
    let packets = out.as_array().expect("document encodes as array");
    assert_eq!(packets[0], json[0]);
    assert_eq!(packets[1]["position"], json[1]["position"]);
    assert_eq!(packets[1]["path"], json[1]["path"]);
    assert_eq!(packets[1]["orientation"], json!([0.0, 0.0, 0.0, 1.0]));
    assert_eq!(packets[1]["label"]["fillColor"], json!([255, 255, 0, 255]));
    assert_eq!(packets[1]["label"]["pixelOffset"], json!([12.0, 0.0]));
    assert_eq!(packets[2]["properties"], json[2]["properties"]);

    // Compact output is stable under another round-trip.
    let again: CzmlDocument = serde_json::from_value(out.clone()).expect("Failed to decode output");
    assert_eq!(serde_json::to_value(&again).expect("Failed to encode again"), out);
}

#[test]
fn test_build_document() {
    let doc = CzmlDocument::new()
        .with_packet(
            CzmlPacket::document("1.0").with_property(
                Clock::new("2012-03-15T10:00:00Z/2012-03-16T10:00:00Z", "2012-03-15T10:00:00Z")
                    .with_multiplier(10.0),
            ),
        )
        .with_packet(
            CzmlPacket::new("station")
                .with_name("Station")
                .with_property(Positions::from(Position::degrees(-75.0, 40.0, 0.0)))
                .with_property(Label {
                    text: Some(Text::from("Station").into()),
                    ..Label::default()
                })
                .with_property(Path {
                    width: Some(Number::Bare(2.0)),
                    ..Path::default()
                }),
        );

    let station = doc.find("station").expect("station packet");
    let kinds: Vec<_> = station.properties.kinds().collect();
    assert_eq!(kinds, [PropertyKind::Position, PropertyKind::Label, PropertyKind::Path]);

    let text = doc.to_json_string().expect("Failed to write text");
    let back: CzmlDocument = text.parse().expect("Failed to read text back");
    assert_eq!(back, doc);

    let stream = doc.to_event_stream();
    assert_eq!(stream.matches("event: czml\n").count(), 2);
    assert!(stream.ends_with("\n\n"));
}

#[test]
fn test_replace_and_remove_properties() {
    let packet = CzmlPacket::new("p")
        .with_property(Label::default())
        .with_property(Label {
            show: Some(false.into()),
            ..Label::default()
        });
    match packet.property(PropertyKind::Label) {
        Some(Property::Label(label)) => assert!(label.show.is_some(), "later label wins"),
        other => panic!("expected label, got {other:?}"),
    }
    let packet = packet.without_property(PropertyKind::Label);
    assert!(packet.properties.is_empty());
}

#[test]
fn test_extended_packets() {
    common::init_tracing();
    let json = json!([
        {"id": "document", "version": "1.0"},
        {"id": "truck", "position": {"cartographicDegrees": [-75.0, 40.0, 0.0]}, "route": "R7"}
    ]);
    let doc = CzmlDocument::<ExtendedPacket>::decode(&json).expect("Failed to decode document");
    let truck = doc.find("truck").expect("truck packet");
    assert_eq!(truck.extra("route"), Some(&json!("R7")));
    assert_eq!(doc.encode(), json);

    let plain = CzmlDocument::<CzmlPacket>::decode(&json).expect("Failed to decode document");
    assert!(plain.encode()[1].get("route").is_none());
}

#[cfg(feature = "time")]
#[test]
fn test_resolve_sample_times() {
    let doc = CzmlDocument::<CzmlPacket>::decode(&scene()).expect("Failed to decode scene");
    let sat = doc.find("Satellite/Geoeye1").expect("satellite packet");
    let position = sat.properties.position().expect("position").first();
    let epoch = position.meta.as_ref().and_then(|m| m.epoch.as_deref());
    let run = position.cartesian.as_ref().expect("cartesian run");

    let start = run.samples()[0].time.as_ref().expect("time").resolve(epoch).expect("resolve");
    let last = run.samples()[2].time.as_ref().expect("time").resolve(epoch).expect("resolve");
    assert_eq!((last - start).num_seconds(), 600);
    assert!(TimeTag::seconds(1.0).resolve(None).is_err());
}

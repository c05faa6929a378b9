//! Tests of the output surfaces: folded lines, SVG rendering, and the
//! ranked profile report, driven end-to-end through a counting pass.

mod common;

use avro_byte_profiler::counter::count_bytes_per_field;
use avro_byte_profiler::flamegraph::{render_svg, to_flamegraph_lines, FlamegraphConfig};
use avro_byte_profiler::report::{byte_distribution, profile_to_string, to_profile, ByteProfile};
use avro_byte_profiler::schema::{RecordField, Schema, SchemaKind};
use pretty_assertions::assert_eq;

use common::{payload, string, varint};

fn person_schema() -> Schema {
    let mut builder = Schema::builder();
    let string = builder.insert(SchemaKind::String);
    let null = builder.insert(SchemaKind::Null);
    let long = builder.insert(SchemaKind::Long);
    let favorite = builder.insert(SchemaKind::Union {
        branches: vec![null, long],
    });
    let interests = builder.insert(SchemaKind::Array { items: string });
    let root = builder.insert(SchemaKind::Record {
        name: "Person".to_string(),
        fields: vec![
            RecordField::new("userName", string),
            RecordField::new("favoriteNumber", favorite),
            RecordField::new("interests", interests),
        ],
    });
    builder.build(root)
}

fn martin_payload() -> Vec<u8> {
    payload(&[
        string("Martin"),
        varint(1),
        varint(1337),
        varint(2),
        string("hacking"),
        string("daydreaming"),
        varint(0),
    ])
}

#[test]
fn test_folded_lines_in_decode_order() {
    let counts = count_bytes_per_field(&person_schema(), &martin_payload()).unwrap();
    let lines: Vec<String> = to_flamegraph_lines(&counts).collect();

    assert_eq!(
        lines,
        vec![
            "userName 7",
            "favoriteNumber 1",
            "favoriteNumber;long 2",
            "interests 2",
            "interests;[0] 8",
            "interests;[1] 12",
        ]
    );
}

#[test]
fn test_folded_lines_restart_cleanly() {
    let counts = count_bytes_per_field(&person_schema(), &martin_payload()).unwrap();
    let first: Vec<String> = to_flamegraph_lines(&counts).collect();
    let second: Vec<String> = to_flamegraph_lines(&counts).collect();
    assert_eq!(first, second);
}

#[test]
fn test_svg_renders_from_counted_payload() {
    let counts = count_bytes_per_field(&person_schema(), &martin_payload()).unwrap();

    let config = FlamegraphConfig::new().with_title("Person payload");
    let svg = render_svg(&counts, &config).unwrap();

    assert!(svg.contains("<svg"));
    assert!(svg.contains("Person payload"));
}

#[test]
fn test_profile_ranks_hot_fields() {
    let counts = count_bytes_per_field(&person_schema(), &martin_payload()).unwrap();
    let profile = to_profile(&counts, 3);

    assert_eq!(profile.total_bytes, 32);
    assert_eq!(profile.hot_fields.len(), 3);
    assert_eq!(profile.hot_fields[0].path, "interests[1]");
    assert_eq!(profile.hot_fields[0].bytes, 12);
    assert_eq!(profile.hot_fields[1].path, "interests[0]");
    assert_eq!(profile.hot_fields[2].path, "userName");
    assert!((profile.hot_fields[0].percentage - 37.5).abs() < 0.01);
}

#[test]
fn test_profile_serializes_to_json() {
    let counts = count_bytes_per_field(&person_schema(), &martin_payload()).unwrap();
    let profile = to_profile(&counts, 10);

    let json = profile_to_string(&profile).unwrap();
    let loaded: ByteProfile = serde_json::from_str(&json).unwrap();

    assert_eq!(loaded.total_bytes, 32);
    assert_eq!(loaded.hot_fields.len(), profile.hot_fields.len());
    assert_eq!(loaded.version, profile.version);
}

#[test]
fn test_distribution_over_counted_payload() {
    let counts = count_bytes_per_field(&person_schema(), &martin_payload()).unwrap();
    let dist = byte_distribution(&counts);

    assert_eq!(dist.total_bytes, 32);
    assert_eq!(dist.entry_count, 6);
    assert!(!dist.summary().is_empty());
}

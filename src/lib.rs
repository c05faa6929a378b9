//! Avro Byte Profiler
//!
//! Per-field byte profiling and flamegraph generation for Avro
//! binary-encoded payloads.
//!
//! Given a schema tree and a byte buffer known to have been encoded
//! against it, the counting pass walks the schema in lock-step with a
//! cursor over the buffer and reconstructs the exact byte spans consumed
//! by every field, nested field, array element, map entry, and union
//! branch. The result is exposed as an ordered path-to-bytes mapping, as
//! folded-stack lines for flamegraph tooling, and as a ranked hot-field
//! report.
//!
//! ```
//! use avro_byte_profiler::counter::count_bytes_per_field;
//! use avro_byte_profiler::flamegraph::to_flamegraph_lines;
//! use avro_byte_profiler::schema::{RecordField, Schema, SchemaKind};
//!
//! let mut builder = Schema::builder();
//! let string = builder.insert(SchemaKind::String);
//! let root = builder.insert(SchemaKind::Record {
//!     name: "Person".to_string(),
//!     fields: vec![RecordField::new("userName", string)],
//! });
//! let schema = builder.build(root);
//!
//! // "Martin" encoded as a length-prefixed string
//! let payload = [0x0c, b'M', b'a', b'r', b't', b'i', b'n'];
//! let counts = count_bytes_per_field(&schema, &payload).unwrap();
//!
//! assert_eq!(counts.total_bytes(), 7);
//! let lines: Vec<String> = to_flamegraph_lines(&counts).collect();
//! assert_eq!(lines, vec!["userName 7"]);
//! ```

pub mod counter;
pub mod decoder;
pub mod flamegraph;
pub mod report;
pub mod schema;
pub mod utils;

// Re-export the primary API surface
pub use counter::{count_bytes_per_field, ByteCountMap, ByteCounter, FieldPath, PathSegment};
pub use flamegraph::{render_svg, to_flamegraph_lines, FlamegraphConfig};
pub use report::{byte_distribution, to_profile, ByteDistribution, ByteProfile, HotField};
pub use schema::{RecordField, Schema, SchemaBuilder, SchemaId, SchemaKind};
pub use utils::error::{CountError, DecodeError, ErrorKind, FlamegraphError};

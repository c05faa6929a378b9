//! Byte accounting: field paths, the ordered count map, and the
//! decode-and-measure walker.
//!
//! This module is the algorithmic core. It drives the decoder over the
//! payload in lock-step with the schema tree and produces the
//! path-to-bytes mapping everything downstream consumes.

pub mod count_map;
pub mod path;
pub mod walker;

// Re-export main types
pub use count_map::ByteCountMap;
pub use path::{FieldPath, PathSegment};
pub use walker::{count_bytes_per_field, ByteCounter};

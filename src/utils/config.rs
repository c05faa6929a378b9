//! Configuration and constants shared across the crate.

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Maximum encoded width of a zigzag varint backing a 64-bit value
pub const MAX_VARINT_BYTES: usize = 10;

// Wire widths of the fixed-size primitives
pub const BOOLEAN_WIDTH: usize = 1;
pub const FLOAT_WIDTH: usize = 4;
pub const DOUBLE_WIDTH: usize = 8;

/// Separator between path segments in folded-stack lines
pub const FOLDED_SEPARATOR: char = ';';

/// Rendering of the empty (top-level) path in human-readable output
pub const ROOT_LABEL: &str = "<root>";

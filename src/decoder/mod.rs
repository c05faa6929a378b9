//! Primitive decoding over the encoded byte buffer.
//!
//! This module handles:
//! - Cursor tracking over a borrowed byte slice
//! - The Avro binary primitive encodings (zigzag varints, IEEE-754,
//!   length-prefixed spans, fixed-width spans)
//! - Exact accounting of bytes consumed per read

pub mod cursor;

// Re-export main types
pub use cursor::Cursor;

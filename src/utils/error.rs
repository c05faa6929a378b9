//! Error types for the entire crate.
//!
//! We use `thiserror` for library-style errors with custom types.
//! Every decode failure carries the byte offset where it happened, and
//! counting-pass failures additionally carry the field path being visited,
//! so a mismatch can be triaged down to the field that desynchronized.

use crate::counter::FieldPath;
use crate::utils::config::MAX_VARINT_BYTES;
use thiserror::Error;

/// What went wrong, independent of where.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("unexpected end of buffer ({needed} more bytes required)")]
    UnexpectedEndOfBuffer { needed: usize },

    #[error("varint exceeds {MAX_VARINT_BYTES} bytes without terminating")]
    MalformedVarint,

    #[error("index {discriminant} out of range ({arity} alternatives)")]
    SchemaMismatch { discriminant: i64, arity: usize },

    #[error("negative length {length} for length-prefixed value")]
    NegativeLength { length: i64 },
}

/// A primitive decode failure, raised by [`Cursor`](crate::decoder::Cursor).
///
/// The offset is the position at which the failing read began.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at byte offset {offset}")]
pub struct DecodeError {
    pub kind: ErrorKind,
    pub offset: usize,
}

/// A counting-pass failure: a decode failure plus the field path that was
/// being visited when it happened.
///
/// The pass aborts on the first failure; a partially built map is
/// discarded, since byte attribution after a desynchronization point is
/// meaningless.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at byte offset {offset} while visiting `{path}`")]
pub struct CountError {
    pub kind: ErrorKind,
    pub offset: usize,
    pub path: FieldPath,
}

impl CountError {
    pub(crate) fn from_decode(err: DecodeError, path: &FieldPath) -> Self {
        Self {
            kind: err.kind,
            offset: err.offset,
            path: path.clone(),
        }
    }
}

/// Errors that can occur during flamegraph rendering
#[derive(Error, Debug)]
pub enum FlamegraphError {
    #[error("empty profile: no byte counts to render")]
    EmptyProfile,

    #[error("failed to render flamegraph: {0}")]
    RenderFailed(String),
}

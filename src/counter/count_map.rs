//! Insertion-ordered byte accounting map.

use super::path::FieldPath;
use indexmap::IndexMap;

/// Mapping from field path to exclusive byte count.
///
/// Iteration order is insertion order, i.e. decode order. That is
/// deliberate: folded stacks built from this map read top-to-bottom
/// consistent with schema declaration order. Built once per counting
/// pass and not mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteCountMap {
    counts: IndexMap<FieldPath, u64>,
}

impl ByteCountMap {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Adds `bytes` to the total recorded for `path`. A path seen for the
    /// first time is appended at the tail; accumulating into an existing
    /// path does not disturb its position.
    pub(crate) fn add(&mut self, path: FieldPath, bytes: u64) {
        *self.counts.entry(path).or_insert(0) += bytes;
    }

    /// Byte count recorded for `path`, if any.
    pub fn get(&self, path: &FieldPath) -> Option<u64> {
        self.counts.get(path).copied()
    }

    /// Iterates entries in decode order.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldPath, u64)> + '_ {
        self.counts.iter().map(|(path, bytes)| (path, *bytes))
    }

    /// Number of recorded paths.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of every entry. For a payload the pass consumed completely
    /// this equals the buffer length.
    pub fn total_bytes(&self) -> u64 {
        self.counts.values().sum()
    }
}

//! Folded-stack formatting of byte count maps.
//!
//! One line per map entry: the path segments joined with `;`, a single
//! space, then the decimal byte count - the collapsed-stack format
//! flamegraph renderers consume.
//!
//! Example: "interests;[0] 8"
//! This means: the first element of the `interests` array occupies 8
//! bytes of the payload.

use crate::counter::ByteCountMap;
use crate::utils::config::FOLDED_SEPARATOR;

/// Formats `counts` as folded-stack lines.
///
/// Lines come out in decode order, not sorted, so nested stacks read
/// top-to-bottom consistent with schema declaration order. The iterator
/// is lazy and borrows the map; call again to restart it.
pub fn to_flamegraph_lines(counts: &ByteCountMap) -> impl Iterator<Item = String> + '_ {
    counts
        .iter()
        .map(|(path, bytes)| format!("{} {bytes}", path.join(FOLDED_SEPARATOR)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::{FieldPath, PathSegment};

    fn sample_counts() -> ByteCountMap {
        let mut map = ByteCountMap::new();
        let interests = FieldPath::root().child(PathSegment::Field("interests".to_string()));
        map.add(interests.clone(), 2);
        map.add(interests.child(PathSegment::Index(0)), 8);
        map.add(interests.child(PathSegment::Index(1)), 12);
        map
    }

    #[test]
    fn test_lines_follow_insertion_order() {
        let lines: Vec<String> = to_flamegraph_lines(&sample_counts()).collect();
        assert_eq!(lines, vec!["interests 2", "interests;[0] 8", "interests;[1] 12"]);
    }

    #[test]
    fn test_iterator_is_restartable() {
        let counts = sample_counts();
        let first: Vec<String> = to_flamegraph_lines(&counts).collect();
        let second: Vec<String> = to_flamegraph_lines(&counts).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_counts_are_emitted() {
        let mut map = ByteCountMap::new();
        map.add(
            FieldPath::root().child(PathSegment::Branch("null".to_string())),
            0,
        );
        let lines: Vec<String> = to_flamegraph_lines(&map).collect();
        assert_eq!(lines, vec!["null 0"]);
    }
}

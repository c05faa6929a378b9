//! Field paths: the accounting keys of the counting pass.

use crate::utils::config::ROOT_LABEL;
use std::fmt;

/// One structural step inside the schema tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A record field, by declared name
    Field(String),

    /// An array element, by running ordinal (0-based, continuing across
    /// blocks)
    Index(usize),

    /// A map entry, by decoded key text
    Key(String),

    /// A union branch, by branch marker
    Branch(String),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => f.write_str(name),
            PathSegment::Index(ordinal) => write!(f, "[{ordinal}]"),
            PathSegment::Key(key) => f.write_str(key),
            PathSegment::Branch(label) => f.write_str(label),
        }
    }
}

/// An ordered sequence of segments identifying one decode event's place
/// in the schema tree.
///
/// Two decode events sharing the same path accumulate into the same
/// total. Kept structural (not a pre-joined string) so the folded
/// formatter decides how to render it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// The empty path: the top-level value itself.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn from_segments(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    /// Returns a new path with `segment` appended.
    pub fn child(&self, segment: PathSegment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(segment);
        Self { segments }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Renders the path with `sep` between segments, as used by the
    /// folded-stack formatter. The root path renders as [`ROOT_LABEL`].
    pub fn join(&self, sep: char) -> String {
        if self.segments.is_empty() {
            return ROOT_LABEL.to_string();
        }
        let mut out = String::new();
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                out.push(sep);
            }
            out.push_str(&segment.to_string());
        }
        out
    }
}

impl fmt::Display for FieldPath {
    /// Dotted diagnostic form: `interests[0]`, `favoriteNumber.long`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str(ROOT_LABEL);
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Index(_) => write!(f, "{segment}")?,
                _ if i == 0 => write!(f, "{segment}")?,
                _ => write!(f, ".{segment}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_path() -> FieldPath {
        FieldPath::root()
            .child(PathSegment::Field("interests".to_string()))
            .child(PathSegment::Index(1))
    }

    #[test]
    fn test_child_leaves_parent_untouched() {
        let parent = FieldPath::root().child(PathSegment::Field("a".to_string()));
        let child = parent.child(PathSegment::Field("b".to_string()));
        assert_eq!(parent.segments().len(), 1);
        assert_eq!(child.segments().len(), 2);
    }

    #[test]
    fn test_display_dotted_form() {
        assert_eq!(sample_path().to_string(), "interests[1]");

        let union = FieldPath::root()
            .child(PathSegment::Field("favoriteNumber".to_string()))
            .child(PathSegment::Branch("long".to_string()));
        assert_eq!(union.to_string(), "favoriteNumber.long");

        assert_eq!(FieldPath::root().to_string(), ROOT_LABEL);
    }

    #[test]
    fn test_join_with_separator() {
        assert_eq!(sample_path().join(';'), "interests;[1]");
        assert_eq!(FieldPath::root().join(';'), ROOT_LABEL);
    }

    #[test]
    fn test_paths_compare_structurally() {
        let a = FieldPath::from_segments(vec![PathSegment::Key("k".to_string())]);
        let b = FieldPath::root().child(PathSegment::Key("k".to_string()));
        assert_eq!(a, b);
        assert_ne!(a, FieldPath::root().child(PathSegment::Field("k".to_string())));
    }
}

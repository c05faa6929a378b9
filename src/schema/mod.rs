//! Schema tree definitions.
//!
//! The schema is the counting pass's external contract: a tree of nodes
//! describing the shape of the encoded datum, with named-type resolution
//! already completed by whatever parsed it. Nodes live in an arena
//! ([`Schema`]) and reference each other through [`SchemaId`] indices, so
//! recursive shapes (a record whose field refers back to the record) are
//! representable without ownership cycles.
//!
//! The counting pass only ever reads this tree; it is plain owned data and
//! therefore safe to share across parallel passes.

/// Index of a node inside a [`Schema`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SchemaId(usize);

/// A single named field of a record schema.
///
/// Field order inside a record is significant: it determines decode order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordField {
    /// Declared field name
    pub name: String,

    /// Schema of the field's value
    pub schema: SchemaId,
}

impl RecordField {
    pub fn new(name: impl Into<String>, schema: SchemaId) -> Self {
        Self {
            name: name.into(),
            schema,
        }
    }
}

/// The closed set of recognized schema kinds.
///
/// Named types (`Fixed`, `Enum`, `Record`) carry their declared name so a
/// union branch can be labeled with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaKind {
    Null,
    Boolean,
    Int,
    Long,
    Float,
    Double,
    Bytes,
    String,
    Fixed { name: String, size: usize },
    Enum { name: String, symbols: Vec<String> },
    Array { items: SchemaId },
    Map { values: SchemaId },
    Record { name: String, fields: Vec<RecordField> },
    Union { branches: Vec<SchemaId> },
}

impl SchemaKind {
    /// Wire-format kind name.
    pub fn type_name(&self) -> &str {
        match self {
            SchemaKind::Null => "null",
            SchemaKind::Boolean => "boolean",
            SchemaKind::Int => "int",
            SchemaKind::Long => "long",
            SchemaKind::Float => "float",
            SchemaKind::Double => "double",
            SchemaKind::Bytes => "bytes",
            SchemaKind::String => "string",
            SchemaKind::Fixed { .. } => "fixed",
            SchemaKind::Enum { .. } => "enum",
            SchemaKind::Array { .. } => "array",
            SchemaKind::Map { .. } => "map",
            SchemaKind::Record { .. } => "record",
            SchemaKind::Union { .. } => "union",
        }
    }

    /// Marker used when this schema is selected as a union branch: the
    /// declared name for named types, the kind name otherwise.
    pub fn branch_label(&self) -> &str {
        match self {
            SchemaKind::Fixed { name, .. }
            | SchemaKind::Enum { name, .. }
            | SchemaKind::Record { name, .. } => name,
            other => other.type_name(),
        }
    }
}

/// Arena of schema nodes with a designated root.
///
/// Construct through [`Schema::builder`]; ids handed out by the builder
/// are the only valid ids for the resulting arena.
#[derive(Debug, Clone)]
pub struct Schema {
    nodes: Vec<SchemaKind>,
    root: SchemaId,
}

impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Builds a single-node schema - convenient for primitive roots.
    pub fn primitive(kind: SchemaKind) -> Self {
        let mut builder = SchemaBuilder::new();
        let root = builder.insert(kind);
        builder.build(root)
    }

    /// The node the decode starts from.
    pub fn root(&self) -> SchemaId {
        self.root
    }

    /// Looks up a node by id.
    ///
    /// Ids must come from the builder that produced this arena.
    pub fn kind(&self, id: SchemaId) -> &SchemaKind {
        &self.nodes[id.0]
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Incremental arena construction. Children are inserted before the
/// parents that reference them; [`SchemaBuilder::reserve`] breaks the
/// ordering for self-referential shapes.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    nodes: Vec<SchemaKind>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node and returns its id.
    pub fn insert(&mut self, kind: SchemaKind) -> SchemaId {
        let id = SchemaId(self.nodes.len());
        self.nodes.push(kind);
        id
    }

    /// Reserves an id to be filled later with [`SchemaBuilder::set`], for
    /// schemas that refer back to themselves.
    pub fn reserve(&mut self) -> SchemaId {
        self.insert(SchemaKind::Null)
    }

    /// Replaces the node at a previously reserved id.
    pub fn set(&mut self, id: SchemaId, kind: SchemaKind) {
        self.nodes[id.0] = kind;
    }

    /// Finishes the arena with `root` as the decode entry point.
    pub fn build(self, root: SchemaId) -> Schema {
        assert!(root.0 < self.nodes.len(), "root id out of arena bounds");
        Schema {
            nodes: self.nodes,
            root,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_hands_out_sequential_ids() {
        let mut builder = Schema::builder();
        let long = builder.insert(SchemaKind::Long);
        let array = builder.insert(SchemaKind::Array { items: long });
        let schema = builder.build(array);

        assert_eq!(schema.len(), 2);
        assert_eq!(schema.root(), array);
        assert_eq!(*schema.kind(long), SchemaKind::Long);
    }

    #[test]
    fn test_branch_label_prefers_declared_name() {
        let fixed = SchemaKind::Fixed {
            name: "md5".to_string(),
            size: 16,
        };
        assert_eq!(fixed.branch_label(), "md5");
        assert_eq!(fixed.type_name(), "fixed");
        assert_eq!(SchemaKind::Long.branch_label(), "long");
    }

    #[test]
    fn test_self_referential_record() {
        // A linked list: Node { value: long, next: union[null, Node] }
        let mut builder = Schema::builder();
        let node = builder.reserve();
        let long = builder.insert(SchemaKind::Long);
        let null = builder.insert(SchemaKind::Null);
        let next = builder.insert(SchemaKind::Union {
            branches: vec![null, node],
        });
        builder.set(
            node,
            SchemaKind::Record {
                name: "Node".to_string(),
                fields: vec![
                    RecordField::new("value", long),
                    RecordField::new("next", next),
                ],
            },
        );
        let schema = builder.build(node);

        match schema.kind(schema.root()) {
            SchemaKind::Record { name, fields } => {
                assert_eq!(name, "Node");
                assert_eq!(fields.len(), 2);
            }
            other => panic!("expected record, got {other:?}"),
        }
    }

    #[test]
    #[should_panic(expected = "root id out of arena bounds")]
    fn test_build_rejects_foreign_root() {
        let mut other = Schema::builder();
        let id = other.insert(SchemaKind::Long);
        let _ = other.insert(SchemaKind::Array { items: id });

        let empty = Schema::builder();
        // `id` belongs to `other`, not `empty`
        let _ = empty.build(id);
    }
}

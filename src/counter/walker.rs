//! The decode-and-measure walker.
//!
//! Walks the schema tree in lock-step with a cursor over the encoded
//! datum, advancing the cursor exactly as a real decoder would, and
//! attributes every consumed byte range to the field path that produced
//! it. Values are never materialized beyond what is needed to know their
//! length; strings, bytes and fixeds are skipped, not decoded.

use crate::decoder::Cursor;
use crate::schema::{Schema, SchemaId, SchemaKind};
use crate::utils::config::{BOOLEAN_WIDTH, DOUBLE_WIDTH, FLOAT_WIDTH};
use crate::utils::error::{CountError, DecodeError, ErrorKind};
use log::{debug, warn};

use super::count_map::ByteCountMap;
use super::path::{FieldPath, PathSegment};

/// Schema-driven byte counting over a single encoded datum.
///
/// The [`count_bytes_per_field`] free function covers the common case;
/// construct a `ByteCounter` to flip defensive options.
#[derive(Debug, Clone)]
pub struct ByteCounter<'s> {
    schema: &'s Schema,
    validate_enums: bool,
}

impl<'s> ByteCounter<'s> {
    pub fn new(schema: &'s Schema) -> Self {
        Self {
            schema,
            validate_enums: false,
        }
    }

    /// Range-check enum symbol indices against the symbol list.
    ///
    /// Off by default: a wild enum index still decodes to a well-defined
    /// byte span, unlike a wild union discriminant, which always aborts
    /// the pass.
    pub fn with_enum_validation(mut self, validate: bool) -> Self {
        self.validate_enums = validate;
        self
    }

    /// Runs the counting pass over `buffer`.
    ///
    /// The buffer must contain exactly one datum encoded against the
    /// schema; trailing bytes are logged and ignored, mismatched payloads
    /// fail with the offset and field path of the first bad read.
    pub fn count(&self, buffer: &[u8]) -> Result<ByteCountMap, CountError> {
        debug!("counting {} bytes against the schema root", buffer.len());

        let mut pass = Pass {
            schema: self.schema,
            cursor: Cursor::new(buffer),
            counts: ByteCountMap::new(),
            validate_enums: self.validate_enums,
        };
        pass.visit(self.schema.root(), &FieldPath::root())?;

        let trailing = pass.cursor.remaining();
        if trailing > 0 {
            warn!("{trailing} trailing bytes after the top-level value");
        }
        debug!(
            "attributed {} bytes across {} paths",
            pass.counts.total_bytes(),
            pass.counts.len()
        );

        Ok(pass.counts)
    }
}

/// Counts how many bytes each field's encoding occupies inside `buffer`.
///
/// Primary entry point. Pure: the schema and buffer are only read, and
/// the returned map is the sole output. See [`ByteCounter`] for the
/// configurable form.
///
/// # Arguments
/// * `schema` - the schema the buffer was encoded against
/// * `buffer` - a single binary-encoded datum
///
/// # Returns
/// An insertion-ordered map from field path to exclusive byte count
///
/// # Errors
/// * `ErrorKind::UnexpectedEndOfBuffer` - a read past the buffer's end
/// * `ErrorKind::MalformedVarint` - an unterminated varint
/// * `ErrorKind::SchemaMismatch` - a union discriminant out of range
/// * `ErrorKind::NegativeLength` - a negative length prefix or block size
pub fn count_bytes_per_field(schema: &Schema, buffer: &[u8]) -> Result<ByteCountMap, CountError> {
    ByteCounter::new(schema).count(buffer)
}

/// State of one traversal: the cursor and the map under construction.
/// Exclusively owned for the lifetime of the pass.
struct Pass<'a> {
    schema: &'a Schema,
    cursor: Cursor<'a>,
    counts: ByteCountMap,
    validate_enums: bool,
}

impl Pass<'_> {
    /// Decodes one node, records its cost under `path` per the
    /// attribution rules, and returns the total bytes consumed by the
    /// node (self plus descendants).
    fn visit(&mut self, id: SchemaId, path: &FieldPath) -> Result<usize, CountError> {
        let schema = self.schema;
        match schema.kind(id) {
            // Zero bytes, but still emitted so the output covers every
            // visited path.
            SchemaKind::Null => {
                let consumed = self.cursor.read_null();
                self.counts.add(path.clone(), consumed as u64);
                Ok(consumed)
            }

            SchemaKind::Boolean => {
                self.cursor.read_boolean().map_err(err_at(path))?;
                self.counts.add(path.clone(), BOOLEAN_WIDTH as u64);
                Ok(BOOLEAN_WIDTH)
            }

            SchemaKind::Int | SchemaKind::Long => {
                let (_, consumed) = self.cursor.read_varint().map_err(err_at(path))?;
                self.counts.add(path.clone(), consumed as u64);
                Ok(consumed)
            }

            SchemaKind::Float => {
                self.cursor.read_float().map_err(err_at(path))?;
                self.counts.add(path.clone(), FLOAT_WIDTH as u64);
                Ok(FLOAT_WIDTH)
            }

            SchemaKind::Double => {
                self.cursor.read_double().map_err(err_at(path))?;
                self.counts.add(path.clone(), DOUBLE_WIDTH as u64);
                Ok(DOUBLE_WIDTH)
            }

            // Length prefix and payload are one inseparable cost.
            SchemaKind::Bytes | SchemaKind::String => {
                let (_, consumed) = self.cursor.read_length_prefixed().map_err(err_at(path))?;
                self.counts.add(path.clone(), consumed as u64);
                Ok(consumed)
            }

            SchemaKind::Fixed { size, .. } => {
                let size = *size;
                self.cursor.read_raw(size).map_err(err_at(path))?;
                self.counts.add(path.clone(), size as u64);
                Ok(size)
            }

            SchemaKind::Enum { symbols, .. } => {
                let at = self.cursor.position();
                let (index, consumed) = self.cursor.read_varint().map_err(err_at(path))?;
                if self.validate_enums && !(0..symbols.len() as i64).contains(&index) {
                    return Err(CountError {
                        kind: ErrorKind::SchemaMismatch {
                            discriminant: index,
                            arity: symbols.len(),
                        },
                        offset: at,
                        path: path.clone(),
                    });
                }
                self.counts.add(path.clone(), consumed as u64);
                Ok(consumed)
            }

            // A record is just the concatenation of its fields, in
            // declared order; it has no overhead of its own and no
            // synthetic whole-record entry.
            SchemaKind::Record { fields, .. } => {
                let mut consumed = 0;
                for field in fields {
                    let child = path.child(PathSegment::Field(field.name.clone()));
                    consumed += self.visit(field.schema, &child)?;
                }
                Ok(consumed)
            }

            SchemaKind::Array { items } => self.visit_blocks(*items, path, false),
            SchemaKind::Map { values } => self.visit_blocks(*values, path, true),

            SchemaKind::Union { branches } => {
                let at = self.cursor.position();
                let (discriminant, consumed) = self.cursor.read_varint().map_err(err_at(path))?;
                self.counts.add(path.clone(), consumed as u64);

                let branch = usize::try_from(discriminant)
                    .ok()
                    .and_then(|i| branches.get(i))
                    .copied()
                    .ok_or_else(|| CountError {
                        kind: ErrorKind::SchemaMismatch {
                            discriminant,
                            arity: branches.len(),
                        },
                        offset: at,
                        path: path.clone(),
                    })?;

                let label = schema.kind(branch).branch_label().to_string();
                let child = path.child(PathSegment::Branch(label));
                Ok(consumed + self.visit(branch, &child)?)
            }
        }
    }

    /// Shared block loop for arrays and maps.
    ///
    /// Block-count varints (the terminator included) and the block-size
    /// varint of an opaque negative-count block are the composite's own
    /// overhead, charged to `path`; items land under their own segments.
    fn visit_blocks(
        &mut self,
        item: SchemaId,
        path: &FieldPath,
        keyed: bool,
    ) -> Result<usize, CountError> {
        let mut consumed = 0;
        let mut ordinal = 0usize;

        loop {
            let (block_count, header) = self.cursor.read_varint().map_err(err_at(path))?;
            self.counts.add(path.clone(), header as u64);
            consumed += header;

            if block_count == 0 {
                break;
            }

            if block_count < 0 {
                // Opaque block: a byte size follows, and the |count|
                // items inside are charged in aggregate without being
                // individually decoded.
                let at = self.cursor.position();
                let (block_size, size_header) =
                    self.cursor.read_varint().map_err(err_at(path))?;
                self.counts.add(path.clone(), size_header as u64);
                consumed += size_header;

                if block_size < 0 {
                    return Err(CountError {
                        kind: ErrorKind::NegativeLength { length: block_size },
                        offset: at,
                        path: path.clone(),
                    });
                }

                let size = block_size as usize;
                self.cursor.read_raw(size).map_err(err_at(path))?;
                self.counts.add(path.clone(), size as u64);
                consumed += size;
                // Keep later blocks' element ordinals stable.
                ordinal += block_count.unsigned_abs() as usize;
                continue;
            }

            for _ in 0..block_count {
                let entry = if keyed {
                    let (key, key_bytes) =
                        self.cursor.read_length_prefixed().map_err(err_at(path))?;
                    let entry =
                        path.child(PathSegment::Key(String::from_utf8_lossy(key).into_owned()));
                    // The key is the entry's own overhead, the same rule
                    // that charges block headers to the composite's path.
                    self.counts.add(entry.clone(), key_bytes as u64);
                    consumed += key_bytes;
                    entry
                } else {
                    path.child(PathSegment::Index(ordinal))
                };
                consumed += self.visit(item, &entry)?;
                ordinal += 1;
            }
        }

        Ok(consumed)
    }
}

fn err_at(path: &FieldPath) -> impl FnOnce(DecodeError) -> CountError + '_ {
    move |err| CountError::from_decode(err, path)
}

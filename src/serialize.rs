//! Snapshot encoding for edit scripts.
//!
//! Persists an operation list with rkyv using a flat format: each op
//! stores an optional line per side. Snapshots carry magic bytes and a
//! schema version, both checked on decode.

use rkyv::rancor::Error as RkyvError;
use rkyv::util::AlignedVec;
use rkyv::{Archive, Deserialize as RkyvDeserialize, Serialize as RkyvSerialize};

use crate::error::{DiffError, DiffResult};
use crate::line::Line;
use crate::op::DiffOp;

/// Current schema version for snapshot validation.
/// Increment this when making breaking changes to `SerDiff`.
pub const SCHEMA_VERSION: u32 = 1;

/// Magic bytes for tola-linediff snapshots.
const MAGIC: [u8; 4] = *b"LDIF";

#[derive(Archive, RkyvSerialize, RkyvDeserialize, Debug)]
struct SerDiff {
    magic: [u8; 4],
    schema_version: u32,
    ops: Vec<SerOp>,
}

#[derive(Archive, RkyvSerialize, RkyvDeserialize, Debug)]
struct SerOp {
    original: Option<SerLine>,
    modified: Option<SerLine>,
}

#[derive(Archive, RkyvSerialize, RkyvDeserialize, Debug)]
struct SerLine {
    number: u64,
    content: String,
}

impl From<&Line> for SerLine {
    fn from(line: &Line) -> Self {
        Self {
            number: line.number as u64,
            content: line.content.to_string(),
        }
    }
}

impl SerLine {
    fn into_line(self) -> DiffResult<Line> {
        let number = usize::try_from(self.number)
            .map_err(|_| DiffError::corrupted(format!("line number {} out of range", self.number)))?;
        Ok(Line::new(self.content, number))
    }
}

/// Serialize an edit script to bytes.
pub fn to_bytes(ops: &[DiffOp]) -> DiffResult<Vec<u8>> {
    let ser = SerDiff {
        magic: MAGIC,
        schema_version: SCHEMA_VERSION,
        ops: ops
            .iter()
            .map(|op| SerOp {
                original: op.original().map(SerLine::from),
                modified: op.modified().map(SerLine::from),
            })
            .collect(),
    };

    let bytes = rkyv::to_bytes::<RkyvError>(&ser)?;
    Ok(bytes.to_vec())
}

/// Deserialize bytes to an edit script.
///
/// # Errors
///
/// Returns an error if:
/// - Magic bytes don't match (not a tola-linediff snapshot)
/// - Schema version is incompatible
/// - Archive data is corrupted, or an op has no line on either side
pub fn from_bytes(bytes: &[u8]) -> DiffResult<Vec<DiffOp>> {
    // Archived data must be aligned; byte slices from storage may not be.
    let mut aligned = AlignedVec::<16>::with_capacity(bytes.len());
    aligned.extend_from_slice(bytes);

    let ser = rkyv::from_bytes::<SerDiff, RkyvError>(&aligned)?;

    if ser.magic != MAGIC {
        return Err(DiffError::InvalidMagic {
            expected: MAGIC,
            found: ser.magic,
        });
    }

    if ser.schema_version != SCHEMA_VERSION {
        return Err(DiffError::VersionMismatch {
            expected: SCHEMA_VERSION,
            found: ser.schema_version,
        });
    }

    ser.ops.into_iter().map(from_ser_op).collect()
}

fn from_ser_op(op: SerOp) -> DiffResult<DiffOp> {
    match (op.original, op.modified) {
        (Some(original), Some(modified)) => Ok(DiffOp::Equal {
            original: original.into_line()?,
            modified: modified.into_line()?,
        }),
        (Some(original), None) => Ok(DiffOp::Delete {
            original: original.into_line()?,
        }),
        (None, Some(modified)) => Ok(DiffOp::Insert {
            modified: modified.into_line()?,
        }),
        (None, None) => Err(DiffError::corrupted("operation without lines")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compute_diff;
    use crate::options::CompareOptions;

    #[test]
    fn test_snapshot_restores_ops() {
        let ops = compute_diff("keep\nold\ntail", "keep\nnew\ntail\nmore", &CompareOptions::LENIENT);
        let bytes = to_bytes(&ops).unwrap();
        assert_eq!(from_bytes(&bytes).unwrap(), ops);
    }

    #[test]
    fn test_rejects_wrong_magic() {
        let ser = SerDiff {
            magic: *b"NOPE",
            schema_version: SCHEMA_VERSION,
            ops: vec![],
        };
        let bytes = rkyv::to_bytes::<RkyvError>(&ser).unwrap();
        assert!(matches!(
            from_bytes(&bytes),
            Err(DiffError::InvalidMagic { found, .. }) if found == *b"NOPE"
        ));
    }

    #[test]
    fn test_rejects_other_version() {
        let ser = SerDiff {
            magic: MAGIC,
            schema_version: SCHEMA_VERSION + 1,
            ops: vec![],
        };
        let bytes = rkyv::to_bytes::<RkyvError>(&ser).unwrap();
        assert!(matches!(
            from_bytes(&bytes),
            Err(DiffError::VersionMismatch { found, .. }) if found == SCHEMA_VERSION + 1
        ));
    }

    #[test]
    fn test_rejects_empty_op() {
        let ser = SerDiff {
            magic: MAGIC,
            schema_version: SCHEMA_VERSION,
            ops: vec![SerOp {
                original: None,
                modified: None,
            }],
        };
        let bytes = rkyv::to_bytes::<RkyvError>(&ser).unwrap();
        assert!(matches!(from_bytes(&bytes), Err(DiffError::Corrupted(_))));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(from_bytes(&[1, 2, 3]).is_err());
    }
}

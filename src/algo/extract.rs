//! Diff Operation Extractor
//!
//! Walks the LCS table backward from `(n, m)` to the origin and emits one
//! operation per step, then reverses the list into forward order.
//!
//! # Tie-break
//!
//! When moving left (insert) and moving up (delete) keep the same LCS score,
//! the insert move is taken first. Because the walk runs backward, a
//! replaced block comes out in forward order as all its deletes followed by
//! all its inserts.
//!
//! Equality during the walk uses the same [`LineKeys`] the table was built
//! from, so both phases always agree on which lines match.

use crate::line::{Line, LineKeys};
use crate::op::DiffOp;

use super::lcs::LcsMatrix;

/// Extract the edit script from a filled table.
///
/// `original` and `modified` must be the lines `keys` and `matrix` were
/// built from.
pub fn extract_ops(
    matrix: &LcsMatrix,
    keys: &LineKeys,
    original: &[Line],
    modified: &[Line],
) -> Vec<DiffOp> {
    let mut i = original.len();
    let mut j = modified.len();
    let mut ops = Vec::with_capacity(i + j - matrix.lcs_len() as usize);

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && keys.same(i - 1, j - 1) {
            ops.push(DiffOp::Equal {
                original: original[i - 1].clone(),
                modified: modified[j - 1].clone(),
            });
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || matrix.get(i, j - 1) >= matrix.get(i - 1, j)) {
            ops.push(DiffOp::Insert {
                modified: modified[j - 1].clone(),
            });
            j -= 1;
        } else {
            ops.push(DiffOp::Delete {
                original: original[i - 1].clone(),
            });
            i -= 1;
        }
    }

    ops.reverse();
    ops
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::split_lines;
    use crate::op::OpKind;
    use crate::options::CompareOptions;

    fn kinds(a: &str, b: &str) -> Vec<OpKind> {
        let original = split_lines(a);
        let modified = split_lines(b);
        let keys = LineKeys::build(&original, &modified, &CompareOptions::EXACT);
        let matrix = LcsMatrix::build(&keys);
        extract_ops(&matrix, &keys, &original, &modified)
            .iter()
            .map(DiffOp::kind)
            .collect()
    }

    #[test]
    fn test_replacement_deletes_before_inserts() {
        assert_eq!(
            kinds("line1\nline2\nline3", "line1\nlineX\nline3"),
            [OpKind::Equal, OpKind::Delete, OpKind::Insert, OpKind::Equal]
        );
    }

    #[test]
    fn test_block_replacement_grouped() {
        assert_eq!(
            kinds("a\nb\nc", "x\ny"),
            [
                OpKind::Delete,
                OpKind::Delete,
                OpKind::Delete,
                OpKind::Insert,
                OpKind::Insert
            ]
        );
    }

    #[test]
    fn test_pure_insert_and_delete() {
        assert_eq!(
            kinds("a\nc", "a\nb\nc"),
            [OpKind::Equal, OpKind::Insert, OpKind::Equal]
        );
        assert_eq!(
            kinds("a\nb\nc", "a\nc"),
            [OpKind::Equal, OpKind::Delete, OpKind::Equal]
        );
    }

    #[test]
    fn test_line_numbers_carried() {
        let original = split_lines("a\nb");
        let modified = split_lines("z\na\nb");
        let keys = LineKeys::build(&original, &modified, &CompareOptions::EXACT);
        let ops = extract_ops(&LcsMatrix::build(&keys), &keys, &original, &modified);

        assert_eq!(
            ops[0],
            DiffOp::Insert {
                modified: Line::new("z", 1)
            }
        );
        assert_eq!(
            ops[1],
            DiffOp::Equal {
                original: Line::new("a", 1),
                modified: Line::new("a", 2),
            }
        );
    }

    #[test]
    fn test_empty_sequences() {
        let keys = LineKeys {
            original: vec![],
            modified: vec![],
        };
        let ops = extract_ops(&LcsMatrix::build(&keys), &keys, &[], &[]);
        assert!(ops.is_empty());
    }
}

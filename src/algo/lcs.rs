//! LCS Matrix Builder
//!
//! Classic O(n*m) dynamic program over interned line keys.
//!
//! # Layout
//!
//! The table is stored flat, row-major, `(n + 1) x (m + 1)` cells. Row 0 and
//! column 0 are the all-zero base case, and every cell is non-decreasing
//! along both axes.
//!
//! # Stepwise filling
//!
//! [`LcsBuilder`] fills one row per [`LcsBuilder::step`] so a caller can
//! yield between rows on very large inputs. [`LcsMatrix::build`] just runs
//! it to completion.

use crate::line::LineKeys;

// =============================================================================
// LcsMatrix
// =============================================================================

/// Table of LCS lengths between prefixes of two line sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsMatrix {
    cells: Vec<u32>,
    rows: usize,
    cols: usize,
}

impl LcsMatrix {
    /// Build the full table for both sides of `keys`.
    pub fn build(keys: &LineKeys) -> Self {
        let mut builder = LcsBuilder::new(keys);
        while builder.step() {}
        builder.finish()
    }

    /// Number of rows, `len(original) + 1`.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `len(modified) + 1`.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// LCS length of the first `i` original and first `j` modified lines.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.cols + j]
    }

    /// Length of the longest common subsequence of both full sides.
    #[inline]
    pub fn lcs_len(&self) -> u32 {
        self.get(self.rows - 1, self.cols - 1)
    }
}

// =============================================================================
// LcsBuilder
// =============================================================================

/// Row-at-a-time builder for [`LcsMatrix`].
#[derive(Debug)]
pub struct LcsBuilder<'a> {
    keys: &'a LineKeys,
    matrix: LcsMatrix,
    /// Next row to fill (row 0 is the base case)
    next_row: usize,
}

impl<'a> LcsBuilder<'a> {
    /// Allocate a zeroed table for `keys`.
    pub fn new(keys: &'a LineKeys) -> Self {
        let rows = keys.original.len() + 1;
        let cols = keys.modified.len() + 1;
        Self {
            keys,
            matrix: LcsMatrix {
                cells: vec![0; rows * cols],
                rows,
                cols,
            },
            next_row: 1,
        }
    }

    /// Fill the next row. Returns `true` while rows remain.
    pub fn step(&mut self) -> bool {
        let i = self.next_row;
        if i >= self.matrix.rows {
            return false;
        }

        let cols = self.matrix.cols;
        let (prev, cur) = self.matrix.cells[(i - 1) * cols..(i + 1) * cols].split_at_mut(cols);
        let key = self.keys.original[i - 1];

        for j in 1..cols {
            cur[j] = if key == self.keys.modified[j - 1] {
                prev[j - 1] + 1
            } else {
                prev[j].max(cur[j - 1])
            };
        }

        self.next_row += 1;
        self.next_row < self.matrix.rows
    }

    /// Rows filled so far, excluding the base row.
    #[inline]
    pub fn rows_done(&self) -> usize {
        self.next_row - 1
    }

    /// Take the table. Unfilled rows stay zero.
    pub fn finish(self) -> LcsMatrix {
        self.matrix
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::split_lines;
    use crate::options::CompareOptions;

    fn matrix(a: &str, b: &str) -> LcsMatrix {
        let keys = LineKeys::build(&split_lines(a), &split_lines(b), &CompareOptions::EXACT);
        LcsMatrix::build(&keys)
    }

    #[test]
    fn test_dimensions() {
        let m = matrix("a\nb\nc", "a\nc");
        assert_eq!(m.rows(), 4);
        assert_eq!(m.cols(), 3);
    }

    #[test]
    fn test_base_case_is_zero() {
        let m = matrix("a\nb\nc", "a\nb\nc");
        for i in 0..m.rows() {
            assert_eq!(m.get(i, 0), 0);
        }
        for j in 0..m.cols() {
            assert_eq!(m.get(0, j), 0);
        }
    }

    #[test]
    fn test_monotonic() {
        let m = matrix("a\nx\nb\ny\nc", "b\na\nc\nz\nb");
        for i in 1..m.rows() {
            for j in 1..m.cols() {
                assert!(m.get(i, j) >= m.get(i - 1, j));
                assert!(m.get(i, j) >= m.get(i, j - 1));
            }
        }
    }

    #[test]
    fn test_lcs_length() {
        assert_eq!(matrix("a\nb\nc", "a\nb\nc").lcs_len(), 3);
        assert_eq!(matrix("a\nb\nc\nd", "a\nx\nc\ny").lcs_len(), 2);
        assert_eq!(matrix("a\nb", "c\nd").lcs_len(), 0);
    }

    #[test]
    fn test_single_sided_input() {
        // An empty text is one empty line; it never matches "x".
        let m = matrix("", "x\ny");
        assert_eq!(m.rows(), 2);
        assert_eq!(m.lcs_len(), 0);
    }

    #[test]
    fn test_degenerate_empty_sequence() {
        let keys = LineKeys {
            original: vec![],
            modified: vec![0, 1],
        };
        let m = LcsMatrix::build(&keys);
        assert_eq!(m.rows(), 1);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.lcs_len(), 0);
    }

    #[test]
    fn test_stepwise_matches_build() {
        let keys = LineKeys::build(
            &split_lines("a\nb\nc\nd"),
            &split_lines("b\nd\na"),
            &CompareOptions::EXACT,
        );
        let mut builder = LcsBuilder::new(&keys);
        let mut steps = 0;
        while builder.step() {
            steps += 1;
        }
        assert_eq!(steps, 3);
        assert_eq!(builder.rows_done(), 4);
        assert!(!builder.step());
        assert_eq!(builder.finish(), LcsMatrix::build(&keys));
    }
}

//! Diff statistics
//!
//! Counts of each operation kind in an edit script.

use crate::op::DiffOp;

/// Summary counts of an edit script.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct DiffStats {
    /// Sum of the three counts below
    pub total_lines: usize,
    /// Number of `Insert` operations
    pub added_lines: usize,
    /// Number of `Delete` operations
    pub removed_lines: usize,
    /// Number of `Equal` operations
    pub unchanged_lines: usize,
}

impl DiffStats {
    /// Count operations in a single pass.
    pub fn from_ops(ops: &[DiffOp]) -> Self {
        let mut stats = Self::default();
        for op in ops {
            stats.record(op);
        }
        stats
    }

    fn record(&mut self, op: &DiffOp) {
        match op {
            DiffOp::Equal { .. } => self.unchanged_lines += 1,
            DiffOp::Delete { .. } => self.removed_lines += 1,
            DiffOp::Insert { .. } => self.added_lines += 1,
        }
        self.total_lines += 1;
    }

    /// Number of changed lines (added + removed).
    pub fn change_count(&self) -> usize {
        self.added_lines + self.removed_lines
    }

    /// Check if both sides are equal under the comparison options.
    pub fn is_identical(&self) -> bool {
        self.change_count() == 0
    }
}

impl<'a> FromIterator<&'a DiffOp> for DiffStats {
    fn from_iter<I: IntoIterator<Item = &'a DiffOp>>(iter: I) -> Self {
        let mut stats = Self::default();
        for op in iter {
            stats.record(op);
        }
        stats
    }
}

/// Aggregate an edit script into [`DiffStats`].
pub fn compute_stats(ops: &[DiffOp]) -> DiffStats {
    DiffStats::from_ops(ops)
}

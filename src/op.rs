//! Diff operations
//!
//! The edit script produced by the extractor. Original-side entries
//! (`Equal` + `Delete`) replay the original text in order; modified-side
//! entries (`Equal` + `Insert`) replay the modified text.

use crate::line::Line;

/// One step of an edit script.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DiffOp {
    /// Line present on both sides
    Equal { original: Line, modified: Line },
    /// Line only in the original
    Delete { original: Line },
    /// Line only in the modified text
    Insert { modified: Line },
}

/// Discriminant of a [`DiffOp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Equal,
    Delete,
    Insert,
}

impl OpKind {
    /// Style name used by the renderers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::Delete => "removed",
            Self::Insert => "added",
        }
    }

    /// Unified diff sign.
    pub fn sign(&self) -> char {
        match self {
            Self::Equal => ' ',
            Self::Delete => '-',
            Self::Insert => '+',
        }
    }
}

impl DiffOp {
    pub fn kind(&self) -> OpKind {
        match self {
            Self::Equal { .. } => OpKind::Equal,
            Self::Delete { .. } => OpKind::Delete,
            Self::Insert { .. } => OpKind::Insert,
        }
    }

    #[inline]
    pub fn is_equal(&self) -> bool {
        matches!(self, Self::Equal { .. })
    }

    /// True for `Insert` and `Delete`.
    #[inline]
    pub fn is_change(&self) -> bool {
        !self.is_equal()
    }

    /// Original-side line, if any.
    pub fn original(&self) -> Option<&Line> {
        match self {
            Self::Equal { original, .. } | Self::Delete { original } => Some(original),
            Self::Insert { .. } => None,
        }
    }

    /// Modified-side line, if any.
    pub fn modified(&self) -> Option<&Line> {
        match self {
            Self::Equal { modified, .. } | Self::Insert { modified } => Some(modified),
            Self::Delete { .. } => None,
        }
    }

    /// Content shown in single-column views.
    ///
    /// `Equal` rows show the modified side's text.
    pub fn display_line(&self) -> &Line {
        match self {
            Self::Equal { modified, .. } | Self::Insert { modified } => modified,
            Self::Delete { original } => original,
        }
    }
}

/// Original text lines replayed from an edit script.
pub fn original_lines(ops: &[DiffOp]) -> impl Iterator<Item = &Line> {
    ops.iter().filter_map(DiffOp::original)
}

/// Modified text lines replayed from an edit script.
pub fn modified_lines(ops: &[DiffOp]) -> impl Iterator<Item = &Line> {
    ops.iter().filter_map(DiffOp::modified)
}

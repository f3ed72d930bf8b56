//! Diff views.
//!
//! Each view is computed in two steps: a pure row model (`split_rows`,
//! `unified_rows`) and an `Element` tree built from it. Row models are
//! positional: split rows are aligned 1:1 across both panes.
//!
//! - `split`: side-by-side panes
//! - `unified`: one column with context trimming
//! - `summary`: statistics line
//! - `report`: summary plus the view chosen by `DisplayOptions`

mod report;
mod split;
mod summary;
mod unified;

pub use report::render_report;
pub use split::{PaneCell, Side, SplitRow, render_split_pane, render_split_view, split_rows};
pub use summary::{render_summary, summary_text};
pub use unified::{UnifiedRow, render_unified_view, unified_rows};

use crate::node::Element;
use crate::op::{DiffOp, OpKind};

/// CSS class names emitted by the views.
pub mod class {
    pub const ROW: &str = "diff-row";
    pub const EQUAL: &str = "diff-equal";
    pub const REMOVED: &str = "diff-removed";
    pub const ADDED: &str = "diff-added";
    pub const FILLER: &str = "diff-filler";
    pub const ELIDED: &str = "diff-elided";
    pub const LINE_NUMBER: &str = "diff-line-number";
    pub const SIGN: &str = "diff-sign";
    pub const CONTENT: &str = "diff-content";
    pub const PANE: &str = "diff-pane";
    pub const SPLIT: &str = "diff-split";
    pub const UNIFIED: &str = "diff-unified";
    pub const SUMMARY: &str = "diff-summary";
    pub const REPORT: &str = "diff-report";
}

pub(crate) fn kind_class(kind: OpKind) -> &'static str {
    match kind {
        OpKind::Equal => class::EQUAL,
        OpKind::Delete => class::REMOVED,
        OpKind::Insert => class::ADDED,
    }
}

/// Row container `div.diff-row.<modifier>`.
pub(crate) fn row(modifier: &str) -> Element {
    Element::new("div").with_class(format!("{} {}", class::ROW, modifier))
}

/// Right-aligned line number cell; blank when `number` is `None`.
pub(crate) fn gutter(number: Option<usize>, width: usize) -> Element {
    let text = match number {
        Some(n) => format!("{n:>width$} "),
        None => " ".repeat(width + 1),
    };
    Element::new("span").with_class(class::LINE_NUMBER).text(text)
}

pub(crate) fn content(text: &str) -> Element {
    Element::new("span").with_class(class::CONTENT).text(text)
}

/// Digits needed for the largest line number on either side.
pub(crate) fn number_width(ops: &[DiffOp]) -> usize {
    let max = ops
        .iter()
        .flat_map(|op| [op.original(), op.modified()])
        .flatten()
        .map(|line| line.number)
        .max()
        .unwrap_or(0);
    max.max(1).ilog10() as usize + 1
}

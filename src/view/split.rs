//! Split (side-by-side) view
//!
//! Every operation becomes exactly one row in both panes. A side with no
//! line for an operation gets a filler row, so row `k` of the original pane
//! always lines up with row `k` of the modified pane.

use crate::line::Line;
use crate::node::Element;
use crate::op::{DiffOp, OpKind};

use super::{class, content, gutter, kind_class, number_width, row};

/// Which pane to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Original,
    Modified,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::Modified => "modified",
        }
    }
}

/// One cell of a pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneCell<'a> {
    Line { kind: OpKind, line: &'a Line },
    /// Blank row keeping the panes aligned
    Filler,
}

/// Positionally aligned pair of pane cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitRow<'a> {
    pub original: PaneCell<'a>,
    pub modified: PaneCell<'a>,
}

impl<'a> SplitRow<'a> {
    pub fn cell(&self, side: Side) -> PaneCell<'a> {
        match side {
            Side::Original => self.original,
            Side::Modified => self.modified,
        }
    }
}

/// Row model shared by both panes.
pub fn split_rows(ops: &[DiffOp]) -> Vec<SplitRow<'_>> {
    ops.iter()
        .map(|op| SplitRow {
            original: cell(op.kind(), op.original()),
            modified: cell(op.kind(), op.modified()),
        })
        .collect()
}

fn cell(kind: OpKind, line: Option<&Line>) -> PaneCell<'_> {
    match line {
        Some(line) => PaneCell::Line { kind, line },
        None => PaneCell::Filler,
    }
}

/// Render one pane: `div.diff-pane.diff-pane-<side>`.
pub fn render_split_pane(ops: &[DiffOp], side: Side, show_line_numbers: bool) -> Element {
    let width = number_width(ops);
    let mut pane = Element::new("div")
        .with_class(format!("{} {}-{}", class::PANE, class::PANE, side.as_str()))
        .attr("data-side", side.as_str());

    for split in split_rows(ops) {
        let elem = match split.cell(side) {
            PaneCell::Line { kind, line } => {
                let mut elem = row(kind_class(kind));
                if show_line_numbers {
                    elem.push_elem(gutter(Some(line.number), width));
                }
                elem.child(content(line.as_str()))
            }
            PaneCell::Filler => {
                let mut elem = row(class::FILLER);
                if show_line_numbers {
                    elem.push_elem(gutter(None, width));
                }
                elem.child(content(""))
            }
        };
        pane.push_elem(elem);
    }

    pane
}

/// Render both panes inside `div.diff-split`.
pub fn render_split_view(ops: &[DiffOp], show_line_numbers: bool) -> Element {
    Element::new("div")
        .with_class(class::SPLIT)
        .child(render_split_pane(ops, Side::Original, show_line_numbers))
        .child(render_split_pane(ops, Side::Modified, show_line_numbers))
}

//! Unified view with context trimming
//!
//! A maximal run of `Equal` rows collapses only when it is longer than
//! `2 * context`. The collapsed run keeps `context` rows next to each
//! neighbouring change and hides the rest behind one elision marker. Runs
//! at or below the threshold stay whole, so context between nearby changes
//! merges into one block and no row is ever emitted twice.

use crate::node::Element;
use crate::op::{DiffOp, OpKind};
use crate::options::ContextLines;

use super::{class, content, gutter, kind_class, number_width, row};

/// One row of the unified column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnifiedRow<'a> {
    Line(&'a DiffOp),
    /// Stand-in for `count` hidden unchanged lines
    Elided { count: usize },
}

/// Row model for the unified view.
pub fn unified_rows(ops: &[DiffOp], context: ContextLines) -> Vec<UnifiedRow<'_>> {
    let Some(radius) = context.radius() else {
        return ops.iter().map(UnifiedRow::Line).collect();
    };

    let visible = visibility(ops, radius);
    let mut rows = Vec::with_capacity(ops.len());
    let mut hidden = 0;

    for (op, show) in ops.iter().zip(visible) {
        if show {
            if hidden > 0 {
                rows.push(UnifiedRow::Elided { count: hidden });
                hidden = 0;
            }
            rows.push(UnifiedRow::Line(op));
        } else {
            hidden += 1;
        }
    }
    if hidden > 0 {
        rows.push(UnifiedRow::Elided { count: hidden });
    }

    rows
}

/// Per-op visibility, decided run by run over consecutive `Equal` ops.
fn visibility(ops: &[DiffOp], radius: usize) -> Vec<bool> {
    let n = ops.len();
    let mut visible = vec![true; n];
    let mut start = 0;

    while start < n {
        if ops[start].is_change() {
            start += 1;
            continue;
        }
        let end = ops[start..]
            .iter()
            .position(DiffOp::is_change)
            .map_or(n, |offset| start + offset);

        if end - start > radius.saturating_mul(2) {
            // Edge runs only keep context on the side facing a change.
            let keep_head = if start > 0 { radius } else { 0 };
            let keep_tail = if end < n { radius } else { 0 };
            for show in &mut visible[start + keep_head..end - keep_tail] {
                *show = false;
            }
        }
        start = end;
    }

    visible
}

/// Render `div.diff-unified`.
///
/// `Equal` rows carry both line numbers, `Delete` the original one and
/// `Insert` the modified one.
pub fn render_unified_view(
    ops: &[DiffOp],
    show_line_numbers: bool,
    context: ContextLines,
) -> Element {
    let width = number_width(ops);
    let mut view = Element::new("div").with_class(class::UNIFIED);

    for unified in unified_rows(ops, context) {
        let elem = match unified {
            UnifiedRow::Line(op) => {
                let kind = op.kind();
                let mut elem = row(kind_class(kind));
                if show_line_numbers {
                    elem.push_elem(gutter(op.original().map(|l| l.number), width));
                    elem.push_elem(gutter(op.modified().map(|l| l.number), width));
                }
                elem.child(sign(kind))
                    .child(content(op.display_line().as_str()))
            }
            UnifiedRow::Elided { count } => row(class::ELIDED)
                .attr("data-count", count.to_string())
                .text(elision_label(count)),
        };
        view.push_elem(elem);
    }

    view
}

fn sign(kind: OpKind) -> Element {
    Element::new("span")
        .with_class(class::SIGN)
        .text(format!("{} ", kind.sign()))
}

/// Marker text for `count` hidden lines.
pub(crate) fn elision_label(count: usize) -> String {
    let noun = if count == 1 { "line" } else { "lines" };
    format!("⋯ {count} unchanged {noun} ⋯")
}

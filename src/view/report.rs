//! Full diff report handed to export and clipboard collaborators.

use crate::node::Element;
use crate::op::DiffOp;
use crate::options::DisplayOptions;
use crate::stats::DiffStats;

use super::{class, render_split_view, render_summary, render_unified_view};

/// Summary followed by the view selected in `display`.
pub fn render_report(ops: &[DiffOp], display: &DisplayOptions) -> Element {
    let stats = DiffStats::from_ops(ops);
    let view = if display.split_view {
        render_split_view(ops, display.show_line_numbers)
    } else {
        render_unified_view(ops, display.show_line_numbers, display.context)
    };

    Element::new("div")
        .with_class(class::REPORT)
        .child(render_summary(&stats))
        .child(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compute_diff;
    use crate::options::CompareOptions;

    #[test]
    fn test_report_selects_view() {
        let ops = compute_diff("a\nb", "a\nc", &CompareOptions::EXACT);

        let unified = render_report(&ops, &DisplayOptions::default());
        let parts: Vec<_> = unified.children_elements().collect();
        assert_eq!(parts.len(), 2);
        assert!(parts[0].has_class(class::SUMMARY));
        assert!(parts[1].has_class(class::UNIFIED));

        let split = render_report(&ops, &DisplayOptions::split());
        assert!(split.find(|e| e.has_class(class::SPLIT)).is_some());
        assert!(split.find(|e| e.has_class(class::UNIFIED)).is_none());
    }
}

//! Summary line for a diff.

use crate::node::Element;
use crate::stats::DiffStats;

use super::class;

/// Plain summary text, e.g. `+2 added, -1 removed, 7 unchanged`.
pub fn summary_text(stats: &DiffStats) -> String {
    render_summary(stats).text_content()
}

/// Render `div.diff-summary`.
///
/// Counts sit in their own spans so hosts can color them.
pub fn render_summary(stats: &DiffStats) -> Element {
    let summary = Element::new("div").with_class(class::SUMMARY);

    if stats.total_lines == 0 {
        return summary.text("No lines to compare");
    }

    if stats.is_identical() {
        let noun = if stats.unchanged_lines == 1 { "line" } else { "lines" };
        return summary.text(format!(
            "No differences ({} unchanged {noun})",
            stats.unchanged_lines
        ));
    }

    summary
        .child(count_span(class::ADDED, format!("+{} added", stats.added_lines)))
        .text(", ")
        .child(count_span(class::REMOVED, format!("-{} removed", stats.removed_lines)))
        .text(", ")
        .child(count_span(class::EQUAL, format!("{} unchanged", stats.unchanged_lines)))
}

fn count_span(modifier: &str, text: String) -> Element {
    Element::new("span").with_class(modifier).text(text)
}

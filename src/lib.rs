//! tola-linediff - Line-level LCS diff with structured views
//!
//! ## Core Concepts
//!
//! **Edit script**: two texts are split into lines, compared through an LCS
//! table and backtracked into `Equal` / `Delete` / `Insert` operations that
//! replay both inputs exactly.
//!
//! **Structured views**: split, unified and summary views are built as
//! `Element` trees, so the host chooses how to serialize them (HTML, plain
//! text, or its own walker).
//!
//! ## Modules
//! - `options`: comparison and display options
//! - `line`: line splitting, normalization and interning
//! - `algo`: LCS table, operation extraction, stable hashing
//! - `engine`: diff entry points
//! - `view`: split, unified, summary and report views
//! - `render`: HTML and plain-text serialization
//! - `sync`: lockstep scrolling for split panes
//! - `cache`: shared memoizing diff cache
//!
//! ## Usage
//!
//! ```
//! use tola_linediff::prelude::*;
//!
//! let ops = compute_diff("line1\nline2\nline3", "line1\nlineX\nline3", &CompareOptions::EXACT);
//! let stats = compute_stats(&ops);
//! assert_eq!(summary_text(&stats), "+1 added, -1 removed, 2 unchanged");
//!
//! let view = render_unified_view(&ops, false, ContextLines::All);
//! assert_eq!(render_text(&view), "  line1\n- line2\n+ lineX\n  line3\n");
//! ```

// =============================================================================
// Core modules
// =============================================================================

/// Comparison and display options
pub mod options;

/// Lines, normalization, interning
pub mod line;

/// Diff operations
pub mod op;

/// Operation statistics
pub mod stats;

/// Algorithms: LCS table, extraction, hashing
pub mod algo;

/// Diff entry points
pub mod engine;

/// Markup tree: Element, Node, Text
pub mod node;

/// Attribute types
pub mod attr;

/// Diff views
pub mod view;

/// HTML and text rendering
pub mod render;

/// Scroll synchronization for split views
pub mod sync;

/// Shared diff cache
pub mod cache;

/// Error types
pub mod error;

/// Snapshot serialization
#[cfg(feature = "cache")]
pub mod serialize;

/// Prelude for common imports
pub mod prelude;

// =============================================================================
// Re-exports
// =============================================================================

pub use options::{CompareOptions, ContextLines, DisplayOptions};
pub use line::{Line, normalize, split_lines};
pub use op::{DiffOp, OpKind};
pub use stats::{DiffStats, compute_stats};

pub use engine::{compute_diff, compute_diff_batch, diff_lines};

#[cfg(feature = "async")]
pub use engine::compute_diff_cooperative;

pub use node::{Element, Node, Text};

pub use view::{
    Side, render_report, render_split_pane, render_split_view, render_summary,
    render_unified_view, summary_text,
};

pub use render::{RenderConfig, render_html, render_text};

pub use sync::{ScrollObserver, ScrollPane, SplitPanes, link_panes};

pub use cache::{DiffKey, SharedDiffCache};

pub use error::{DiffError, DiffResult};

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;

    assert_impl_all!(DiffOp: Send, Sync);
    assert_impl_all!(SharedDiffCache: Send, Sync, Clone);
    assert_impl_all!(ScrollPane: Send, Sync);
    assert_impl_all!(Element: Send, Sync);

    #[test]
    fn test_end_to_end_html() {
        let ops = compute_diff("a\nb\nc", "a\nB\nc", &CompareOptions::EXACT);
        let report = render_report(&ops, &DisplayOptions::full());
        let html = render_html(&report, &RenderConfig::PROD);

        assert!(html.starts_with("<div class=\"diff-report\">"));
        assert!(html.contains("+1 added</span>, "));
        assert!(html.contains("<div class=\"diff-row diff-removed\">"));
        assert!(html.contains("<div class=\"diff-row diff-added\">"));
    }

    #[test]
    fn test_options_never_change_rendered_content() {
        let ops = compute_diff("Hello World", "hello   world", &CompareOptions::LENIENT);
        let split = render_split_view(&ops, false);
        let text = render_text(&split);
        assert_eq!(text, "Hello World\nhello   world\n");
    }
}

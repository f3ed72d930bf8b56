//! Prelude module for common imports.
//!
//! ```ignore
//! use tola_linediff::prelude::*;
//! ```

// Options
pub use crate::options::{CompareOptions, ContextLines, DisplayOptions};

// Data model
pub use crate::line::{Line, split_lines};
pub use crate::op::{DiffOp, OpKind};
pub use crate::stats::{DiffStats, compute_stats};

// Engine
pub use crate::engine::{compute_diff, compute_diff_batch, diff_lines};

#[cfg(feature = "async")]
pub use crate::engine::compute_diff_cooperative;

// Markup
pub use crate::attr::{Attrs, AttrsExt};
pub use crate::node::{Children, Element, Node, Text};

// Views
pub use crate::view::{
    PaneCell, Side, SplitRow, UnifiedRow, render_report, render_split_pane, render_split_view,
    render_summary, render_unified_view, split_rows, summary_text, unified_rows,
};

// Render
pub use crate::render::{RenderConfig, render_html, render_html_bytes, render_text};

// Scroll sync
pub use crate::sync::{ScrollObserver, ScrollPane, SplitPanes, link_panes};

// Cache
pub use crate::cache::{DiffKey, SharedDiffCache};

// Error
pub use crate::error::{DiffError, DiffResult};

// Serialization
#[cfg(feature = "cache")]
pub use crate::serialize::{SCHEMA_VERSION, from_bytes, to_bytes};

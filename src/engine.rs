//! Diff entry points
//!
//! ```text
//! compute_diff(original, modified, options)
//!     split_lines -> LineKeys::build -> LcsMatrix::build -> extract_ops
//! ```
//!
//! Every call owns its own lines, keys and table; nothing is shared between
//! calls, so any number of diffs may run concurrently.

use crate::algo::{LcsMatrix, extract_ops};
use crate::line::{Line, LineKeys, split_lines};
use crate::op::DiffOp;
use crate::options::CompareOptions;
use crate::stats::DiffStats;

/// Diff two texts line by line.
pub fn compute_diff(original: &str, modified: &str, options: &CompareOptions) -> Vec<DiffOp> {
    diff_lines(&split_lines(original), &split_lines(modified), options)
}

/// Diff two already-split line sequences.
pub fn diff_lines(original: &[Line], modified: &[Line], options: &CompareOptions) -> Vec<DiffOp> {
    let keys = LineKeys::build(original, modified, options);
    let matrix = LcsMatrix::build(&keys);
    let ops = extract_ops(&matrix, &keys, original, modified);
    log_run(original.len(), modified.len(), &ops);
    ops
}

fn log_run(original: usize, modified: usize, ops: &[DiffOp]) {
    if log::log_enabled!(log::Level::Debug) {
        let stats = DiffStats::from_ops(ops);
        log::debug!(
            "diffed {} x {} lines: +{} -{} ={}",
            original,
            modified,
            stats.added_lines,
            stats.removed_lines,
            stats.unchanged_lines
        );
    }
}

// =============================================================================
// Batch
// =============================================================================

/// Diff many independent pairs. Output order matches input order.
#[cfg(feature = "parallel")]
pub fn compute_diff_batch(pairs: &[(&str, &str)], options: &CompareOptions) -> Vec<Vec<DiffOp>> {
    use rayon::prelude::*;

    pairs
        .par_iter()
        .map(|(original, modified)| compute_diff(original, modified, options))
        .collect()
}

/// Diff many independent pairs. Output order matches input order.
#[cfg(not(feature = "parallel"))]
pub fn compute_diff_batch(pairs: &[(&str, &str)], options: &CompareOptions) -> Vec<Vec<DiffOp>> {
    pairs
        .iter()
        .map(|(original, modified)| compute_diff(original, modified, options))
        .collect()
}

// =============================================================================
// Cooperative
// =============================================================================

#[cfg(feature = "async")]
mod cooperative {
    use std::task::Poll;

    use futures_util::future::poll_fn;

    use super::*;
    use crate::algo::LcsBuilder;

    /// Diff two texts, yielding to the executor every `rows_per_yield`
    /// table rows. Produces the same operations as [`compute_diff`].
    pub async fn compute_diff_cooperative(
        original: &str,
        modified: &str,
        options: &CompareOptions,
        rows_per_yield: usize,
    ) -> Vec<DiffOp> {
        let original = split_lines(original);
        let modified = split_lines(modified);
        let keys = LineKeys::build(&original, &modified, options);
        let rows_per_yield = rows_per_yield.max(1);

        let mut builder = LcsBuilder::new(&keys);
        while builder.step() {
            if builder.rows_done() % rows_per_yield == 0 {
                log::trace!("yielding after {} rows", builder.rows_done());
                yield_now().await;
            }
        }
        let matrix = builder.finish();

        let ops = extract_ops(&matrix, &keys, &original, &modified);
        log_run(original.len(), modified.len(), &ops);
        ops
    }

    /// Return `Pending` once after waking ourselves.
    async fn yield_now() {
        let mut yielded = false;
        poll_fn(|cx| {
            if yielded {
                Poll::Ready(())
            } else {
                yielded = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        })
        .await
    }
}

#[cfg(feature = "async")]
pub use cooperative::compute_diff_cooperative;

// =============================================================================
// Tests
// =============================================================================

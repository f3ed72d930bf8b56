//! Scroll synchronization for split views
//!
//! The two panes of a split view have the same number of positionally
//! aligned rows, so keeping them in lockstep means copying a row offset from
//! one pane to the other. Panes are independently owned and only know each
//! other through [`ScrollObserver`] subscriptions held as weak references.
//!
//! ```ignore
//! let panes = SplitPanes::for_ops(&ops);
//! panes.original.scroll_to(12);
//! assert_eq!(panes.modified.offset(), 12);
//! ```

use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::op::DiffOp;
use crate::view::Side;

/// Receives scroll notifications from a pane it is subscribed to.
pub trait ScrollObserver: Send + Sync {
    /// `source` moved to row `offset`.
    fn scrolled(&self, source: Side, offset: usize);
}

/// Scroll state of one pane.
pub struct ScrollPane {
    side: Side,
    rows: usize,
    offset: Mutex<usize>,
    observers: Mutex<Vec<Weak<dyn ScrollObserver>>>,
}

impl std::fmt::Debug for ScrollPane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollPane")
            .field("side", &self.side)
            .field("rows", &self.rows)
            .field("offset", &*self.offset.lock())
            .finish()
    }
}

impl ScrollPane {
    /// Create a pane with `rows` rows, scrolled to the top.
    pub fn new(side: Side, rows: usize) -> Arc<Self> {
        Arc::new(Self {
            side,
            rows,
            offset: Mutex::new(0),
            observers: Mutex::new(Vec::new()),
        })
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Current top row.
    pub fn offset(&self) -> usize {
        *self.offset.lock()
    }

    /// Register an observer. Dropped observers are pruned on the next scroll.
    pub fn subscribe(&self, observer: Weak<dyn ScrollObserver>) {
        self.observers.lock().push(observer);
    }

    /// Scroll to `offset` (clamped to the last row) and notify observers.
    pub fn scroll_to(&self, offset: usize) {
        let offset = self.set_offset(offset);

        // Collect first so observers run without our lock held.
        let live: Vec<Arc<dyn ScrollObserver>> = {
            let mut observers = self.observers.lock();
            observers.retain(|o| o.strong_count() > 0);
            observers.iter().filter_map(Weak::upgrade).collect()
        };

        for observer in live {
            observer.scrolled(self.side, offset);
        }
    }

    /// Scroll by a signed row delta.
    pub fn scroll_by(&self, delta: isize) {
        let target = self.offset().saturating_add_signed(delta);
        self.scroll_to(target);
    }

    fn set_offset(&self, offset: usize) -> usize {
        let clamped = offset.min(self.rows.saturating_sub(1));
        *self.offset.lock() = clamped;
        clamped
    }
}

impl ScrollObserver for ScrollPane {
    /// Follow without re-broadcasting, so linked panes never loop.
    fn scrolled(&self, source: Side, offset: usize) {
        if source != self.side {
            self.set_offset(offset);
        }
    }
}

/// Subscribe two panes to each other.
pub fn link_panes(a: &Arc<ScrollPane>, b: &Arc<ScrollPane>) {
    let a_weak: Weak<dyn ScrollObserver> = Arc::downgrade(a) as Weak<dyn ScrollObserver>;
    let b_weak: Weak<dyn ScrollObserver> = Arc::downgrade(b) as Weak<dyn ScrollObserver>;
    a.subscribe(b_weak);
    b.subscribe(a_weak);
    log::trace!("linked {:?} and {:?} panes", a.side(), b.side());
}

/// Linked original/modified panes for one split view.
#[derive(Debug, Clone)]
pub struct SplitPanes {
    pub original: Arc<ScrollPane>,
    pub modified: Arc<ScrollPane>,
}

impl SplitPanes {
    /// Create linked panes sized for `rows` aligned rows.
    pub fn new(rows: usize) -> Self {
        let original = ScrollPane::new(Side::Original, rows);
        let modified = ScrollPane::new(Side::Modified, rows);
        link_panes(&original, &modified);
        Self { original, modified }
    }

    /// Create linked panes for the split view of `ops` (one row per op).
    pub fn for_ops(ops: &[DiffOp]) -> Self {
        Self::new(ops.len())
    }

    pub fn pane(&self, side: Side) -> &Arc<ScrollPane> {
        match side {
            Side::Original => &self.original,
            Side::Modified => &self.modified,
        }
    }
}

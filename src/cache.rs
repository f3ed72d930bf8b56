//! Shared diff cache.
//!
//! Memoizes edit scripts by a stable fingerprint of their inputs, so a host
//! can re-render (switch views, change context) without re-diffing. The
//! engine itself stays stateless; this is an opt-in wrapper around it.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::algo::fingerprint;
use crate::engine::compute_diff;
use crate::op::DiffOp;
use crate::options::CompareOptions;

/// Default number of cached edit scripts.
pub const DEFAULT_CAPACITY: usize = 64;

// =============================================================================
// Cache Key
// =============================================================================

/// Full blake3 digest of `(original, modified, options)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiffKey([u8; 32]);

impl DiffKey {
    /// Key for one diff invocation's inputs.
    pub fn new(original: &str, modified: &str, options: &CompareOptions) -> Self {
        Self(fingerprint(original, modified, options))
    }
}

impl std::fmt::Display for DiffKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

// =============================================================================
// Shared Cache
// =============================================================================

#[derive(Debug, Default)]
struct CacheInner {
    entries: FxHashMap<DiffKey, Arc<[DiffOp]>>,
    /// Insertion order, oldest first
    order: VecDeque<DiffKey>,
}

/// Thread-safe shared diff cache.
///
/// Uses `parking_lot::RwLock` for better performance under contention.
/// Evicts the oldest entry once `capacity` is reached.
#[derive(Debug, Clone)]
pub struct SharedDiffCache {
    inner: Arc<RwLock<CacheInner>>,
    capacity: usize,
    hits: Arc<AtomicU64>,
    misses: Arc<AtomicU64>,
}

impl Default for SharedDiffCache {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedDiffCache {
    /// Create a cache holding up to [`DEFAULT_CAPACITY`] entries.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a cache holding up to `capacity` entries (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(CacheInner::default())),
            capacity: capacity.max(1),
            hits: Arc::new(AtomicU64::new(0)),
            misses: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Cached edit script for these inputs, computing it on a miss.
    pub fn get_or_compute(
        &self,
        original: &str,
        modified: &str,
        options: &CompareOptions,
    ) -> Arc<[DiffOp]> {
        let key = DiffKey::new(original, modified, options);

        if let Some(ops) = self.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            log::trace!("diff cache hit {key}");
            return ops;
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        log::trace!("diff cache miss {key}");

        // Computed outside the lock; a concurrent miss on the same key just
        // overwrites with an identical result.
        let ops: Arc<[DiffOp]> = compute_diff(original, modified, options).into();
        self.insert(key, Arc::clone(&ops));
        ops
    }

    /// Get a cached entry.
    pub fn get(&self, key: &DiffKey) -> Option<Arc<[DiffOp]>> {
        self.inner.read().entries.get(key).cloned()
    }

    /// Insert or replace an entry, evicting the oldest when full.
    pub fn insert(&self, key: DiffKey, ops: Arc<[DiffOp]>) {
        let mut inner = self.inner.write();
        if inner.entries.insert(key, ops).is_some() {
            return;
        }
        inner.order.push_back(key);

        while inner.entries.len() > self.capacity {
            let Some(oldest) = inner.order.pop_front() else {
                break;
            };
            inner.entries.remove(&oldest);
            log::trace!("diff cache evicted {oldest}");
        }
    }

    /// Remove an entry from the cache.
    pub fn remove(&self, key: &DiffKey) -> Option<Arc<[DiffOp]>> {
        let mut inner = self.inner.write();
        let removed = inner.entries.remove(key);
        if removed.is_some() {
            inner.order.retain(|k| k != key);
        }
        removed
    }

    /// Check if the cache contains a key.
    pub fn contains(&self, key: &DiffKey) -> bool {
        self.inner.read().entries.contains_key(key)
    }

    /// Get the number of entries in the cache.
    pub fn len(&self) -> usize {
        self.inner.read().entries.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// `(hits, misses)` since creation.
    pub fn hit_stats(&self) -> (u64, u64) {
        (
            self.hits.load(Ordering::Relaxed),
            self.misses.load(Ordering::Relaxed),
        )
    }

    /// Clear all entries from the cache.
    pub fn clear(&self) {
        let mut inner = self.inner.write();
        inner.entries.clear();
        inner.order.clear();
    }
}

// =============================================================================
// Tests
// =============================================================================

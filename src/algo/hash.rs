//! Deterministic hashing for diff inputs
//!
//! Provides cross-process deterministic fingerprints using blake3, so a
//! cached or persisted diff can be matched to its inputs after a restart.

use crate::options::CompareOptions;

// =============================================================================
// StableHasher - Builder Pattern
// =============================================================================

/// A deterministic hasher using blake3
///
/// Unlike `std::hash::Hasher`, this produces the same output across
/// process restarts for the same input.
pub struct StableHasher {
    inner: blake3::Hasher,
}

impl StableHasher {
    /// Create an empty hasher.
    #[inline]
    pub fn new() -> Self {
        Self {
            inner: blake3::Hasher::new(),
        }
    }

    #[inline]
    pub fn update(mut self, data: &[u8]) -> Self {
        self.inner.update(data);
        self
    }

    /// Update with a length-prefixed string, so `("ab", "c")` and
    /// `("a", "bc")` hash differently.
    #[inline]
    pub fn update_str(self, s: &str) -> Self {
        self.update_u64(s.len() as u64).update(s.as_bytes())
    }

    /// Update with a u64 value (little-endian)
    #[inline]
    pub fn update_u64(self, v: u64) -> Self {
        self.update(&v.to_le_bytes())
    }

    #[inline]
    pub fn update_bool(self, v: bool) -> Self {
        self.update(&[v as u8])
    }

    /// Finish and return the full 32-byte blake3 digest.
    #[inline]
    pub fn finish(self) -> [u8; 32] {
        *self.inner.finalize().as_bytes()
    }
}

impl Default for StableHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Fingerprint of one diff invocation's inputs.
pub fn fingerprint(original: &str, modified: &str, options: &CompareOptions) -> [u8; 32] {
    StableHasher::new()
        .update_str("__linediff__")
        .update_bool(options.ignore_whitespace)
        .update_bool(options.ignore_case)
        .update_str(original)
        .update_str(modified)
        .finish()
}

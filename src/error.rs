//! Error types for tola-linediff.
//!
//! Diffing and rendering never fail; only snapshot decoding does.

use thiserror::Error;

/// Errors that can occur when decoding persisted diff snapshots.
#[derive(Debug, Error)]
pub enum DiffError {
    /// Snapshot was written with an incompatible schema version
    #[error("snapshot version mismatch: expected v{expected}, found v{found}")]
    VersionMismatch {
        /// Expected schema version
        expected: u32,
        /// Found schema version
        found: u32,
    },

    /// Snapshot data is corrupted or inconsistent
    #[error("snapshot corrupted: {0}")]
    Corrupted(String),

    /// Serialization/deserialization failed
    #[error("serialization error: {0}")]
    Serialize(String),

    /// Magic bytes validation failed
    #[error("invalid snapshot format: expected magic bytes {expected:?}, found {found:?}")]
    InvalidMagic {
        /// Expected magic bytes
        expected: [u8; 4],
        /// Found magic bytes
        found: [u8; 4],
    },
}

/// Result type alias for fallible snapshot operations.
pub type DiffResult<T> = Result<T, DiffError>;

impl DiffError {
    /// Create a corruption error with a message.
    pub fn corrupted(msg: impl Into<String>) -> Self {
        Self::Corrupted(msg.into())
    }
}

#[cfg(feature = "cache")]
impl From<rkyv::rancor::Error> for DiffError {
    fn from(err: rkyv::rancor::Error) -> Self {
        Self::Serialize(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DiffError::VersionMismatch { expected: 2, found: 1 };
        assert_eq!(err.to_string(), "snapshot version mismatch: expected v2, found v1");

        let err = DiffError::corrupted("bad data");
        assert_eq!(err.to_string(), "snapshot corrupted: bad data");
    }

    #[test]
    fn test_error_is_send_sync() {
        static_assertions::assert_impl_all!(DiffError: Send, Sync);
    }
}

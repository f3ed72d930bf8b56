//! Algorithm implementations for line diffing.
//!
//! - `lcs`: LCS table construction (full or row by row)
//! - `extract`: backtracking the table into an edit script
//! - `hash`: stable fingerprints of diff inputs

mod extract;
mod hash;
mod lcs;

pub use extract::extract_ops;
pub use hash::{StableHasher, fingerprint};
pub use lcs::{LcsBuilder, LcsMatrix};

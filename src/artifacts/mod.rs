//! Core data structures and algorithms
//!
//! - `branch`: branch names and the HEAD pointer
//! - `checkout`: working tree reconciliation
//! - `diff`: line diffing and snapshot sources
//! - `log`: commit history traversal
//! - `objects`: fingerprints, blobs and commits
//! - `status`: working tree classification

pub mod branch;
pub mod checkout;
pub mod diff;
pub mod log;
pub mod objects;
pub mod status;

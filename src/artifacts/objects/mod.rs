//! Object types
//!
//! The two content-addressed object kinds and the fingerprint that
//! identifies them:
//!
//! - `fingerprint`: the deterministic textual hash used as identity
//! - `blob`: raw file content
//! - `commit`: a message, a timestamp, parents and a full file snapshot

pub mod blob;
pub mod commit;
pub mod fingerprint;

//! Command implementations
//!
//! User-facing commands for the version control workflow (init, add,
//! commit, status, branch, checkout, log, diff), each implemented as an
//! `impl Repository` block in its own module.

pub mod porcelain;

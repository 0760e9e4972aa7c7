//! Error taxonomy
//!
//! Typed errors for the conditions callers branch on or report verbatim.
//! Individual file read/write failures during scans are warnings, not
//! errors: the file is skipped and the operation continues where that
//! cannot corrupt references.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("not a minigit repository (missing .minigit); run 'minigit init' first")]
    NotARepository,
    #[error("no such file: {0}")]
    NoSuchFile(String),
    #[error("not a regular file: {0}")]
    NotRegularFile(String),
    #[error("unknown or ambiguous target: {0}")]
    AmbiguousOrUnknownTarget(String),
    #[error("corrupt or missing commit {0}")]
    CorruptReference(String),
    #[error("your working directory has uncommitted changes; commit or discard them first")]
    DirtyWorkingTree,
    #[error("branch '{0}' already exists")]
    DuplicateBranch(String),
    #[error("no commits yet")]
    EmptyHistory,
}

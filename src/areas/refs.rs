//! References (branches and HEAD)
//!
//! References are human-readable names pointing to commits:
//! - Branches: `refs/heads/<name>`, one fingerprint per file (possibly
//!   empty for a branch with no commit yet)
//! - HEAD: either `ref: refs/heads/<name>` (attached) or a bare
//!   fingerprint (detached)
//!
//! Any change to (branch tip, HEAD) goes through `save_head_and_branch` so
//! the two files never disagree on disk.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::head::Head;
use crate::artifacts::objects::fingerprint::Fingerprint;
use crate::error::RepoError;
use anyhow::Context;
use derive_new::new;
use file_guard::Lock;
use std::collections::HashMap;
use std::io::Write;
use std::ops::DerefMut;
use std::path::Path;
use walkdir::WalkDir;

/// Reference manager rooted at the repository metadata directory
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the metadata directory (typically `.minigit`)
    path: Box<Path>,
}

impl Refs {
    /// Read the HEAD pointer
    ///
    /// A missing HEAD file means a freshly created layout: attached to the
    /// default branch.
    pub fn read_head(&self) -> anyhow::Result<Head> {
        let head_path = self.head_path();

        if !head_path.exists() {
            return Ok(Head::Attached(BranchName::default_branch()));
        }

        let content = std::fs::read_to_string(&head_path)
            .with_context(|| format!("failed to read HEAD file at {:?}", head_path))?;

        Head::try_parse(&content)
    }

    /// Resolve HEAD to the commit it ultimately points to, if any
    pub fn read_head_fingerprint(&self) -> anyhow::Result<Option<Fingerprint>> {
        match self.read_head()? {
            Head::Attached(branch) => self.read_branch(&branch),
            Head::Detached(fingerprint) => Ok(Some(fingerprint)),
        }
    }

    /// Persist a new HEAD position and, when attached, the branch tip
    ///
    /// The branch file is written first, HEAD second; after any public
    /// change the two agree on disk.
    pub fn save_head_and_branch(
        &self,
        head: &Head,
        tip: Option<&Fingerprint>,
    ) -> anyhow::Result<()> {
        if let Head::Attached(branch) = head {
            if let Some(tip) = tip {
                self.write_branch(branch, Some(tip))?;
            }
        }

        self.update_ref_file(&self.head_path(), head.serialize())
    }

    /// Read a branch tip
    ///
    /// # Returns
    ///
    /// `None` when the branch file is missing or empty (a branch may point
    /// to no commit right after repository creation).
    pub fn read_branch(&self, branch: &BranchName) -> anyhow::Result<Option<Fingerprint>> {
        let branch_path = self.heads_path().join(branch.as_ref());

        if !branch_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&branch_path)
            .with_context(|| format!("failed to read ref file at {:?}", branch_path))?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        Ok(Some(Fingerprint::try_parse(content.to_string())?))
    }

    /// Check whether a branch exists, even with an empty tip
    pub fn branch_exists(&self, branch: &BranchName) -> bool {
        self.heads_path().join(branch.as_ref()).exists()
    }

    /// Write a branch tip; `None` leaves the branch pointing at no commit
    pub fn write_branch(
        &self,
        branch: &BranchName,
        tip: Option<&Fingerprint>,
    ) -> anyhow::Result<()> {
        let branch_path = self.heads_path().join(branch.as_ref());
        let raw_ref = match tip {
            Some(tip) => format!("{}\n", tip),
            None => String::new(),
        };

        self.update_ref_file(branch_path.as_path(), raw_ref)
    }

    /// Create a branch pointing at the given commit
    pub fn create_branch(&self, branch: &BranchName, tip: &Fingerprint) -> anyhow::Result<()> {
        if self.branch_exists(branch) {
            return Err(RepoError::DuplicateBranch(branch.to_string()).into());
        }

        self.write_branch(branch, Some(tip))
    }

    /// List every branch name under `refs/heads`
    pub fn list_branches(&self) -> anyhow::Result<Vec<BranchName>> {
        let heads_path = self.heads_path();

        Ok(WalkDir::new(&heads_path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| {
                let name = entry.path().strip_prefix(&heads_path).ok()?;
                BranchName::try_parse(name.to_string_lossy().to_string()).ok()
            })
            .collect::<Vec<_>>())
    }

    /// Reverse index: commit fingerprint -> branches pointing at it
    ///
    /// Used by `log` to decorate commits with the branch names at their tip.
    pub fn reverse_refs(&self) -> anyhow::Result<HashMap<Fingerprint, Vec<BranchName>>> {
        Ok(self
            .list_branches()?
            .into_iter()
            .fold(HashMap::new(), |mut acc, branch| {
                if let Ok(Some(tip)) = self.read_branch(&branch) {
                    acc.entry(tip).or_insert_with(Vec::new).push(branch);
                }
                acc
            }))
    }

    fn update_ref_file(&self, path: &Path, raw_ref: String) -> anyhow::Result<()> {
        std::fs::create_dir_all(path.parent().with_context(|| {
            format!("failed to resolve parent directory for ref file at {:?}", path)
        })?)?;

        let mut ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .with_context(|| format!("failed to open ref file at {:?}", path))?;
        let mut lock = file_guard::lock(&mut ref_file, Lock::Exclusive, 0, 1)?;
        lock.deref_mut().write_all(raw_ref.as_bytes())?;

        Ok(())
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join("HEAD").into_boxed_path()
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }
}

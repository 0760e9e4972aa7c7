//! Commit record store
//!
//! Persists commit records as line-oriented text under
//! `.minigit/commits/<fingerprint>` and retrieves them through a lazy
//! in-memory cache. Commits are immutable, so a cached record never goes
//! stale for the lifetime of the process.

use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::fingerprint::Fingerprint;
use crate::error::RepoError;
use anyhow::Context;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

/// Store of commit records keyed by fingerprint
#[derive(Debug)]
pub struct CommitStore {
    /// Path to the commits directory (typically `.minigit/commits`)
    path: Box<Path>,
    /// Records loaded so far; load on first access, retain for the process
    cache: RefCell<HashMap<Fingerprint, Commit>>,
}

impl CommitStore {
    pub fn new(path: Box<Path>) -> Self {
        CommitStore {
            path,
            cache: RefCell::new(HashMap::new()),
        }
    }

    pub fn commits_path(&self) -> &Path {
        &self.path
    }

    /// Persist a commit record under its fingerprint
    pub fn store(&self, commit: &Commit) -> anyhow::Result<Fingerprint> {
        let fingerprint = commit.fingerprint();
        let commit_path = self.path.join(fingerprint.as_ref());

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&commit_path)
            .context(format!(
                "Unable to open commit file {}",
                commit_path.display()
            ))?;
        file.write_all(commit.serialize().as_bytes()).context(format!(
            "Unable to write commit file {}",
            commit_path.display()
        ))?;

        self.cache
            .borrow_mut()
            .insert(fingerprint.clone(), commit.clone());

        Ok(fingerprint)
    }

    /// Load a commit by fingerprint
    ///
    /// A missing or unparsable record is a corrupt reference: traversals
    /// stop at the point of discovery.
    pub fn load(&self, fingerprint: &Fingerprint) -> anyhow::Result<Commit> {
        if let Some(commit) = self.cache.borrow().get(fingerprint) {
            return Ok(commit.clone());
        }

        let commit_path = self.path.join(fingerprint.as_ref());
        let content = std::fs::read_to_string(&commit_path)
            .map_err(|_| RepoError::CorruptReference(fingerprint.to_short()))?;
        let commit = Commit::deserialize(&content)
            .map_err(|_| RepoError::CorruptReference(fingerprint.to_short()))?;

        self.cache
            .borrow_mut()
            .insert(fingerprint.clone(), commit.clone());

        Ok(commit)
    }

    /// Check whether a commit record exists without parsing it
    pub fn contains(&self, fingerprint: &Fingerprint) -> bool {
        if self.cache.borrow().contains_key(fingerprint) {
            return true;
        }
        self.path.join(fingerprint.as_ref()).exists()
    }

    /// Find every stored fingerprint that extends the given prefix
    ///
    /// Used to resolve abbreviated targets; returning all matches lets the
    /// caller reject ambiguous prefixes.
    pub fn find_by_prefix(&self, prefix: &str) -> anyhow::Result<Vec<Fingerprint>> {
        let mut matches = Vec::new();

        if !self.path.exists() {
            return Ok(matches);
        }

        for entry in std::fs::read_dir(&self.path)? {
            let entry = entry?;
            let file_name = entry.file_name();
            let file_name = file_name.to_string_lossy();

            if file_name.starts_with(prefix) {
                if let Ok(fingerprint) = Fingerprint::try_parse(file_name.to_string()) {
                    matches.push(fingerprint);
                }
            }
        }

        Ok(matches)
    }
}

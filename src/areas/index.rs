//! Staging index
//!
//! The index accumulates the filename -> blob fingerprint entries that will
//! form the next commit. It is rehydrated from `.minigit/index` when a
//! repository is loaded and written back after any mutation, which is what
//! lets `add` and `commit` cooperate across separate invocations.
//!
//! ## File format
//!
//! One `<filename>:<fingerprint>` entry per line.

use crate::artifacts::objects::fingerprint::Fingerprint;
use anyhow::Context;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

/// Staging index: filename -> blob fingerprint
#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.minigit/index`)
    path: Box<Path>,
    /// Staged entries in deterministic name order
    entries: BTreeMap<String, Fingerprint>,
    /// Set when the in-memory entries differ from the file
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: BTreeMap::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record a staged entry
    ///
    /// # Returns
    ///
    /// `false` when the entry is already present with the same fingerprint;
    /// the caller reports the no-op to the user.
    pub fn stage(&mut self, name: String, fingerprint: Fingerprint) -> bool {
        if self.entries.get(&name) == Some(&fingerprint) {
            return false;
        }

        self.entries.insert(name, fingerprint);
        self.changed = true;
        true
    }

    pub fn get(&self, name: &str) -> Option<&Fingerprint> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &Fingerprint)> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every staged entry
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            self.entries.clear();
            self.changed = true;
        }
    }

    /// Load the index from disk, replacing the in-memory entries
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.entries.clear();
        self.changed = false;

        if !self.path.exists() {
            return Ok(());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read index file at {:?}", self.path))?;

        for line in content.lines() {
            if line.is_empty() {
                continue;
            }
            let (name, fingerprint) = line
                .split_once(':')
                .context("Invalid index file: malformed entry")?;
            self.entries.insert(
                name.to_string(),
                Fingerprint::try_parse(fingerprint.to_string())?,
            );
        }

        Ok(())
    }

    /// Write the index back to disk if it changed
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        if !self.changed {
            return Ok(());
        }

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .with_context(|| format!("failed to open index file at {:?}", self.path))?;

        for (name, fingerprint) in &self.entries {
            writeln!(file, "{}:{}", name, fingerprint)?;
        }

        self.changed = false;
        Ok(())
    }
}

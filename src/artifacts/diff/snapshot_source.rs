//! Snapshot sources for the diff engine
//!
//! Every diff mode compares two read-only mappings from filename to content
//! bytes; the three places such a mapping can come from are the working
//! tree, the staged snapshot and a commit. Modeling the capability as one
//! sum type reduces the four diff modes to choosing two values.
//!
//! The staged side is the effective next snapshot (the HEAD file map
//! overlaid with the index), so a committed-but-unstaged file still has a
//! staged version to compare the working tree against.

use crate::areas::database::Database;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::{Commit, FileMap};
use std::collections::BTreeSet;

/// A read-only filename -> content view over one side of a diff
pub enum SnapshotSource<'r> {
    /// Regular non-dotfiles in the repository root
    Working(&'r Workspace),
    /// The staged snapshot, content resolved through the object store
    Staged(&'r FileMap, &'r Database),
    /// A commit's file map, content resolved through the object store
    Commit(&'r Commit, &'r Database),
}

impl<'r> SnapshotSource<'r> {
    /// The filenames present on this side
    pub fn file_names(&self) -> anyhow::Result<BTreeSet<String>> {
        match self {
            SnapshotSource::Working(workspace) => {
                Ok(workspace.list_files()?.into_iter().collect())
            }
            SnapshotSource::Staged(files, _) => Ok(files.keys().cloned().collect()),
            SnapshotSource::Commit(commit, _) => Ok(commit.files().keys().cloned().collect()),
        }
    }

    /// Read one file's content; `None` when absent on this side
    pub fn read(&self, name: &str) -> anyhow::Result<Option<Blob>> {
        match self {
            SnapshotSource::Working(workspace) => {
                if !workspace.is_regular_file(name) {
                    return Ok(None);
                }
                Ok(Some(workspace.read_file(name)?))
            }
            SnapshotSource::Staged(files, database) => match files.get(name) {
                Some(fingerprint) => database.load_blob(fingerprint),
                None => Ok(None),
            },
            SnapshotSource::Commit(commit, database) => match commit.files().get(name) {
                Some(fingerprint) => database.load_blob(fingerprint),
                None => Ok(None),
            },
        }
    }
}

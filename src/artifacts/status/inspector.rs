//! Working tree inspection
//!
//! Classifies every candidate file against the staging index and the HEAD
//! snapshot, producing the changesets that `status` prints, `commit` uses
//! to decide what goes into the next snapshot, and `checkout` uses as its
//! dirty-tree guard.

use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::FileMap;
use crate::artifacts::status::file_change::{IndexChangeType, WorkspaceChangeType};
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};

/// Classification of the whole working tree at one point in time
#[derive(Debug, Clone, Default)]
pub struct StatusInfo {
    /// Staged changes: index versus HEAD snapshot
    pub index_changeset: BTreeMap<String, IndexChangeType>,
    /// Unstaged changes: working tree versus index/HEAD
    pub workspace_changeset: BTreeMap<String, WorkspaceChangeType>,
    /// Files present only in the working tree
    pub untracked_files: BTreeSet<String>,
}

impl StatusInfo {
    /// True when nothing is staged, nothing is modified and nothing is
    /// untracked; checkout requires this
    pub fn is_clean(&self) -> bool {
        self.index_changeset.is_empty()
            && self.workspace_changeset.is_empty()
            && self.untracked_files.is_empty()
    }

    pub fn has_staged_changes(&self) -> bool {
        !self.index_changeset.is_empty()
    }

    /// Names staged as deleted, removed from the next commit's snapshot
    pub fn staged_deletions(&self) -> impl Iterator<Item = &String> {
        self.index_changeset
            .iter()
            .filter(|(_, change)| **change == IndexChangeType::Deleted)
            .map(|(name, _)| name)
    }
}

/// Scans the working tree and classifies candidates
#[derive(new)]
pub struct Inspector<'r> {
    repository: &'r Repository,
}

impl<'r> Inspector<'r> {
    /// Classify the working tree against the index and the HEAD snapshot
    pub fn status(&self, index: &Index) -> anyhow::Result<StatusInfo> {
        let head_files = match self.repository.head_commit()? {
            Some(commit) => commit.files().clone(),
            None => FileMap::new(),
        };

        let mut info = StatusInfo::default();

        self.classify_staged(index, &head_files, &mut info);
        self.classify_unstaged(index, &head_files, &mut info)?;

        Ok(info)
    }

    /// Index versus HEAD snapshot: added, modified, deleted
    fn classify_staged(&self, index: &Index, head_files: &FileMap, info: &mut StatusInfo) {
        for (name, staged) in index.entries() {
            match head_files.get(name) {
                None => {
                    info.index_changeset
                        .insert(name.clone(), IndexChangeType::Added);
                }
                Some(committed) if committed != staged => {
                    info.index_changeset
                        .insert(name.clone(), IndexChangeType::Modified);
                }
                Some(_) => {}
            }
        }

        // a deletion is staged implicitly: the file left both the index and
        // the working tree while HEAD still tracks it
        for name in head_files.keys() {
            if !index.contains(name) && !self.repository.workspace().is_regular_file(name) {
                info.index_changeset
                    .insert(name.clone(), IndexChangeType::Deleted);
            }
        }
    }

    /// Working tree versus index/HEAD: modified, deleted, untracked
    fn classify_unstaged(
        &self,
        index: &Index,
        head_files: &FileMap,
        info: &mut StatusInfo,
    ) -> anyhow::Result<()> {
        let workspace = self.repository.workspace();
        let mut seen = BTreeSet::new();

        for name in workspace.list_files()? {
            seen.insert(name.clone());

            let working = match workspace.read_file(&name) {
                Ok(blob) => blob.fingerprint(),
                Err(error) => {
                    eprintln!("Warning: could not read {}: {}", name, error);
                    continue;
                }
            };

            if let Some(staged) = index.get(&name) {
                if *staged != working {
                    info.workspace_changeset
                        .insert(name, WorkspaceChangeType::Modified);
                }
            } else if let Some(committed) = head_files.get(&name) {
                if *committed != working {
                    info.workspace_changeset
                        .insert(name, WorkspaceChangeType::Modified);
                }
            } else {
                info.untracked_files.insert(name);
            }
        }

        for name in head_files.keys() {
            if !seen.contains(name) && !index.contains(name) {
                info.workspace_changeset
                    .insert(name.clone(), WorkspaceChangeType::Deleted);
            }
        }

        Ok(())
    }
}

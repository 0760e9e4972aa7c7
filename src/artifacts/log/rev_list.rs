//! History traversal
//!
//! Walks the commit graph from a starting fingerprint following the first
//! parent. A visited set guarantees termination on any graph, including a
//! forged cycle; a corrupt reference ends the walk with the error so the
//! caller can report where history stopped being readable.

use crate::areas::commit_store::CommitStore;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::fingerprint::Fingerprint;
use std::collections::HashSet;

/// First-parent commit iterator
pub struct RevList<'r> {
    commits: &'r CommitStore,
    next: Option<Fingerprint>,
    visited: HashSet<Fingerprint>,
}

impl<'r> RevList<'r> {
    pub fn new(commits: &'r CommitStore, start: Fingerprint) -> Self {
        RevList {
            commits,
            next: Some(start),
            visited: HashSet::new(),
        }
    }
}

impl<'r> Iterator for RevList<'r> {
    type Item = anyhow::Result<(Fingerprint, Commit)>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;

        if !self.visited.insert(current.clone()) {
            return None;
        }

        match self.commits.load(&current) {
            Ok(commit) => {
                self.next = commit.first_parent().cloned();
                Some(Ok((current, commit)))
            }
            Err(error) => Some(Err(error)),
        }
    }
}

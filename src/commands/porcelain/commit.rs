use crate::areas::repository::Repository;
use crate::artifacts::branch::head::Head;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::status::inspector::Inspector;

/// Timestamp format written into commit records (local wall clock)
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

impl Repository {
    /// Freeze the staging index into a new commit and advance HEAD
    ///
    /// A commit is the difference between the index and HEAD: when that
    /// difference is empty the index is cleared and nothing is written.
    /// The commit record is persisted before any ref moves, so HEAD can
    /// never name an unpersisted commit.
    pub fn commit(&self, message: &str) -> anyhow::Result<()> {
        let head = self.refs().read_head()?;
        let head_fingerprint = self.refs().read_head_fingerprint()?;
        let head_commit = match &head_fingerprint {
            Some(fingerprint) => Some(self.commits().load(fingerprint)?),
            None => None,
        };

        let info = {
            let index = self.index();
            Inspector::new(self).status(&index)?
        };

        if !info.has_staged_changes() {
            let mut index = self.index();
            index.clear();
            index.write_updates()?;
            writeln!(
                self.writer(),
                "No changes to commit. Staging area is empty or identical to HEAD."
            )?;
            return Ok(());
        }

        // snapshot = HEAD's file map, overlaid with the index, minus the
        // staged deletions
        let mut files = head_commit
            .map(|commit| commit.files().clone())
            .unwrap_or_default();
        {
            let index = self.index();
            for (name, fingerprint) in index.entries() {
                files.insert(name.clone(), fingerprint.clone());
            }
        }
        for name in info.staged_deletions() {
            files.remove(name);
        }

        let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
        let parents = head_fingerprint.into_iter().collect::<Vec<_>>();
        let commit = Commit::new(message.to_string(), timestamp, parents, files);

        let fingerprint = self.commits().store(&commit)?;

        let new_head = match head {
            Head::Attached(branch) => Head::Attached(branch),
            Head::Detached(_) => Head::Detached(fingerprint.clone()),
        };
        self.refs().save_head_and_branch(&new_head, Some(&fingerprint))?;

        let mut index = self.index();
        index.clear();
        index.write_updates()?;

        writeln!(self.writer(), "Committed as {}", fingerprint.to_short())?;

        Ok(())
    }
}

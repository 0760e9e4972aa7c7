use crate::areas::repository::Repository;
use crate::artifacts::diff::line_diff::diff_lines;
use crate::artifacts::diff::snapshot_source::SnapshotSource;
use crate::artifacts::objects::commit::FileMap;
use colored::Colorize;

impl Repository {
    /// Compare two snapshots, chosen by the arguments:
    ///
    /// - no arguments: working tree against the staging index
    /// - `--staged` / `--cached`: staging index against the HEAD commit
    /// - one commit: working tree against that commit
    /// - two commits: the two commits against each other
    pub fn diff(&self, staged: bool, targets: &[String]) -> anyhow::Result<()> {
        if staged {
            return self.diff_staged_against_head();
        }

        match targets {
            [] => self.diff_working_against_staged(),
            [commit] => self.diff_working_against_commit(commit),
            [old, new] => self.diff_commits(old, new),
            _ => unreachable!("clap caps diff at two targets"),
        }
    }

    fn diff_working_against_staged(&self) -> anyhow::Result<()> {
        let staged = self.staged_snapshot()?;
        let found = self.print_sources_diff(
            &SnapshotSource::Staged(&staged, self.database()),
            &SnapshotSource::Working(self.workspace()),
        )?;

        if !found {
            writeln!(
                self.writer(),
                "No differences in working directory compared to staged area."
            )?;
        }

        Ok(())
    }

    fn diff_staged_against_head(&self) -> anyhow::Result<()> {
        let head_commit = match self.head_commit()? {
            Some(commit) => commit,
            None => {
                writeln!(
                    self.writer(),
                    "No HEAD commit to compare against. Use 'commit' first."
                )?;
                return Ok(());
            }
        };

        let staged = self.staged_snapshot()?;
        let found = self.print_sources_diff(
            &SnapshotSource::Commit(&head_commit, self.database()),
            &SnapshotSource::Staged(&staged, self.database()),
        )?;

        if !found {
            writeln!(self.writer(), "No staged changes to show.")?;
        }

        Ok(())
    }

    /// The effective next snapshot: the HEAD file map overlaid with the
    /// staging index
    fn staged_snapshot(&self) -> anyhow::Result<FileMap> {
        let mut files = match self.head_commit()? {
            Some(commit) => commit.files().clone(),
            None => Default::default(),
        };

        let index = self.index();
        for (name, fingerprint) in index.entries() {
            files.insert(name.clone(), fingerprint.clone());
        }

        Ok(files)
    }

    fn diff_working_against_commit(&self, target: &str) -> anyhow::Result<()> {
        let fingerprint = self.resolve_commit_target(target)?;
        let commit = self.commits().load(&fingerprint)?;

        let found = self.print_sources_diff(
            &SnapshotSource::Commit(&commit, self.database()),
            &SnapshotSource::Working(self.workspace()),
        )?;

        if !found {
            writeln!(
                self.writer(),
                "No differences in working directory compared to commit {}.",
                fingerprint.to_short()
            )?;
        }

        Ok(())
    }

    fn diff_commits(&self, old: &str, new: &str) -> anyhow::Result<()> {
        let old_fingerprint = self.resolve_commit_target(old)?;
        let new_fingerprint = self.resolve_commit_target(new)?;
        let old_commit = self.commits().load(&old_fingerprint)?;
        let new_commit = self.commits().load(&new_fingerprint)?;

        writeln!(
            self.writer(),
            "Diff between {} and {}",
            old_fingerprint.to_short(),
            new_fingerprint.to_short()
        )?;

        let found = self.print_sources_diff(
            &SnapshotSource::Commit(&old_commit, self.database()),
            &SnapshotSource::Commit(&new_commit, self.database()),
        )?;

        if !found {
            writeln!(self.writer(), "No differences between commits.")?;
        }

        Ok(())
    }

    /// Walk the filename union of both sides and print a per-file report
    /// for every pair whose bytes differ
    fn print_sources_diff(
        &self,
        old: &SnapshotSource,
        new: &SnapshotSource,
    ) -> anyhow::Result<bool> {
        let mut names = old.file_names()?;
        names.extend(new.file_names()?);

        let mut found = false;
        for name in names {
            let old_blob = old.read(&name)?;
            let new_blob = new.read(&name)?;

            if old_blob == new_blob {
                continue;
            }
            found = true;

            writeln!(
                self.writer(),
                "{}",
                format!("--- Diff for: {} ---", name).bold()
            )?;

            let old_text = old_blob.map(|blob| blob.as_text()).unwrap_or_default();
            let new_text = new_blob.map(|blob| blob.as_text()).unwrap_or_default();
            for line in diff_lines(&old_text, &new_text) {
                writeln!(self.writer(), "{}", line)?;
            }
        }

        Ok(found)
    }
}

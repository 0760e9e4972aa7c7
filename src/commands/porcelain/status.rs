use crate::areas::repository::Repository;
use crate::artifacts::branch::head::Head;
use crate::artifacts::status::inspector::{Inspector, StatusInfo};
use colored::Colorize;

impl Repository {
    /// Print the categorized working tree classifications
    pub fn status(&self) -> anyhow::Result<()> {
        let info = {
            let index = self.index();
            Inspector::new(self).status(&index)?
        };

        self.print_status_report(&info)
    }

    /// Render a status report; also used by the checkout dirty-tree guard
    pub(crate) fn print_status_report(&self, info: &StatusInfo) -> anyhow::Result<()> {
        match self.refs().read_head()? {
            Head::Attached(branch) => writeln!(self.writer(), "On branch {}", branch)?,
            Head::Detached(_) => writeln!(self.writer(), "On branch (detached HEAD)")?,
        }
        match self.refs().read_head_fingerprint()? {
            Some(fingerprint) => {
                writeln!(self.writer(), "HEAD points to: {}", fingerprint.to_short())?
            }
            None => writeln!(self.writer(), "HEAD points to: No commits yet")?,
        }
        writeln!(self.writer())?;

        if !info.index_changeset.is_empty() {
            writeln!(self.writer(), "Changes to be committed:")?;
            for (name, change) in &info.index_changeset {
                writeln!(self.writer(), "{}{}", change, name)?;
            }
            writeln!(self.writer())?;
        }

        if !info.workspace_changeset.is_empty() {
            writeln!(self.writer(), "Changes not staged for commit:")?;
            for (name, change) in &info.workspace_changeset {
                writeln!(self.writer(), "{}{}", change, name)?;
            }
            writeln!(self.writer())?;
        }

        if !info.untracked_files.is_empty() {
            writeln!(self.writer(), "Untracked files:")?;
            writeln!(
                self.writer(),
                "  (use \"minigit add <file>...\" to include in what will be committed)"
            )?;
            for name in &info.untracked_files {
                writeln!(self.writer(), "    {}", name.red())?;
            }
            writeln!(self.writer())?;
        }

        if info.is_clean() {
            writeln!(self.writer(), "Your working directory is clean.")?;
        }

        Ok(())
    }
}

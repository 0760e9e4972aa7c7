use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::head::Head;
use anyhow::Context;
use std::fs;

impl Repository {
    /// Create the on-disk layout and attach HEAD to the default branch
    ///
    /// Idempotent: an already initialized repository is reported and left
    /// untouched.
    pub fn init(&self) -> anyhow::Result<()> {
        if self.repo_path().exists() {
            writeln!(
                self.writer(),
                "minigit repository already initialized in {}",
                self.repo_path().display()
            )?;
            return Ok(());
        }

        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create .minigit/objects directory")?;
        fs::create_dir_all(self.commits().commits_path())
            .context("Failed to create .minigit/commits directory")?;
        fs::create_dir_all(self.refs().heads_path())
            .context("Failed to create .minigit/refs/heads directory")?;

        // master exists from the start but points to no commit yet
        let master = BranchName::default_branch();
        self.refs().write_branch(&master, None)?;
        self.refs()
            .save_head_and_branch(&Head::Attached(master), None)?;

        writeln!(
            self.writer(),
            "Initialized empty minigit repository in {}",
            self.repo_path().display()
        )?;

        Ok(())
    }
}

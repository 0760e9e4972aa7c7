use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::error::RepoError;

impl Repository {
    /// Create a branch pointing at the current HEAD commit
    pub fn branch(&self, name: &str) -> anyhow::Result<()> {
        let branch = BranchName::try_parse(name.to_string())?;

        let head_fingerprint = self
            .refs()
            .read_head_fingerprint()?
            .ok_or(RepoError::EmptyHistory)?;

        self.refs().create_branch(&branch, &head_fingerprint)?;

        writeln!(
            self.writer(),
            "Created branch: {} pointing to {}",
            branch,
            head_fingerprint.to_short()
        )?;

        Ok(())
    }
}

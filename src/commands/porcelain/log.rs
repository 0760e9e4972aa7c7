use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::head::Head;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::fingerprint::Fingerprint;
use colored::Colorize;
use std::collections::HashMap;

impl Repository {
    /// Print HEAD-rooted history, first parent only
    ///
    /// Commits are decorated with the branches pointing at them; traversal
    /// stops with a report at the first corrupt reference.
    pub fn log(&self) -> anyhow::Result<()> {
        let head = self.refs().read_head()?;
        let start = match self.refs().read_head_fingerprint()? {
            Some(fingerprint) => fingerprint,
            None => {
                writeln!(self.writer(), "No commits yet.")?;
                return Ok(());
            }
        };

        let reverse_refs = self.refs().reverse_refs()?;

        for result in RevList::new(self.commits(), start) {
            match result {
                Ok((fingerprint, commit)) => {
                    self.show_commit(&fingerprint, &commit, &head, &reverse_refs)?
                }
                Err(error) => {
                    eprintln!("Error: {}. Stopping log.", error);
                    break;
                }
            }
        }

        Ok(())
    }

    fn show_commit(
        &self,
        fingerprint: &Fingerprint,
        commit: &Commit,
        head: &Head,
        reverse_refs: &HashMap<Fingerprint, Vec<BranchName>>,
    ) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "commit {}{}",
            fingerprint.as_ref().yellow(),
            self.commit_decoration(fingerprint, head, reverse_refs)
        )?;

        if !commit.parents().is_empty() {
            let parents = commit
                .parents()
                .iter()
                .map(|parent| parent.to_short())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(self.writer(), "Parents: {}", parents)?;
        }

        writeln!(self.writer(), "Date:    {}", commit.timestamp())?;
        writeln!(self.writer())?;
        for line in commit.message().lines() {
            writeln!(self.writer(), "    {}", line)?;
        }
        writeln!(self.writer())?;

        Ok(())
    }

    fn commit_decoration(
        &self,
        fingerprint: &Fingerprint,
        head: &Head,
        reverse_refs: &HashMap<Fingerprint, Vec<BranchName>>,
    ) -> String {
        let mut names = Vec::new();

        let current_branch = head.branch_name();
        if let Head::Detached(at) = head {
            if at == fingerprint {
                names.push("HEAD".to_string());
            }
        }

        if let Some(branches) = reverse_refs.get(fingerprint) {
            let mut branches = branches.clone();
            branches.sort();

            for branch in branches {
                if Some(&branch) == current_branch {
                    names.insert(0, format!("HEAD -> {}", branch));
                } else {
                    names.push(branch.to_string());
                }
            }
        }

        if names.is_empty() {
            String::new()
        } else {
            format!(" ({})", names.join(", "))
        }
    }
}

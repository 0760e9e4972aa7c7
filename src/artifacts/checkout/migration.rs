//! Working tree reconciliation
//!
//! Applies a target snapshot to the working tree: every file in the
//! snapshot is written with its blob bytes (existing files overwritten),
//! then every regular non-dotfile that is not in the snapshot is removed.
//! File writes strictly precede file deletions; the caller updates HEAD
//! and the refs only after the tree has been reconciled.

use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::FileMap;
use derive_new::new;

/// One checkout's worth of working tree changes
#[derive(new)]
pub struct Migration<'r> {
    repository: &'r Repository,
    target: &'r FileMap,
}

impl<'r> Migration<'r> {
    /// Reconcile the working tree to the target snapshot
    ///
    /// Individual file failures are warnings: a missing blob or an
    /// unwritable path skips that file and the migration continues, so a
    /// partially damaged object store never blocks leaving a commit.
    pub fn apply(&self) -> anyhow::Result<()> {
        self.write_snapshot_files()?;
        self.remove_extraneous_files()?;

        Ok(())
    }

    fn write_snapshot_files(&self) -> anyhow::Result<()> {
        for (name, fingerprint) in self.target {
            let blob = match self.repository.database().load_blob(fingerprint)? {
                Some(blob) => blob,
                None => {
                    eprintln!(
                        "Warning: blob for {} ({}) not found. Skipping.",
                        name,
                        fingerprint.to_short()
                    );
                    continue;
                }
            };

            if let Err(error) = self.repository.workspace().write_file(name, blob.content()) {
                eprintln!("Warning: could not write file {}. Skipping: {}", name, error);
            }
        }

        Ok(())
    }

    fn remove_extraneous_files(&self) -> anyhow::Result<()> {
        for name in self.repository.workspace().list_files()? {
            if !self.target.contains_key(&name) {
                if let Err(error) = self.repository.workspace().remove_file(&name) {
                    eprintln!("Warning: could not remove file {}: {}", name, error);
                }
            }
        }

        Ok(())
    }
}

use crate::areas::repository::Repository;

impl Repository {
    /// Stage a file: hash its bytes, store the blob, record the entry
    ///
    /// Re-staging a file whose content is already staged under the same
    /// fingerprint is a reported no-op. A read or blob-write failure warns
    /// and abandons this file only.
    pub fn add(&self, path: &str) -> anyhow::Result<()> {
        let name = self.workspace().resolve_addable(path)?;

        let blob = match self.workspace().read_file(&name) {
            Ok(blob) => blob,
            Err(error) => {
                eprintln!("Warning: could not read {}. Not added: {}", name, error);
                return Ok(());
            }
        };

        let fingerprint = match self.database().store_blob(&blob) {
            Ok(fingerprint) => fingerprint,
            Err(error) => {
                eprintln!("Warning: could not store blob for {}: {}", name, error);
                return Ok(());
            }
        };

        let mut index = self.index();
        if !index.stage(name.clone(), fingerprint.clone()) {
            writeln!(
                self.writer(),
                "File already up to date in staging: {}",
                name
            )?;
            return Ok(());
        }
        index.write_updates()?;

        writeln!(
            self.writer(),
            "Added file to staging: {} ({})",
            name,
            fingerprint.to_short()
        )?;

        Ok(())
    }
}

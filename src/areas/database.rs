//! Object database for blobs
//!
//! Content-addressed storage: every distinct byte sequence is written once
//! under its fingerprint, as raw bytes in binary mode.
//!
//! ## Storage Format
//!
//! - Path: `.minigit/objects/<fingerprint>`, one file per blob
//! - Content: the blob bytes exactly, no header, no compression

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::fingerprint::Fingerprint;
use anyhow::Context;
use rand;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Blob object store
///
/// Storing the same content twice is a no-op: the blob file already exists
/// under its fingerprint and is never rewritten.
#[derive(Debug)]
pub struct Database {
    /// Path to the objects directory (typically `.minigit/objects`)
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Store a blob, returning its fingerprint
    ///
    /// Idempotent; a second write of the same content neither duplicates nor
    /// corrupts the stored blob.
    pub fn store_blob(&self, blob: &Blob) -> anyhow::Result<Fingerprint> {
        let fingerprint = blob.fingerprint();
        let object_path = self.path.join(fingerprint.as_ref());

        if !object_path.exists() {
            self.write_object(object_path, blob.content())?;
        }

        Ok(fingerprint)
    }

    /// Load a blob by fingerprint
    ///
    /// # Returns
    ///
    /// `None` when no such object exists; callers decide whether a missing
    /// blob is a warning or an error.
    pub fn load_blob(&self, fingerprint: &Fingerprint) -> anyhow::Result<Option<Blob>> {
        let object_path = self.path.join(fingerprint.as_ref());

        if !object_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read(&object_path).with_context(|| {
            format!("Unable to read object file {}", object_path.display())
        })?;

        Ok(Some(Blob::new(content.into())))
    }

    /// Check whether a blob exists without reading it
    pub fn contains(&self, fingerprint: &Fingerprint) -> bool {
        self.path.join(fingerprint.as_ref()).exists()
    }

    fn write_object(&self, object_path: PathBuf, content: &[u8]) -> anyhow::Result<()> {
        let object_dir = object_path
            .parent()
            .context(format!("Invalid object path {}", object_path.display()))?;
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_object_path)
            .context(format!(
                "Unable to open object file {}",
                temp_object_path.display()
            ))?;

        file.write_all(content).context(format!(
            "Unable to write object file {}",
            temp_object_path.display()
        ))?;

        // rename the temp file onto the object file to make the write atomic
        std::fs::rename(&temp_object_path, &object_path).context(format!(
            "Unable to rename object file to {}",
            object_path.display()
        ))?;

        Ok(())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}

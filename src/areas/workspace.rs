//! Working tree
//!
//! File system operations on the repository root: the working tree is the
//! set of regular files directly in the root directory, excluding the
//! `.minigit` metadata directory and anything whose name starts with a dot.
//! The scan is deliberately non-recursive.

use crate::artifacts::objects::blob::Blob;
use crate::error::RepoError;
use anyhow::Context;
use bytes::Bytes;
use std::path::Path;

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// List the working tree in name order
    ///
    /// Entries that cannot be inspected are skipped with a warning rather
    /// than failing the whole scan.
    pub fn list_files(&self) -> anyhow::Result<Vec<String>> {
        let mut files = Vec::new();

        for entry in std::fs::read_dir(&self.path)
            .with_context(|| format!("failed to read directory {:?}", self.path))?
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(error) => {
                    eprintln!("Warning: unreadable directory entry skipped: {}", error);
                    continue;
                }
            };

            let name = entry.file_name().to_string_lossy().to_string();
            if Self::is_ignored(&name) {
                continue;
            }

            let file_type = entry
                .file_type()
                .with_context(|| format!("failed to inspect {:?}", entry.path()))?;
            if file_type.is_file() {
                files.push(name);
            }
        }

        files.sort();
        Ok(files)
    }

    /// Read a file byte-exactly into a blob
    pub fn read_file(&self, name: &str) -> anyhow::Result<Blob> {
        let file_path = self.path.join(name);
        let content = std::fs::read(&file_path)
            .with_context(|| format!("failed to read file {:?}", file_path))?;

        Ok(Blob::new(Bytes::from(content)))
    }

    /// Write a file byte-exactly, overwriting any existing content
    pub fn write_file(&self, name: &str, content: &[u8]) -> anyhow::Result<()> {
        let file_path = self.path.join(name);
        std::fs::write(&file_path, content)
            .with_context(|| format!("failed to write file {:?}", file_path))
    }

    /// Remove a file from the working tree
    pub fn remove_file(&self, name: &str) -> anyhow::Result<()> {
        let file_path = self.path.join(name);
        std::fs::remove_file(&file_path)
            .with_context(|| format!("failed to remove file {:?}", file_path))
    }

    /// Check whether a working tree entry exists as a regular file
    pub fn is_regular_file(&self, name: &str) -> bool {
        self.path.join(name).is_file()
    }

    /// Validate a path handed to `add`
    ///
    /// The target must exist under the repository root and be a regular
    /// file; the returned name is the flat filename tracked by the index.
    pub fn resolve_addable(&self, path: &str) -> anyhow::Result<String> {
        let file_path = self.path.join(path);

        if !file_path.exists() {
            return Err(RepoError::NoSuchFile(path.to_string()).into());
        }
        if !file_path.is_file() {
            return Err(RepoError::NotRegularFile(path.to_string()).into());
        }

        let name = file_path
            .file_name()
            .with_context(|| format!("invalid file path {:?}", file_path))?
            .to_string_lossy()
            .to_string();

        Ok(name)
    }

    fn is_ignored(name: &str) -> bool {
        name.starts_with('.')
    }
}

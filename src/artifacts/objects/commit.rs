//! Commit object
//!
//! A commit ties a message, a timestamp, an ordered list of parents and a
//! complete file snapshot (filename -> blob fingerprint) together under one
//! fingerprint. Commits are immutable once written.
//!
//! ## Format
//!
//! On disk (line-oriented text, keyed by the commit fingerprint):
//! ```text
//! message:<message text until newline>
//! timestamp:<timestamp string>
//! parents:<space-separated parent fingerprints>
//! files:
//! <filename>:<blob-fingerprint>
//! ...
//! ```
//!
//! The `files:` section runs until the next blank line or end of file.
//! Filenames must not contain `:` or newline.

use crate::artifacts::objects::fingerprint::{Fingerprint, FingerprintBuilder};
use anyhow::Context;
use std::collections::BTreeMap;

/// Snapshot of tracked files: filename -> blob fingerprint
///
/// A `BTreeMap` keeps iteration deterministic, which makes commit
/// fingerprints reproducible for identical content within and across runs.
pub type FileMap = BTreeMap<String, Fingerprint>;

/// An immutable snapshot of the repository with metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Commit message (may contain spaces, single line)
    message: String,
    /// Local wall-clock stamp captured at commit time
    timestamp: String,
    /// Parent fingerprints, first parent leading (empty for the root)
    parents: Vec<Fingerprint>,
    /// Complete file snapshot, not a delta
    files: FileMap,
}

impl Commit {
    pub fn new(
        message: String,
        timestamp: String,
        parents: Vec<Fingerprint>,
        files: FileMap,
    ) -> Self {
        Commit {
            message,
            timestamp,
            parents,
            files,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn parents(&self) -> &[Fingerprint] {
        &self.parents
    }

    /// First parent, the one history traversal follows
    pub fn first_parent(&self) -> Option<&Fingerprint> {
        self.parents.first()
    }

    pub fn files(&self) -> &FileMap {
        &self.files
    }

    /// Derive the commit's fingerprint from its own fields
    ///
    /// The digest covers the message, the timestamp, every parent fingerprint
    /// in order and every `(filename, blob fingerprint)` pair in file-map
    /// order, so any change to the snapshot or metadata changes the identity.
    pub fn fingerprint(&self) -> Fingerprint {
        let mut builder = FingerprintBuilder::new();

        builder.update(self.message.as_bytes());
        builder.update(self.timestamp.as_bytes());
        for parent in &self.parents {
            builder.update(parent.as_ref().as_bytes());
        }
        for (name, blob) in &self.files {
            builder.update(name.as_bytes());
            builder.update(blob.as_ref().as_bytes());
        }

        builder.finalize()
    }

    /// Serialize the commit record to its on-disk text form
    pub fn serialize(&self) -> String {
        let mut record = String::new();

        record.push_str(&format!("message:{}\n", self.message));
        record.push_str(&format!("timestamp:{}\n", self.timestamp));
        record.push_str("parents:");
        for parent in &self.parents {
            record.push_str(parent.as_ref());
            record.push(' ');
        }
        record.push('\n');
        record.push_str("files:\n");
        for (name, blob) in &self.files {
            record.push_str(&format!("{}:{}\n", name, blob));
        }

        record
    }

    /// Parse a commit record from its on-disk text form
    pub fn deserialize(content: &str) -> anyhow::Result<Self> {
        let mut message = None;
        let mut timestamp = None;
        let mut parents = Vec::new();
        let mut files = FileMap::new();

        let mut lines = content.lines();
        while let Some(line) = lines.next() {
            if let Some(rest) = line.strip_prefix("message:") {
                message = Some(rest.to_string());
            } else if let Some(rest) = line.strip_prefix("timestamp:") {
                timestamp = Some(rest.to_string());
            } else if let Some(rest) = line.strip_prefix("parents:") {
                for parent in rest.split_whitespace() {
                    parents.push(Fingerprint::try_parse(parent.to_string())?);
                }
            } else if line == "files:" {
                // the files section runs until a blank line or end of file
                for file_line in lines.by_ref() {
                    if file_line.is_empty() {
                        break;
                    }
                    let (name, blob) = file_line
                        .split_once(':')
                        .context("Invalid commit record: malformed file entry")?;
                    files.insert(name.to_string(), Fingerprint::try_parse(blob.to_string())?);
                }
            }
        }

        Ok(Commit {
            message: message.context("Invalid commit record: missing message line")?,
            timestamp: timestamp.context("Invalid commit record: missing timestamp line")?,
            parents,
            files,
        })
    }
}

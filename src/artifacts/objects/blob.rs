//! Blob object
//!
//! Blobs store file content: the raw bytes and nothing else. Each distinct
//! content is stored once in the object database under its fingerprint.

use crate::artifacts::objects::fingerprint::Fingerprint;
use bytes::Bytes;
use derive_new::new;

/// An immutable byte sequence identified by its fingerprint
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    content: Bytes,
}

impl Blob {
    /// Get the raw content bytes
    pub fn content(&self) -> &Bytes {
        &self.content
    }

    /// Compute the blob's fingerprint from its content
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::of_bytes(&self.content)
    }

    /// Interpret the content as text for line-oriented display
    ///
    /// Blobs are byte-exact on disk; this is only used at the diff/report
    /// boundary where lines must be rendered.
    pub fn as_text(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }
}

//! Content fingerprints
//!
//! A fingerprint is a 40-character hexadecimal SHA-1 digest and is the only
//! identity used throughout the system: blobs and commits are both addressed
//! by it, and commit identity depends transitively on every tracked byte.
//!
//! ## Format
//!
//! - Full: 40 hex characters (e.g., "abc123...def")
//! - Short: first 7 characters, used in user-facing reports

use sha1::{Digest, Sha1};

/// Length of a full fingerprint in hex characters
pub const FINGERPRINT_LENGTH: usize = 40;

/// Shortest prefix accepted when resolving abbreviated fingerprints
pub const MIN_PREFIX_LENGTH: usize = 4;

/// Content fingerprint (SHA-1 hash, hex-encoded)
///
/// Equal content always produces an equal fingerprint, which is what makes
/// the object store content-addressed and commits tamper-evident.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Fingerprint an arbitrary byte buffer
    pub fn of_bytes(content: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(content);

        Fingerprint(format!("{:x}", hasher.finalize()))
    }

    /// Parse and validate a fingerprint from a string
    ///
    /// # Returns
    ///
    /// Validated fingerprint or an error on invalid length/characters
    pub fn try_parse(id: String) -> anyhow::Result<Self> {
        if id.len() != FINGERPRINT_LENGTH {
            return Err(anyhow::anyhow!("Invalid fingerprint length: {}", id.len()));
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(anyhow::anyhow!("Invalid fingerprint characters: {}", id));
        }
        Ok(Self(id))
    }

    /// Get the abbreviated form used in reports (first 7 characters)
    pub fn to_short(&self) -> String {
        self.0.split_at(7).0.to_string()
    }
}

/// Incremental fingerprint builder
///
/// Commit identity is a digest over several fields in sequence; this wraps
/// the hasher so callers feed the fields in order without concatenating
/// them into one allocation first.
#[derive(Default)]
pub struct FingerprintBuilder {
    hasher: Sha1,
}

impl FingerprintBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, content: &[u8]) {
        self.hasher.update(content);
    }

    pub fn finalize(self) -> Fingerprint {
        Fingerprint(format!("{:x}", self.hasher.finalize()))
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

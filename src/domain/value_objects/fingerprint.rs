//! Args Fingerprint Value Object
//!
//! A validated, immutable hash over a resource's resolved argument vector.
//! Recorded in the ledger on success and used by `status` to flag drift
//! between the manifest and what was actually deployed.

use std::fmt;

/// Fingerprint of a resolved argument vector
///
/// Wraps a SHA-256 hash string with the `sha256:` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArgsFingerprint(String);

impl ArgsFingerprint {
    /// Prefix for SHA-256 fingerprints
    pub const PREFIX: &'static str = "sha256:";

    /// Create a fingerprint from a raw hash string (with or without prefix)
    pub fn new(raw: &str) -> Self {
        if raw.starts_with(Self::PREFIX) {
            Self(raw.to_string())
        } else {
            Self(format!("{}{}", Self::PREFIX, raw))
        }
    }

    /// Compute the fingerprint of a resolved argument vector
    ///
    /// Each argument is hashed length-prefixed, so `["ab", "c"]` and
    /// `["a", "bc"]` fingerprint differently.
    pub fn from_args(args: &[String]) -> Self {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        for arg in args {
            hasher.update((arg.len() as u64).to_le_bytes());
            hasher.update(arg.as_bytes());
        }
        Self(format!("{}{:x}", Self::PREFIX, hasher.finalize()))
    }

    /// The full fingerprint string with prefix
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Just the hex part without prefix
    pub fn hex(&self) -> &str {
        self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0)
    }

    /// Check if this fingerprint matches another
    pub fn matches(&self, other: &ArgsFingerprint) -> bool {
        self.0 == other.0
    }
}

impl fmt::Display for ArgsFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ArgsFingerprint {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

impl From<&str> for ArgsFingerprint {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for ArgsFingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

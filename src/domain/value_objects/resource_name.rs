//! Resource Name Value Object
//!
//! A validated resource identifier. Names key the ledger and appear in
//! manifest reference bindings, so the charset is kept deliberately small:
//! lowercase ascii, digits, `-` and `_`, starting with a letter or digit.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Maximum accepted name length
const MAX_LEN: usize = 64;

/// Why a resource name was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceNameError {
    #[error("resource name is empty")]
    Empty,

    #[error("resource name is {len} chars long (max {MAX_LEN})")]
    TooLong { len: usize },

    #[error("resource name contains invalid character '{ch}' (allowed: a-z, 0-9, '-', '_')")]
    InvalidChar { ch: char },

    #[error("resource name must start with a lowercase letter or digit, found '{ch}'")]
    InvalidStart { ch: char },
}

/// Validated resource identifier
///
/// Immutable once constructed; ordering is plain byte order so ledgers and
/// plans that sort by name are deterministic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceName(String);

impl ResourceName {
    /// Parse and validate a raw string
    pub fn parse(raw: &str) -> Result<Self, ResourceNameError> {
        if raw.is_empty() {
            return Err(ResourceNameError::Empty);
        }
        if raw.len() > MAX_LEN {
            return Err(ResourceNameError::TooLong { len: raw.len() });
        }
        let mut chars = raw.chars();
        if let Some(first) = chars.next() {
            if !first.is_ascii_lowercase() && !first.is_ascii_digit() {
                return Err(ResourceNameError::InvalidStart { ch: first });
            }
        }
        for ch in raw.chars() {
            let valid = ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' || ch == '_';
            if !valid {
                return Err(ResourceNameError::InvalidChar { ch });
            }
        }
        Ok(Self(raw.to_string()))
    }

    /// The name as a plain string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ResourceName {
    type Err = ResourceNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ResourceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ResourceName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ResourceName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

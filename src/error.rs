//! Error types for caravan
//!
//! Library errors use `thiserror`; the binary wraps them with `anyhow`
//! at the command layer.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::ledger_repository::LedgerError;

/// Result type alias for caravan operations
pub type CaravanResult<T> = Result<T, CaravanError>;

/// Main error type for caravan operations
#[derive(Error, Debug)]
pub enum CaravanError {
    /// The dependency relation between resources is not acyclic
    #[error("dependency cycle detected: {}", format_cycle(.names))]
    CycleDetected { names: Vec<String> },

    /// A reference binding names a resource that is not in the graph
    #[error("resource '{resource}' references unknown resource '{missing}'")]
    UnresolvedReference { resource: String, missing: String },

    /// Two resources share a name
    #[error("duplicate resource name '{name}' in manifest")]
    DuplicateResource { name: String },

    /// Manifest file does not exist
    #[error("manifest not found: {path} (run 'caravan init' to create one)")]
    ManifestNotFound { path: PathBuf },

    /// Manifest exists but cannot be used
    #[error("invalid manifest {path}: {message}")]
    Manifest { path: PathBuf, message: String },

    /// A resource's deploy call failed; the run halts at this resource
    #[error("deployment failed for resource '{resource}': {cause}")]
    DeploymentFailed { resource: String, cause: String },

    /// Another run holds the ledger lock
    #[error("ledger is locked by another run: {path}")]
    LedgerLocked { path: PathBuf },

    /// Persisted ledger fails to parse; never auto-repaired
    #[error("ledger file corrupted: {path}: {message}")]
    LedgerCorrupt { path: PathBuf, message: String },

    /// Ledger was written by an incompatible caravan version
    #[error("ledger format version {found} is not supported (expected {expected})")]
    LedgerVersionMismatch { found: u32, expected: u32 },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_cycle(names: &[String]) -> String {
    match names.first() {
        Some(first) => {
            let mut path = names.join(" -> ");
            path.push_str(" -> ");
            path.push_str(first);
            path
        }
        None => String::from("(empty)"),
    }
}

impl From<LedgerError> for CaravanError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Locked { path } => CaravanError::LedgerLocked { path },
            LedgerError::Corrupt { path, message } => CaravanError::LedgerCorrupt { path, message },
            LedgerError::VersionMismatch { found, expected } => {
                CaravanError::LedgerVersionMismatch { found, expected }
            }
            LedgerError::Io(err) => CaravanError::Io(err),
        }
    }
}

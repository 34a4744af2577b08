//! LedgerRepository port - abstraction for ledger persistence
//!
//! This trait lets the executor lock, load, and save ledgers without
//! knowing about TOML or file locking details. The lock covers a whole
//! run: acquired before the ledger is read, released when the returned
//! guard drops.

use std::fs::File;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::entities::Ledger;

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger operation errors
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Another run holds the exclusive lock
    #[error("ledger is locked by another run: {path}")]
    Locked { path: PathBuf },

    /// Persisted ledger fails to parse
    #[error("ledger file corrupted: {path}: {message}")]
    Corrupt { path: PathBuf, message: String },

    /// Persisted ledger has an unsupported format version
    #[error("ledger format version {found} is not supported (expected {expected})")]
    VersionMismatch { found: u32, expected: u32 },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Exclusive hold on a ledger's backing store
///
/// Dropping the guard releases the lock. File-backed repositories keep
/// the locked handle alive here; in-memory repositories hold nothing.
#[derive(Debug)]
pub struct LedgerGuard {
    _lock: Option<File>,
}

impl LedgerGuard {
    /// Guard backed by a locked file handle
    pub fn file(lock: File) -> Self {
        Self { _lock: Some(lock) }
    }

    /// Guard over a store that needs no locking
    pub fn noop() -> Self {
        Self { _lock: None }
    }
}

/// Abstract repository for ledger persistence
///
/// Implemented by the infrastructure layer (TOML file store) and by
/// in-memory test doubles.
pub trait LedgerRepository {
    /// Take the exclusive lock for a run; contended lock fails fast
    fn lock(&self, path: &Path) -> LedgerResult<LedgerGuard>;

    /// Load the ledger, or an empty one when nothing is persisted yet
    fn load(&self, path: &Path) -> LedgerResult<Ledger>;

    /// Persist the full ledger atomically
    fn save(&self, ledger: &Ledger, path: &Path) -> LedgerResult<()>;
}

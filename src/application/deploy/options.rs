//! Deploy Options
//!
//! Configuration types for deploy runs.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Options for the deploy use case
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Manifest path (reported in events; resolution happened already)
    pub manifest_path: PathBuf,
    /// Ledger path to lock, load, and persist
    pub ledger_path: PathBuf,
    /// Dry run (report what would deploy, touch nothing)
    pub dry_run: bool,
    /// Checked between resources; when set, the run stops at the
    /// checkpoint and the ledger stays resumable
    pub cancel: Option<Arc<AtomicBool>>,
}

impl DeployOptions {
    pub fn new(manifest_path: impl Into<PathBuf>, ledger_path: impl Into<PathBuf>) -> Self {
        Self {
            manifest_path: manifest_path.into(),
            ledger_path: ledger_path.into(),
            dry_run: false,
            cancel: None,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_cancel(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Has a cancel been requested?
    pub fn cancel_requested(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }
}

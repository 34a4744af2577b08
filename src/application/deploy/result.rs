//! Deploy Result
//!
//! Result types for deploy runs.

/// A resource deployed during this run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployedResource {
    /// Resource name
    pub name: String,
    /// Runtime-assigned identifier; None in a dry run
    pub identifier: Option<String>,
}

/// The resource that halted the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedResource {
    /// Resource name
    pub name: String,
    /// Rendered cause
    pub error: String,
}

/// Result of a deploy run
#[derive(Debug, Clone, Default)]
pub struct DeployResult {
    /// Resources deployed this run, in plan order
    pub deployed: Vec<DeployedResource>,
    /// Resources skipped (Success already in the ledger), in plan order
    pub skipped: Vec<String>,
    /// The failure that halted the run, if any
    pub failed: Option<FailedResource>,
    /// Total resources in the plan
    pub planned: usize,
    /// Whether this was a dry run
    pub dry_run: bool,
    /// Whether the run stopped at a checkpoint on request
    pub interrupted: bool,
}

impl DeployResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// No resource failed (an interrupted run is still a success so far)
    pub fn is_success(&self) -> bool {
        self.failed.is_none()
    }

    /// Did this run change anything?
    pub fn has_changes(&self) -> bool {
        !self.dry_run && !self.deployed.is_empty()
    }

    /// Resources that still need a deploy after this run
    pub fn remaining(&self) -> usize {
        self.planned
            .saturating_sub(self.deployed.len() + self.skipped.len())
    }
}

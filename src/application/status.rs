//! Status Use Case
//!
//! Compares a manifest graph against a persisted ledger and reports,
//! per resource, where a deployment stands. Read-only: no lock is taken
//! and nothing is written, so it works while a run is active elsewhere.

use chrono::{DateTime, Utc};

use crate::domain::entities::{Ledger, ResourceGraph};
use crate::domain::services::resolve_args;
use crate::domain::value_objects::ArgsFingerprint;

/// Where one resource stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceState {
    /// Success recorded; `drift` is set when the manifest args no longer
    /// fingerprint to what was deployed
    Deployed {
        identifier: String,
        timestamp: DateTime<Utc>,
        drift: bool,
    },
    /// Failed recorded; the next run retries this resource
    Failed { error: String },
    /// Pending recorded: a run began this resource and never finalized it
    Interrupted,
    /// No record yet
    NotDeployed,
}

/// One manifest resource with its ledger state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRow {
    pub name: String,
    pub state: ResourceState,
}

/// Full status report: manifest rows plus ledger-only leftovers
#[derive(Debug, Clone, Default)]
pub struct StatusReport {
    /// One row per manifest resource, in declaration order
    pub rows: Vec<StatusRow>,
    /// Ledger records with no manifest resource, in name order
    pub orphans: Vec<String>,
}

impl StatusReport {
    pub fn deployed_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| matches!(row.state, ResourceState::Deployed { .. }))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| matches!(row.state, ResourceState::Failed { .. }))
            .count()
    }

    pub fn pending_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| {
                matches!(
                    row.state,
                    ResourceState::NotDeployed | ResourceState::Interrupted
                )
            })
            .count()
    }

    pub fn drifted_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| matches!(row.state, ResourceState::Deployed { drift: true, .. }))
            .count()
    }

    /// Every manifest resource has a Success record
    pub fn is_fully_deployed(&self) -> bool {
        self.deployed_count() == self.rows.len()
    }
}

/// Build the status report for a graph and ledger
pub fn status_report(graph: &ResourceGraph, ledger: &Ledger) -> StatusReport {
    let mut report = StatusReport::default();

    for spec in graph.iter() {
        let state = match ledger.get(spec.name()) {
            None => ResourceState::NotDeployed,
            Some(record) if record.is_pending() => ResourceState::Interrupted,
            Some(record) if record.is_failed() => ResourceState::Failed {
                error: record.error().unwrap_or("unknown error").to_string(),
            },
            Some(record) => {
                // Drift: the manifest args, resolved against today's
                // ledger, fingerprint differently than what deployed.
                // Unresolvable args leave the flag unset.
                let drift = match (record.args_fingerprint(), resolve_args(spec, ledger)) {
                    (Some(recorded), Ok(current_args)) => {
                        !recorded.matches(&ArgsFingerprint::from_args(&current_args))
                    }
                    _ => false,
                };
                ResourceState::Deployed {
                    identifier: record.identifier().unwrap_or("").to_string(),
                    timestamp: record.timestamp(),
                    drift,
                }
            }
        };
        report.rows.push(StatusRow {
            name: spec.name().to_string(),
            state,
        });
    }

    for name in ledger.names() {
        if !graph.contains(name) {
            report.orphans.push(name.to_string());
        }
    }

    report
}

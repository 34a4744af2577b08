//! Ledger entity - tracks deployment records across runs
//!
//! The ledger is what makes re-running a deployment idempotent: every
//! resource that reached Success is recorded with its runtime-assigned
//! identifier and skipped on later runs. It is a pure data structure;
//! locking and persistence are handled by a `LedgerRepository`.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::domain::value_objects::{ArgsFingerprint, ResourceName};

/// Current ledger format version
pub const LEDGER_VERSION: u32 = 1;

/// Outcome state of one resource's deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordStatus {
    /// Execution began but no outcome was recorded (crash or interrupt)
    Pending,
    /// Deployed; the identifier is final
    Success,
    /// Deploy call failed; the error is recorded
    Failed,
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Pending => "pending",
            RecordStatus::Success => "success",
            RecordStatus::Failed => "failed",
        }
    }
}

/// One resource's deployment record
///
/// Created as Pending when execution of the resource begins, finalized as
/// Success (with identifier and args fingerprint) or Failed (with error).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentRecord {
    name: ResourceName,
    status: RecordStatus,
    identifier: Option<String>,
    args_fingerprint: Option<ArgsFingerprint>,
    error: Option<String>,
    timestamp: DateTime<Utc>,
}

impl DeploymentRecord {
    /// Execution of this resource has begun
    pub fn pending(name: ResourceName) -> Self {
        Self {
            name,
            status: RecordStatus::Pending,
            identifier: None,
            args_fingerprint: None,
            error: None,
            timestamp: Utc::now(),
        }
    }

    /// The resource deployed and was assigned `identifier`
    pub fn success(
        name: ResourceName,
        identifier: impl Into<String>,
        args_fingerprint: ArgsFingerprint,
    ) -> Self {
        Self {
            name,
            status: RecordStatus::Success,
            identifier: Some(identifier.into()),
            args_fingerprint: Some(args_fingerprint),
            error: None,
            timestamp: Utc::now(),
        }
    }

    /// The deploy call failed
    pub fn failed(name: ResourceName, error: impl Into<String>) -> Self {
        Self {
            name,
            status: RecordStatus::Failed,
            identifier: None,
            args_fingerprint: None,
            error: Some(error.into()),
            timestamp: Utc::now(),
        }
    }

    /// Rebuild a record from persisted parts
    pub fn with_parts(
        name: ResourceName,
        status: RecordStatus,
        identifier: Option<String>,
        args_fingerprint: Option<ArgsFingerprint>,
        error: Option<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            name,
            status,
            identifier,
            args_fingerprint,
            error,
            timestamp,
        }
    }

    pub fn name(&self) -> &ResourceName {
        &self.name
    }

    pub fn status(&self) -> RecordStatus {
        self.status
    }

    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    pub fn args_fingerprint(&self) -> Option<&ArgsFingerprint> {
        self.args_fingerprint.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn is_success(&self) -> bool {
        self.status == RecordStatus::Success
    }

    pub fn is_pending(&self) -> bool {
        self.status == RecordStatus::Pending
    }

    pub fn is_failed(&self) -> bool {
        self.status == RecordStatus::Failed
    }
}

/// Persisted deployment state, keyed by resource name
///
/// Append-only for Success entries: once a resource is recorded as
/// Success, `record` refuses to replace it. Iteration order is name
/// order (BTreeMap), so persisted output is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    version: u32,
    records: BTreeMap<ResourceName, DeploymentRecord>,
}

impl Ledger {
    /// Create a new empty ledger
    pub fn new() -> Self {
        Self {
            version: LEDGER_VERSION,
            records: BTreeMap::new(),
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Upsert a record
    ///
    /// Returns false (and stores nothing) when the existing record is a
    /// Success: successes are final and never revisited.
    pub fn record(&mut self, record: DeploymentRecord) -> bool {
        if let Some(existing) = self.records.get(record.name()) {
            if existing.is_success() {
                return false;
            }
        }
        self.records.insert(record.name().clone(), record);
        true
    }

    pub fn get(&self, name: &ResourceName) -> Option<&DeploymentRecord> {
        self.records.get(name)
    }

    /// Has this resource reached Success?
    pub fn is_deployed(&self, name: &ResourceName) -> bool {
        self.get(name).is_some_and(DeploymentRecord::is_success)
    }

    /// Deployed identifier for a Success record
    pub fn identifier_of(&self, name: &ResourceName) -> Option<&str> {
        self.get(name)
            .filter(|record| record.is_success())
            .and_then(DeploymentRecord::identifier)
    }

    /// Records in name order
    pub fn iter(&self) -> impl Iterator<Item = &DeploymentRecord> {
        self.records.values()
    }

    /// Recorded names in name order
    pub fn names(&self) -> impl Iterator<Item = &ResourceName> {
        self.records.keys()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

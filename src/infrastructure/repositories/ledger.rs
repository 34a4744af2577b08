//! TOML Ledger Repository
//!
//! Persists the deployment ledger as a TOML file. A sidecar `.lock` file
//! taken with an exclusive flock serializes runs: the second caravan
//! touching the same ledger fails fast instead of queueing behind the
//! first.
//!
//! Saves go through a temp file in the ledger's directory followed by a
//! rename, so a crash mid-save never leaves a half-written ledger.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::domain::entities::{DeploymentRecord, Ledger, RecordStatus, LEDGER_VERSION};
use crate::domain::ports::{LedgerError, LedgerGuard, LedgerRepository, LedgerResult};
use crate::domain::value_objects::{ArgsFingerprint, ResourceName};

/// Ledger repository backed by a TOML file
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlLedgerRepository;

/// TOML representation of the ledger file
#[derive(Debug, Serialize, Deserialize)]
struct TomlLedger {
    version: u32,
    #[serde(default)]
    records: BTreeMap<String, TomlRecord>,
}

/// TOML representation of a single deployment record
#[derive(Debug, Serialize, Deserialize)]
struct TomlRecord {
    status: TomlStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    args_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum TomlStatus {
    Pending,
    Success,
    Failed,
}

impl TomlLedgerRepository {
    pub fn new() -> Self {
        Self
    }

    fn lock_path(path: &Path) -> PathBuf {
        path.with_extension("lock")
    }

    fn parent_dir(path: &Path) -> PathBuf {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn from_toml(path: &Path, toml_ledger: TomlLedger) -> LedgerResult<Ledger> {
        if toml_ledger.version != LEDGER_VERSION {
            return Err(LedgerError::VersionMismatch {
                found: toml_ledger.version,
                expected: LEDGER_VERSION,
            });
        }

        let mut ledger = Ledger::new();
        for (raw_name, record) in toml_ledger.records {
            let name = ResourceName::parse(&raw_name).map_err(|e| LedgerError::Corrupt {
                path: path.to_path_buf(),
                message: format!("invalid resource name '{}': {}", raw_name, e),
            })?;
            let status = match record.status {
                TomlStatus::Pending => RecordStatus::Pending,
                TomlStatus::Success => RecordStatus::Success,
                TomlStatus::Failed => RecordStatus::Failed,
            };
            ledger.record(DeploymentRecord::with_parts(
                name,
                status,
                record.identifier,
                record.args_hash.as_deref().map(ArgsFingerprint::new),
                record.error,
                record.timestamp,
            ));
        }
        Ok(ledger)
    }

    fn to_toml(ledger: &Ledger) -> TomlLedger {
        let records = ledger
            .iter()
            .map(|record| {
                let status = match record.status() {
                    RecordStatus::Pending => TomlStatus::Pending,
                    RecordStatus::Success => TomlStatus::Success,
                    RecordStatus::Failed => TomlStatus::Failed,
                };
                let toml_record = TomlRecord {
                    status,
                    identifier: record.identifier().map(str::to_string),
                    args_hash: record.args_fingerprint().map(|f| f.as_str().to_string()),
                    error: record.error().map(str::to_string),
                    timestamp: record.timestamp(),
                };
                (record.name().to_string(), toml_record)
            })
            .collect();

        TomlLedger {
            version: ledger.version(),
            records,
        }
    }
}

impl LedgerRepository for TomlLedgerRepository {
    fn lock(&self, path: &Path) -> LedgerResult<LedgerGuard> {
        fs::create_dir_all(Self::parent_dir(path))?;

        let lock_file = fs::File::create(Self::lock_path(path))?;
        match lock_file.try_lock_exclusive() {
            Ok(()) => Ok(LedgerGuard::file(lock_file)),
            Err(e) if e.kind() == fs2::lock_contended_error().kind() => {
                Err(LedgerError::Locked {
                    path: path.to_path_buf(),
                })
            }
            Err(e) => Err(LedgerError::Io(e)),
        }
    }

    fn load(&self, path: &Path) -> LedgerResult<Ledger> {
        if !path.exists() {
            return Ok(Ledger::new());
        }

        let content = fs::read_to_string(path)?;
        let toml_ledger: TomlLedger =
            toml::from_str(&content).map_err(|e| LedgerError::Corrupt {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Self::from_toml(path, toml_ledger)
    }

    fn save(&self, ledger: &Ledger, path: &Path) -> LedgerResult<()> {
        let parent = Self::parent_dir(path);
        fs::create_dir_all(&parent)?;

        let content = toml::to_string_pretty(&Self::to_toml(ledger))
            .map_err(|e| LedgerError::Io(std::io::Error::other(e)))?;

        let mut tmp = NamedTempFile::new_in(&parent)?;
        tmp.write_all(content.as_bytes())?;
        tmp.persist(path).map_err(|e| LedgerError::Io(e.error))?;
        Ok(())
    }
}

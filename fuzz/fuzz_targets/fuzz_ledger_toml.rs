#![no_main]

use libfuzzer_sys::fuzz_target;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Mirror of the ledger TOML shape for fuzzing (private in main crate)
#[derive(Deserialize)]
struct TomlLedger {
    #[allow(dead_code)]
    version: u32,
    #[serde(default)]
    #[allow(dead_code)]
    records: BTreeMap<String, TomlRecord>,
}

#[derive(Deserialize)]
struct TomlRecord {
    #[allow(dead_code)]
    status: TomlStatus,
    #[serde(default)]
    #[allow(dead_code)]
    identifier: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    args_hash: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    error: Option<String>,
    #[allow(dead_code)]
    timestamp: chrono::DateTime<chrono::Utc>,
}

#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(dead_code)]
enum TomlStatus {
    Pending,
    Success,
    Failed,
}

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Fuzz ledger TOML parsing - this should never panic
        let _ = toml::from_str::<TomlLedger>(content);
    }
});

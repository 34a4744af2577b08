//! Manifest Loading
//!
//! Parses `caravan.toml` into a [`Manifest`]: the resource graph plus the
//! deployer and output configuration that surround it. Unknown keys are
//! collected as non-fatal [`ManifestWarning`]s rather than rejected, so a
//! manifest written for a newer caravan still loads on an older one.

mod loader;
mod types;

pub use loader::{
    load_with_warnings, resolve_ledger_path, with_env_overrides, DEFAULT_LEDGER_FILE,
    DEFAULT_MANIFEST_FILE,
};
pub use types::{ColorMode, DeployerConfig, Manifest, ManifestWarning, OutputConfig};

//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `manifest/` - caravan.toml loading and validation
//! - `repositories/` - Repository implementations (Ledger)
//! - `deployers/` - Deployer implementations (external command)
//! - `events/` - Event sink implementations (JSON, console)

pub mod deployers;
pub mod events;
pub mod manifest;
pub mod repositories;

// Re-export for convenience
pub use deployers::CommandDeployer;
pub use events::{ConsoleEventSink, JsonEventSink};
pub use manifest::{ColorMode, Manifest, ManifestWarning};
pub use repositories::TomlLedgerRepository;

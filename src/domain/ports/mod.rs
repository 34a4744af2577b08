//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod deploy_events;
pub mod deployer;
pub mod ledger_repository;

pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink};
pub use deployer::{DeployError, DeployerResult, ResourceDeployer};
pub use ledger_repository::{LedgerError, LedgerGuard, LedgerRepository, LedgerResult};

//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `ResourceGraph` - Declared resources plus their dependency edges
//! - `Ledger` - Tracks deployment records across runs
//! - `DeploymentRecord` - One resource's deployment outcome

mod ledger;
mod resource;

pub use ledger::{DeploymentRecord, Ledger, RecordStatus, LEDGER_VERSION};
pub use resource::{ArgBinding, ResourceGraph, ResourceSpec};

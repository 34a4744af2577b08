//! Application Layer
//!
//! Use cases that orchestrate the deployment flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain orchestration rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - Orchestrates a run (lock, load, plan, execute, record)
//! - `status_report` - Compares a manifest against a ledger

pub mod deploy;
pub mod status;

pub use deploy::{DeployOptions, DeployResult, DeployUseCase, DeployedResource, FailedResource};
pub use status::{status_report, ResourceState, StatusReport, StatusRow};

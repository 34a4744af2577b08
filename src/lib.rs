//! Caravan - ordered multi-resource deployment
//!
//! Caravan reads a TOML manifest describing a set of resources and the
//! identifiers they pass to one another, deploys them in dependency
//! order through an external deployer command, and records every
//! outcome in a ledger so that reruns skip what already succeeded and
//! resume after partial failures.
//!
//! ## Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - `domain` - entities, ordering and resolution services, and the
//!   ports the outside world plugs into
//! - `application` - use cases that orchestrate one run
//! - `infrastructure` - TOML manifest loading, the ledger repository,
//!   the subprocess deployer, and event sinks
//! - `ui` - terminal rendering (themes, widgets, views)
//! - `commands` - one module per CLI verb

pub mod application;
pub mod cli;
pub mod commands;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;

// Re-exports for convenience
pub use application::{status_report, DeployOptions, DeployResult, DeployUseCase, StatusReport};
pub use domain::entities::{ArgBinding, Ledger, ResourceGraph, ResourceSpec};
pub use domain::services::{DeploymentPlan, Planner};
pub use domain::value_objects::ResourceName;
pub use error::{CaravanError, CaravanResult};
pub use infrastructure::{CommandDeployer, Manifest, TomlLedgerRepository};

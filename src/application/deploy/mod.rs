//! Deploy Module
//!
//! Orchestrates a deployment run for caravan.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`DeployOptions`)
//! - `result` - Result types (`DeployResult`)
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use caravan::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(ledger_repo, deployer);
//! let result = use_case.execute(&graph, &DeployOptions::new(manifest, ledger))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::DeployOptions;
pub use result::{DeployResult, DeployedResource, FailedResource};
pub use use_case::DeployUseCase;

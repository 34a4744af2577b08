//! Domain Services
//!
//! Pure orchestration logic that operates on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod planner;
mod resolver;

pub use planner::{DeploymentPlan, Planner};
pub use resolver::resolve_args;

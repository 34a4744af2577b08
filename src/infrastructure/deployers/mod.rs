//! Deployer Implementations
//!
//! Concrete implementations of the ResourceDeployer port.

mod command;

pub use command::CommandDeployer;

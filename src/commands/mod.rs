//! Command Implementations
//!
//! Each submodule implements one CLI verb. Commands wire the manifest
//! loader, ledger repository, and deployer together, then hand rendering
//! to the ui layer.

mod deploy;
mod init;
mod plan;
mod status;

pub use deploy::cmd_deploy;
pub use init::cmd_init;
pub use plan::cmd_plan;
pub use status::cmd_status;

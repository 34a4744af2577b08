//! ResourceDeployer port - abstraction over the deployment transport
//!
//! Wraps whatever actually provisions a resource: compilation, network
//! submission, confirmation waiting. The orchestrator only needs one
//! call that either returns the runtime-assigned identifier or fails.
//! A deploy call is atomic from this side; there is no cancellation
//! mid-resource.

use thiserror::Error;

use crate::domain::value_objects::ResourceName;

/// Result type for deployer operations
pub type DeployerResult<T> = Result<T, DeployError>;

/// Deployment transport errors
#[derive(Debug, Error)]
pub enum DeployError {
    /// The transport could not be started at all
    #[error("failed to launch deployer: {0}")]
    Spawn(String),

    /// The transport ran and reported failure
    #[error("deployer exited with {}{}", format_code(.code), format_stderr(.stderr))]
    Failed { code: Option<i32>, stderr: String },

    /// The transport reported success but returned no identifier
    #[error("deployer returned no identifier on stdout")]
    MissingIdentifier,
}

fn format_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => String::from("no status (killed by signal)"),
    }
}

fn format_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {trimmed}")
    }
}

/// Abstract deployment capability
///
/// Injected into the executor; implemented by infrastructure (the
/// external-command adapter) and by test doubles.
pub trait ResourceDeployer {
    /// Deploy one resource with its fully resolved argument vector,
    /// returning the runtime-assigned identifier
    fn deploy(&self, name: &ResourceName, args: &[String]) -> DeployerResult<String>;

    /// Human-readable description of the transport, for run headers
    fn describe(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_display_includes_code_and_stderr() {
        let err = DeployError::Failed {
            code: Some(1),
            stderr: "revert: bad owner\n".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "deployer exited with status 1: revert: bad owner"
        );
    }

    #[test]
    fn failed_display_without_stderr() {
        let err = DeployError::Failed {
            code: Some(2),
            stderr: String::new(),
        };
        assert_eq!(err.to_string(), "deployer exited with status 2");
    }

    #[test]
    fn failed_display_when_signalled() {
        let err = DeployError::Failed {
            code: None,
            stderr: String::new(),
        };
        assert_eq!(
            err.to_string(),
            "deployer exited with no status (killed by signal)"
        );
    }

    #[test]
    fn spawn_display() {
        let err = DeployError::Spawn("No such file or directory".to_string());
        assert!(err.to_string().contains("failed to launch deployer"));
    }
}

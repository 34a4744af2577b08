//! Command Deployer
//!
//! Deploys resources by invoking an external command, the one named in the
//! manifest's `[deployer]` section or in `CARAVAN_DEPLOYER`.
//!
//! ## Protocol
//!
//! For each resource the command is invoked as
//!
//! ```text
//! <command> <base args..> <resource name> <resolved args..>
//! ```
//!
//! with the manifest's directory as working directory and stdin closed.
//! Exit code 0 means the resource deployed; the last non-empty line of
//! stdout is taken as its runtime identifier. Any other exit code fails
//! the resource and surfaces the command's stderr.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::domain::ports::{DeployError, DeployerResult, ResourceDeployer};
use crate::domain::value_objects::ResourceName;

/// Deployer that shells out to an external command per resource
#[derive(Debug, Clone)]
pub struct CommandDeployer {
    program: String,
    base_args: Vec<String>,
    working_dir: PathBuf,
}

impl CommandDeployer {
    pub fn new(
        program: impl Into<String>,
        base_args: Vec<String>,
        working_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            program: program.into(),
            base_args,
            working_dir: working_dir.into(),
        }
    }

    fn identifier_from_stdout(stdout: &str) -> Option<String> {
        stdout
            .lines()
            .rev()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(str::to_string)
    }
}

impl ResourceDeployer for CommandDeployer {
    fn deploy(&self, name: &ResourceName, args: &[String]) -> DeployerResult<String> {
        let output = Command::new(&self.program)
            .args(&self.base_args)
            .arg(name.as_str())
            .args(args)
            .current_dir(&self.working_dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| DeployError::Spawn(format!("{}: {}", self.program, e)))?;

        if !output.status.success() {
            return Err(DeployError::Failed {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Self::identifier_from_stdout(&stdout).ok_or(DeployError::MissingIdentifier)
    }

    fn describe(&self) -> String {
        if self.base_args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.base_args.join(" "))
        }
    }
}

//! Test environment for isolated caravan testing.
//!
//! Provides `TestEnv` - a temp project directory plus helpers to write
//! manifests and deployer scripts and to run the caravan binary there.

use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running a caravan CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated project directory.
///
/// Commands run with the project as the working directory, with color
/// disabled and `TERM=dumb` so icons render in their ASCII form, and
/// with caravan's own environment overrides cleared.
pub struct TestEnv {
    pub root: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Path relative to the project root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Write the manifest the commands will load
    pub fn write_manifest(&self, content: &str) {
        self.write_file("caravan.toml", content);
    }

    pub fn write_file(&self, relative: &str, content: &str) {
        let full = self.path(relative);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full, content).expect("Failed to write file");
    }

    /// Write a deployer script and mark it executable
    pub fn write_deployer(&self, relative: &str, script: &str) {
        self.write_file(relative, script);
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(
                self.path(relative),
                std::fs::Permissions::from_mode(0o755),
            )
            .expect("Failed to mark script executable");
        }
    }

    pub fn read_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Read the persisted ledger
    pub fn ledger(&self) -> String {
        self.read_file("caravan.ledger")
    }

    /// Receipt lines the fixture deployer appended, one per deploy call
    pub fn receipts(&self) -> Vec<String> {
        if !self.path("receipts.txt").exists() {
            return Vec::new();
        }
        self.read_file("receipts.txt")
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Run caravan in the project directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run caravan with extra environment variables
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_caravan"));
        cmd.current_dir(self.root.path())
            .args(args)
            .env("CARAVAN_NO_COLOR", "1")
            .env("TERM", "dumb")
            .env_remove("CARAVAN_DEPLOYER")
            .env_remove("CARAVAN_LEDGER");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute caravan");
        Self::output_to_result(output)
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

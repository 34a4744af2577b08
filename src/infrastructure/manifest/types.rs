use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::ResourceGraph;

/// Non-fatal manifest warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// How the deployer process is invoked.
///
/// The command is optional at parse time so that read-only commands like
/// `caravan plan` work on a manifest that never names one. Deployment
/// resolves it through [`Manifest::deployer_command`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeployerConfig {
    pub command: Option<String>,
    pub args: Vec<String>,
}

/// Color preference from the manifest `[output]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Output preferences from the manifest `[output]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub color: ColorMode,
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            unicode: true,
        }
    }
}

/// A parsed `caravan.toml`: the declared resource graph plus the deployer
/// invocation and output preferences that apply to every command.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    deployer: DeployerConfig,
    output: OutputConfig,
    graph: ResourceGraph,
}

impl Manifest {
    pub(super) fn new(
        path: PathBuf,
        deployer: DeployerConfig,
        output: OutputConfig,
        graph: ResourceGraph,
    ) -> Self {
        Self {
            path,
            deployer,
            output,
            graph,
        }
    }

    /// Path this manifest was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory containing the manifest. The deployer runs with this as its
    /// working directory so relative paths in deployer scripts resolve
    /// against the manifest, not against wherever caravan was invoked.
    pub fn dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
            Some(parent) => parent.to_path_buf(),
            None => PathBuf::from("."),
        }
    }

    /// Declared resources in declaration order.
    pub fn graph(&self) -> &ResourceGraph {
        &self.graph
    }

    pub fn output(&self) -> OutputConfig {
        self.output
    }

    pub fn deployer(&self) -> &DeployerConfig {
        &self.deployer
    }

    pub(super) fn deployer_mut(&mut self) -> &mut DeployerConfig {
        &mut self.deployer
    }

    /// The deployer invocation, or `None` when neither the manifest nor the
    /// environment names a command.
    pub fn deployer_command(&self) -> Option<(&str, &[String])> {
        self.deployer
            .command
            .as_deref()
            .map(|command| (command, self.deployer.args.as_slice()))
    }
}

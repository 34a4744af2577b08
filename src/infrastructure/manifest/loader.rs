//! Manifest loading and environment overrides

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::entities::{ArgBinding, ResourceGraph, ResourceSpec};
use crate::domain::value_objects::ResourceName;
use crate::error::{CaravanError, CaravanResult};

use super::types::{ColorMode, DeployerConfig, Manifest, ManifestWarning, OutputConfig};

/// File name searched for in the working directory when `--manifest` is not
/// given.
pub const DEFAULT_MANIFEST_FILE: &str = "caravan.toml";

/// Ledger file name, placed next to the manifest by default.
pub const DEFAULT_LEDGER_FILE: &str = "caravan.ledger";

const MANIFEST_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
struct TomlManifest {
    #[serde(default = "default_version")]
    version: u32,
    #[serde(default)]
    deployer: TomlDeployer,
    #[serde(default)]
    output: TomlOutput,
    #[serde(default)]
    resource: Vec<TomlResource>,
}

#[derive(Debug, Default, Deserialize)]
struct TomlDeployer {
    command: Option<String>,
    #[serde(default)]
    args: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct TomlOutput {
    #[serde(default)]
    color: ColorMode,
    #[serde(default = "default_unicode")]
    unicode: bool,
}

impl Default for TomlOutput {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: default_unicode(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TomlResource {
    name: String,
    #[serde(default)]
    args: Vec<TomlArg>,
}

/// A constructor argument in the manifest: either a literal string or a
/// `{ ref = "name" }` table naming an earlier resource whose identifier is
/// substituted at deploy time.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TomlArg {
    Reference { r#ref: String },
    Literal(String),
}

fn default_version() -> u32 {
    MANIFEST_VERSION
}

fn default_unicode() -> bool {
    true
}

/// Load a manifest and collect non-fatal warnings (e.g. unknown keys).
///
/// Environment overrides are not applied here; see [`with_env_overrides`].
pub fn load_with_warnings(path: &Path) -> CaravanResult<(Manifest, Vec<ManifestWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            CaravanError::ManifestNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CaravanError::Io(e)
        }
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let toml_manifest: TomlManifest = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CaravanError::Manifest {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if toml_manifest.version != MANIFEST_VERSION {
        return Err(CaravanError::Manifest {
            path: path.to_path_buf(),
            message: format!(
                "unsupported manifest version {} (expected {})",
                toml_manifest.version, MANIFEST_VERSION
            ),
        });
    }

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ManifestWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    let graph = build_graph(path, toml_manifest.resource)?;

    let deployer = DeployerConfig {
        command: toml_manifest.deployer.command,
        args: toml_manifest.deployer.args,
    };
    let output = OutputConfig {
        color: toml_manifest.output.color,
        unicode: toml_manifest.output.unicode,
    };

    Ok((
        Manifest::new(path.to_path_buf(), deployer, output, graph),
        warnings,
    ))
}

fn build_graph(path: &Path, resources: Vec<TomlResource>) -> CaravanResult<ResourceGraph> {
    let mut specs = Vec::with_capacity(resources.len());
    for resource in resources {
        let name = parse_name(path, &resource.name)?;
        let mut args = Vec::with_capacity(resource.args.len());
        for arg in resource.args {
            args.push(match arg {
                TomlArg::Literal(value) => ArgBinding::Literal(value),
                TomlArg::Reference { r#ref } => ArgBinding::Reference(parse_name(path, &r#ref)?),
            });
        }
        specs.push(ResourceSpec::new(name, args));
    }
    ResourceGraph::from_specs(specs)
}

fn parse_name(path: &Path, raw: &str) -> CaravanResult<ResourceName> {
    ResourceName::parse(raw).map_err(|e| CaravanError::Manifest {
        path: path.to_path_buf(),
        message: format!("invalid resource name '{}': {}", raw, e),
    })
}

/// Apply environment variable overrides (CARAVAN_* prefix).
///
/// `CARAVAN_DEPLOYER` replaces the whole deployer invocation: the first
/// whitespace-separated token becomes the command and the rest become its
/// base arguments.
pub fn with_env_overrides(manifest: Manifest) -> Manifest {
    with_env_overrides_impl(manifest, |key| std::env::var(key).ok())
}

fn with_env_overrides_impl(
    mut manifest: Manifest,
    get_env: impl Fn(&str) -> Option<String>,
) -> Manifest {
    if let Some(raw) = get_env("CARAVAN_DEPLOYER") {
        let mut tokens = raw.split_whitespace().map(str::to_string);
        if let Some(command) = tokens.next() {
            let deployer = manifest.deployer_mut();
            deployer.command = Some(command);
            deployer.args = tokens.collect();
        }
    }
    manifest
}

/// Where the ledger lives for a given manifest.
///
/// Priority: `--ledger` flag, then `CARAVAN_LEDGER`, then `caravan.ledger`
/// next to the manifest.
pub fn resolve_ledger_path(manifest_path: &Path, flag: Option<&Path>) -> PathBuf {
    resolve_ledger_path_impl(manifest_path, flag, |key| std::env::var(key).ok())
}

fn resolve_ledger_path_impl(
    manifest_path: &Path,
    flag: Option<&Path>,
    get_env: impl Fn(&str) -> Option<String>,
) -> PathBuf {
    if let Some(flag) = flag {
        return flag.to_path_buf();
    }

    if let Some(value) = get_env("CARAVAN_LEDGER") {
        if !value.trim().is_empty() {
            return PathBuf::from(value);
        }
    }

    match manifest_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(DEFAULT_LEDGER_FILE),
        _ => PathBuf::from(DEFAULT_LEDGER_FILE),
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "version", "deployer", "command", "args", "output", "color", "unicode", "resource",
        "name", "ref",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

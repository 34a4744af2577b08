//! Init command - create a starter manifest and deploy script
//!
//! Writes a two-resource caravan.toml plus a demo deploy.sh so that
//! `caravan deploy` works immediately after init.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::cli::ColorWhen;
use crate::ui::primitives::icon::Icon;
use crate::ui::terminal::detect_capabilities;

pub fn cmd_init(dir: &Path, force: bool, json: bool, color: Option<ColorWhen>) -> Result<()> {
    let caps = detect_capabilities();
    let supports_color = match color {
        Some(ColorWhen::Always) => true,
        Some(ColorWhen::Never) => false,
        Some(ColorWhen::Auto) | None => caps.supports_color && !caps.is_ci,
    };
    let supports_unicode = caps.supports_unicode;

    let manifest_file = dir.join("caravan.toml");
    let script_file = dir.join("deploy.sh");

    if manifest_file.exists() && !force {
        bail!(
            "caravan.toml already exists at {}. Use --force to overwrite.",
            manifest_file.display()
        );
    }

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))?;

    fs::write(&manifest_file, MANIFEST_TEMPLATE).context("Failed to create caravan.toml")?;

    if !script_file.exists() || force {
        fs::write(&script_file, SCRIPT_TEMPLATE).context("Failed to create deploy.sh")?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&script_file, fs::Permissions::from_mode(0o755))
                .context("Failed to mark deploy.sh executable")?;
        }
    }

    if json {
        println!(
            "{}",
            serde_json::json!({
                "dir": dir.display().to_string(),
                "created": ["caravan.toml", "deploy.sh"],
            })
        );
        return Ok(());
    }

    println!(
        "{} Initialized {}",
        Icon::Init.colored(supports_color, supports_unicode),
        dir.display()
    );
    println!();
    println!("Created:");
    println!("  - {}", manifest_file.display());
    println!("  - {}", script_file.display());
    println!();
    println!(
        "{} Next: edit caravan.toml, then run `caravan deploy`",
        Icon::Arrow.colored(supports_color, supports_unicode)
    );

    Ok(())
}

const MANIFEST_TEMPLATE: &str = r#"# Caravan Manifest
#
# Resources deploy top to bottom. An arg of the form { ref = "name" }
# is replaced at deploy time with the identifier the named resource
# reported when it deployed.

version = 1

[deployer]
command = "./deploy.sh"

[output]
# color = "auto"
# unicode = true

[[resource]]
name = "network"
args = ["10.0.0.0/16"]

[[resource]]
name = "server"
args = [{ ref = "network" }, "small"]
"#;

const SCRIPT_TEMPLATE: &str = r#"#!/bin/sh
# Demo deployer. A real one receives the resource name followed by its
# resolved args, creates the resource, and prints its identifier as the
# last line of stdout. A non-zero exit marks the resource failed.
set -eu

name="$1"
shift

echo "deploying ${name} $*" >&2
echo "${name}-$(date +%s)"
"#;

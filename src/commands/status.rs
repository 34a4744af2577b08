//! Status command - show the recorded state of every resource
//!
//! Reads the ledger without taking the lock, so status can be checked
//! while a deploy runs in another terminal.

use std::path::Path;

use anyhow::Result;

use crate::application::{status_report, ResourceState};
use crate::cli::ColorWhen;
use crate::domain::ports::LedgerRepository;
use crate::infrastructure::manifest;
use crate::infrastructure::repositories::TomlLedgerRepository;
use crate::ui::blocks::CommandHeader;
use crate::ui::context::UiContext;
use crate::ui::output::print_manifest_warnings;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::status::render_status;

pub fn cmd_status(
    manifest_path: &Path,
    ledger_flag: Option<&Path>,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<()> {
    let (manifest, warnings) = manifest::load_with_warnings(manifest_path)?;
    let manifest = manifest::with_env_overrides(manifest);

    let ui = UiContext::new(json, verbose, color, manifest.output());
    print_manifest_warnings(&warnings, &ui);

    let ledger_path = manifest::resolve_ledger_path(manifest.path(), ledger_flag);
    let ledger = TomlLedgerRepository::new().load(&ledger_path)?;

    let report = status_report(manifest.graph(), &ledger);

    if ui.json {
        let resources: Vec<serde_json::Value> = report
            .rows
            .iter()
            .map(|row| match &row.state {
                ResourceState::Deployed {
                    identifier,
                    timestamp,
                    drift,
                } => serde_json::json!({
                    "name": row.name,
                    "state": "deployed",
                    "identifier": identifier,
                    "timestamp": timestamp.to_rfc3339(),
                    "drift": drift,
                }),
                ResourceState::Failed { error } => serde_json::json!({
                    "name": row.name,
                    "state": "failed",
                    "error": error,
                }),
                ResourceState::Interrupted => serde_json::json!({
                    "name": row.name,
                    "state": "interrupted",
                }),
                ResourceState::NotDeployed => serde_json::json!({
                    "name": row.name,
                    "state": "not-deployed",
                }),
            })
            .collect();

        println!(
            "{}",
            serde_json::json!({
                "manifest": manifest.path().display().to_string(),
                "ledger": ledger_path.display().to_string(),
                "resources": resources,
                "orphans": report.orphans,
                "deployed": report.deployed_count(),
                "failed": report.failed_count(),
                "pending": report.pending_count(),
                "drifted": report.drifted_count(),
            })
        );
        return Ok(());
    }

    let mut header = CommandHeader::new(Icon::Status, "Caravan Status");
    header.add("Manifest", manifest.path().display().to_string());
    header.add("Ledger", ledger_path.display().to_string());
    print!("{}", header.render(ui.color, ui.unicode));
    println!();

    print!("{}", render_status(&report, ui.color, ui.unicode));

    Ok(())
}

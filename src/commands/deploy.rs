//! Deploy command - deploy pending resources in dependency order
//!
//! Loads the manifest, locks the ledger, and walks the plan. Rendering
//! goes through the ui layer; in --json mode every event becomes one
//! NDJSON line on stdout instead.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{bail, Result};
use is_terminal::IsTerminal;

use crate::application::deploy::{DeployOptions, DeployUseCase};
use crate::cli::ColorWhen;
use crate::domain::ports::{DeployEventSink, ResourceDeployer};
use crate::error::CaravanError;
use crate::infrastructure::deployers::CommandDeployer;
use crate::infrastructure::events::{ConsoleEventSink, JsonEventSink};
use crate::infrastructure::manifest;
use crate::infrastructure::repositories::TomlLedgerRepository;
use crate::ui::context::UiContext;
use crate::ui::output::print_manifest_warnings;
use crate::ui::views::deploy::{render_deploy_summary, render_run_header};

pub fn cmd_deploy(
    manifest_path: &Path,
    ledger_flag: Option<&Path>,
    dry_run: bool,
    yes: bool,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<()> {
    let (manifest, warnings) = manifest::load_with_warnings(manifest_path)?;
    let manifest = manifest::with_env_overrides(manifest);

    let ui = UiContext::new(json, verbose, color, manifest.output());
    print_manifest_warnings(&warnings, &ui);

    let ledger_path = manifest::resolve_ledger_path(manifest.path(), ledger_flag);

    let Some((program, base_args)) = manifest.deployer_command() else {
        bail!("manifest has no deployer command; add [deployer] command or set CARAVAN_DEPLOYER");
    };
    let deployer = CommandDeployer::new(program, base_args.to_vec(), manifest.dir());
    let deployer_label = deployer.describe();

    // Ask before a real run unless the answer is already known
    if !dry_run && !yes && !json && std::io::stdin().is_terminal() {
        use dialoguer::Confirm;
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Deploy {} resources with `{}`?",
                manifest.graph().len(),
                deployer_label
            ))
            .default(true)
            .interact()?;

        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    let cancel = Arc::new(AtomicBool::new(false));
    let handler_flag = cancel.clone();
    ctrlc::set_handler(move || {
        handler_flag.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");

    if !ui.json {
        let mut modes = Vec::new();
        if dry_run {
            modes.push("Dry run".to_string());
        }
        print!(
            "{}",
            render_run_header(
                manifest.path(),
                &ledger_path,
                Some(&deployer_label),
                &modes,
                ui.color,
                ui.unicode,
            )
        );
        println!();
    }

    let sink: Arc<dyn DeployEventSink> = if ui.json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::stdout(ui.color, ui.unicode, verbose))
    };

    let use_case = DeployUseCase::new(TomlLedgerRepository::new(), deployer);
    let options = DeployOptions::new(manifest.path(), &ledger_path)
        .with_dry_run(dry_run)
        .with_cancel(cancel);

    let result = use_case.execute_with_events(manifest.graph(), &options, sink)?;

    if !ui.json {
        println!();
        print!("{}", render_deploy_summary(&result, ui.color, ui.unicode));
    }

    if let Some(failed) = result.failed {
        return Err(CaravanError::DeploymentFailed {
            resource: failed.name,
            cause: failed.error,
        }
        .into());
    }

    Ok(())
}

//! Plan command - print the deployment order without deploying
//!
//! Shares the deploy command's ordering logic, so a plan that prints is
//! a plan that deploys. Cycles and references to undeclared resources
//! fail here with the same errors a deploy would raise.

use std::path::Path;

use anyhow::Result;

use crate::cli::ColorWhen;
use crate::domain::entities::ArgBinding;
use crate::domain::ports::LedgerRepository;
use crate::domain::services::Planner;
use crate::infrastructure::manifest;
use crate::infrastructure::repositories::TomlLedgerRepository;
use crate::ui::blocks::CommandHeader;
use crate::ui::context::UiContext;
use crate::ui::output::print_manifest_warnings;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::plan::render_plan;

pub fn cmd_plan(
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

    let plan = Planner::plan(manifest.graph())?;
    // Read-only, no lock taken; plan works while a run is active elsewhere
    let ledger = TomlLedgerRepository::new().load(&ledger_path)?;

    if ui.json {
        let resources: Vec<serde_json::Value> = plan
            .iter()
            .map(|spec| {
                let args: Vec<serde_json::Value> = spec
                    .args()
                    .iter()
                    .map(|arg| match arg {
                        ArgBinding::Literal(value) => serde_json::json!(value),
                        ArgBinding::Reference(name) => {
                            serde_json::json!({ "ref": name.as_str() })
                        }
                    })
                    .collect();
                serde_json::json!({
                    "name": spec.name().as_str(),
                    "deployed": ledger.is_deployed(spec.name()),
                    "identifier": ledger.identifier_of(spec.name()),
                    "args": args,
                })
            })
            .collect();
        let pending = plan
            .iter()
            .filter(|spec| !ledger.is_deployed(spec.name()))
            .count();

        println!(
            "{}",
            serde_json::json!({
                "manifest": manifest.path().display().to_string(),
                "ledger": ledger_path.display().to_string(),
                "resources": resources,
                "pending": pending,
                "deployed": plan.len() - pending,
            })
        );
        return Ok(());
    }

    let mut header = CommandHeader::new(Icon::Plan, "Caravan Plan");
    header.add("Manifest", manifest.path().display().to_string());
    header.add("Ledger", ledger_path.display().to_string());
    print!("{}", header.render(ui.color, ui.unicode));
    println!();

    print!("{}", render_plan(&plan, &ledger, ui.color, ui.unicode));

    Ok(())
}

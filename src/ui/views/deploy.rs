use std::path::Path;

use crate::application::deploy::DeployResult;
use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;

pub fn render_run_header(
    manifest: &Path,
    ledger: &Path,
    deployer: Option<&str>,
    modes: &[String],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Deploy, "Caravan Deploy");
    header.add("Manifest", manifest.display().to_string());
    header.add("Ledger", ledger.display().to_string());
    if let Some(deployer) = deployer {
        header.add("Deployer", deployer);
    }
    for mode in modes {
        header.add("Mode", mode);
    }

    header.render(supports_color, supports_unicode)
}

pub fn render_deploy_summary(
    result: &DeployResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let summary = if result.dry_run {
        let mut summary = ResultSummary::success("Dry Run Complete");
        summary.add_stat("resources would deploy", result.deployed.len());
        summary.add_stat("already deployed", result.skipped.len());
        summary
    } else if let Some(failed) = &result.failed {
        let mut summary = ResultSummary::partial("Deploy Halted");
        summary.add_stat("resources deployed", result.deployed.len());
        summary.add_stat("already deployed", result.skipped.len());
        // remaining() counts the failed resource too; it was attempted.
        summary.add_stat("not attempted", result.remaining().saturating_sub(1));
        summary.add_warning(format!("{} failed: {}", failed.name, failed.error));
        summary.with_next_step("Fix the failure, then rerun `caravan deploy` to resume");
        summary
    } else if result.interrupted {
        let mut summary = ResultSummary::partial("Deploy Interrupted");
        summary.add_stat("resources deployed", result.deployed.len());
        summary.add_stat("already deployed", result.skipped.len());
        summary.add_stat("not attempted", result.remaining());
        summary.with_next_step("Rerun `caravan deploy` to resume");
        summary
    } else {
        let mut summary = ResultSummary::success("Deploy Complete");
        summary.add_stat("resources deployed", result.deployed.len());
        summary.add_stat("already deployed", result.skipped.len());
        summary
    };

    summary.render(supports_color, supports_unicode)
}

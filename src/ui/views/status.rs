use unicode_width::UnicodeWidthStr;

use crate::application::status::{ResourceState, StatusReport};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Render the status report: one line per manifest resource, then any
/// ledger records the manifest no longer declares.
pub fn render_status(
    report: &StatusReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if report.rows.is_empty() && report.orphans.is_empty() {
        return "No resources declared.\n".to_string();
    }

    let name_width = report
        .rows
        .iter()
        .map(|row| row.name.width())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for row in &report.rows {
        let icon = match &row.state {
            ResourceState::Deployed { .. } => Icon::Success,
            ResourceState::Failed { .. } => Icon::Error,
            ResourceState::Interrupted => Icon::Progress,
            ResourceState::NotDeployed => Icon::Pending,
        };

        let detail = match &row.state {
            ResourceState::Deployed {
                identifier,
                timestamp,
                drift,
            } => {
                let mut detail = format!(
                    "{}  deployed {}",
                    identifier,
                    timestamp.format("%Y-%m-%d %H:%M")
                );
                if *drift {
                    detail.push_str(&format!(
                        "  {} args changed since deploy",
                        Icon::Warning.colored(supports_color, supports_unicode)
                    ));
                }
                detail
            }
            ResourceState::Failed { error } => {
                ColoredText::error(format!("failed: {}", error)).render(supports_color)
            }
            ResourceState::Interrupted => {
                ColoredText::warning("interrupted mid-deploy").render(supports_color)
            }
            ResourceState::NotDeployed => ColoredText::dim("not deployed").render(supports_color),
        };

        let pad = " ".repeat(name_width - row.name.width());
        out.push_str(&format!(
            "{} {}{}  {}\n",
            icon.colored(supports_color, supports_unicode),
            row.name,
            pad,
            detail
        ));
    }

    if !report.orphans.is_empty() {
        out.push('\n');
        out.push_str(&ColoredText::dim("In ledger but not in manifest:").render(supports_color));
        out.push('\n');
        for orphan in &report.orphans {
            out.push_str(&format!("  - {}\n", orphan));
        }
    }

    out.push('\n');
    let mut footer = format!("{}/{} deployed", report.deployed_count(), report.rows.len());
    if report.failed_count() > 0 {
        footer.push_str(&format!(", {} failed", report.failed_count()));
    }
    if report.drifted_count() > 0 {
        footer.push_str(&format!(", {} drifted", report.drifted_count()));
    }
    out.push_str(&footer);
    out.push('\n');
    out
}

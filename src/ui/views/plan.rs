use crate::domain::entities::{ArgBinding, Ledger};
use crate::domain::services::DeploymentPlan;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Render the ordered plan: one numbered line per resource, marking the
/// ones the ledger already holds a success for.
pub fn render_plan(
    plan: &DeploymentPlan,
    ledger: &Ledger,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if plan.is_empty() {
        return "No resources declared.\n".to_string();
    }

    let num_width = plan.len().to_string().len();
    let mut out = String::new();
    let mut to_deploy = 0usize;
    let mut already = 0usize;

    for (index, spec) in plan.iter().enumerate() {
        let deployed = ledger.is_deployed(spec.name());
        let icon = if deployed { Icon::Success } else { Icon::Pending };

        let mut line = format!(
            "{:>width$}. {} {}",
            index + 1,
            icon.colored(supports_color, supports_unicode),
            spec.name(),
            width = num_width
        );

        if deployed {
            already += 1;
            let detail = match ledger.identifier_of(spec.name()) {
                Some(identifier) => format!("(deployed: {})", identifier),
                None => "(deployed)".to_string(),
            };
            line.push(' ');
            line.push_str(&ColoredText::dim(detail).render(supports_color));
        } else {
            to_deploy += 1;
            for arg in spec.args() {
                line.push(' ');
                match arg {
                    ArgBinding::Literal(value) => line.push_str(value),
                    ArgBinding::Reference(name) => {
                        line.push_str(
                            &ColoredText::info(format!("@{}", name)).render(supports_color),
                        );
                    }
                }
            }
        }

        out.push_str(&line);
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&format!("{} to deploy, {} already deployed\n", to_deploy, already));
    out
}

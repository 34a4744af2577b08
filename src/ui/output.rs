use crate::infrastructure::manifest::ManifestWarning;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

/// Print unknown-key warnings collected while loading the manifest.
///
/// Warnings go to stderr so NDJSON output on stdout stays parseable.
pub fn print_manifest_warnings(warnings: &[ManifestWarning], ui: &UiContext) {
    if ui.json {
        return;
    }

    let icon = Icon::Warning.colored(ui.color, ui.unicode);
    for w in warnings {
        match w.line {
            Some(line) => eprintln!(
                "{} Unknown manifest key '{}' in {}:{}",
                icon,
                w.key,
                w.file.display(),
                line
            ),
            None => eprintln!(
                "{} Unknown manifest key '{}' in {}",
                icon,
                w.key,
                w.file.display()
            ),
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?", suggestion);
        }
    }
}

use crate::cli::ColorWhen;
use crate::infrastructure::manifest::{ColorMode, OutputConfig};
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// Resolved output settings for one command invocation.
///
/// Combines CLI flags, the manifest `[output]` section, and detected
/// terminal capabilities. Flags win over the manifest, the manifest wins
/// over detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, cli_color: Option<ColorWhen>, output: OutputConfig) -> Self {
        let caps = detect_capabilities();
        Self::from_caps(json, verbose, cli_color, output, caps)
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        output: OutputConfig,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = output.unicode && caps.supports_unicode;

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self {
            json,
            verbose,
            caps,
            color,
            unicode,
        }
    }
}

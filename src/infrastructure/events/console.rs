//! Console Event Sink
//!
//! Prints one line per resource as a deploy run progresses. Run framing
//! (header and summary) is rendered by the command layer; this sink only
//! owns the per-resource lines in between.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{DeployEvent, DeployEventSink};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Event sink that prints human-readable progress lines
pub struct ConsoleEventSink {
    color: bool,
    unicode: bool,
    verbose: u8,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    /// Create a console sink writing to stdout
    pub fn stdout(color: bool, unicode: bool, verbose: u8) -> Self {
        Self {
            color,
            unicode,
            verbose,
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a console sink writing to a custom writer (for testing)
    #[allow(dead_code)]
    pub fn with_writer<W: Write + Send + 'static>(
        writer: W,
        color: bool,
        unicode: bool,
        verbose: u8,
    ) -> Self {
        Self {
            color,
            unicode,
            verbose,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_line(&self, line: String) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }

    fn icon(&self, icon: Icon) -> String {
        icon.colored(self.color, self.unicode)
    }

    fn dim(&self, text: impl Into<String>) -> String {
        ColoredText::dim(text).render(self.color)
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        match event {
            // The command layer renders run framing.
            DeployEvent::Started { .. } | DeployEvent::Completed { .. } => {}

            DeployEvent::ResourceStarted { name, .. } => {
                if self.verbose >= 1 {
                    self.write_line(format!(
                        "{} {} deploying",
                        self.icon(Icon::Progress),
                        name
                    ));
                }
            }

            DeployEvent::ResourceDeployed {
                name, identifier, ..
            } => {
                self.write_line(format!(
                    "{} {} {}",
                    self.icon(Icon::Success),
                    name,
                    self.dim(format!("({})", identifier))
                ));
            }

            DeployEvent::ResourceSkipped {
                name, identifier, ..
            } => {
                let detail = match identifier {
                    Some(identifier) => format!("already deployed ({})", identifier),
                    None => "already deployed".to_string(),
                };
                self.write_line(format!(
                    "{} {} {}",
                    self.icon(Icon::Pending),
                    name,
                    self.dim(detail)
                ));
            }

            DeployEvent::ResourceFailed { name, error, .. } => {
                self.write_line(format!(
                    "{} {}: {}",
                    self.icon(Icon::Error),
                    ColoredText::error(name).bold().render(self.color),
                    error
                ));
            }

            DeployEvent::Interrupted { completed } => {
                self.write_line(format!(
                    "{} interrupted after {} resources",
                    self.icon(Icon::Warning),
                    completed
                ));
            }
        }
    }

    fn wants_detailed_events(&self) -> bool {
        true
    }
}

//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    #[allow(dead_code)]
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let json = match event {
            DeployEvent::Started {
                manifest,
                ledger,
                resource_count,
                pending_count,
            } => {
                serde_json::json!({
                    "event": "start",
                    "command": "deploy",
                    "manifest": manifest.display().to_string(),
                    "ledger": ledger.display().to_string(),
                    "resource_count": resource_count,
                    "pending_count": pending_count,
                })
            }

            DeployEvent::ResourceStarted { index, name } => {
                serde_json::json!({
                    "event": "resource_start",
                    "command": "deploy",
                    "index": index,
                    "name": name,
                })
            }

            DeployEvent::ResourceDeployed {
                index,
                name,
                identifier,
            } => {
                serde_json::json!({
                    "event": "resource_deployed",
                    "command": "deploy",
                    "index": index,
                    "name": name,
                    "identifier": identifier,
                })
            }

            DeployEvent::ResourceSkipped {
                index,
                name,
                identifier,
            } => {
                serde_json::json!({
                    "event": "resource_skipped",
                    "command": "deploy",
                    "index": index,
                    "name": name,
                    "identifier": identifier,
                })
            }

            DeployEvent::ResourceFailed { index, name, error } => {
                serde_json::json!({
                    "event": "resource_failed",
                    "command": "deploy",
                    "index": index,
                    "name": name,
                    "error": error,
                })
            }

            DeployEvent::Interrupted { completed } => {
                serde_json::json!({
                    "event": "interrupted",
                    "command": "deploy",
                    "completed": completed,
                })
            }

            DeployEvent::Completed {
                deployed_count,
                skipped_count,
                failed_count,
            } => {
                let status = if failed_count == 0 {
                    "success"
                } else {
                    "failed"
                };
                serde_json::json!({
                    "event": "complete",
                    "command": "deploy",
                    "status": status,
                    "deployed": deployed_count,
                    "skipped": skipped_count,
                    "failed": failed_count,
                })
            }
        };

        self.write_event(json);
    }

    fn wants_detailed_events(&self) -> bool {
        true // JSON mode wants all events
    }
}

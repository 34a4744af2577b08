//! Deploy Event Port
//!
//! Provides an observable interface for deploy runs.
//! Enables progress reporting, NDJSON event streams, and debugging.

use std::path::PathBuf;

/// Event emitted during a deploy run
#[derive(Debug, Clone)]
pub enum DeployEvent {
    /// Run started; the plan is ordered and the ledger is loaded
    Started {
        manifest: PathBuf,
        ledger: PathBuf,
        resource_count: usize,
        pending_count: usize,
    },

    /// A resource's deployment is beginning
    ResourceStarted { index: usize, name: String },

    /// A resource deployed and was assigned an identifier
    ResourceDeployed {
        index: usize,
        name: String,
        identifier: String,
    },

    /// A resource was skipped (Success already in the ledger)
    ResourceSkipped {
        index: usize,
        name: String,
        identifier: Option<String>,
    },

    /// A resource's deploy call failed; the run halts
    ResourceFailed {
        index: usize,
        name: String,
        error: String,
    },

    /// The run stopped at a checkpoint on request
    Interrupted { completed: usize },

    /// Run completed (with or without a failure)
    Completed {
        deployed_count: usize,
        skipped_count: usize,
        failed_count: usize,
    },
}

/// Trait for receiving deploy events
///
/// Implementations can be:
/// - ConsoleEventSink: progress display in terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: silent operation
pub trait DeployEventSink: Send + Sync {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);

    /// Check if this sink wants detailed events (per-resource)
    ///
    /// Some sinks may only want run-level events.
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {
        // Do nothing
    }

    fn wants_detailed_events(&self) -> bool {
        false
    }
}

//! Event Sink Implementations
//!
//! Provides concrete implementations of DeployEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - ConsoleEventSink: Human-readable per-resource progress

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::JsonEventSink;

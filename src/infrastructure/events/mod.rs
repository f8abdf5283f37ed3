//! Event Sink Implementations
//!
//! Provides concrete implementations of PipelineEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//!
//! The interactive progress display lives with the binary's UI layer.

mod json;

pub use json::{command_name, JsonEventSink};

//! Pipeline Event Port
//!
//! Observable interface for pipeline runs. Drives the per-stage progress
//! indicator, the JSON event stream and test recorders.

use std::path::PathBuf;

use crate::domain::value_objects::{OutputProfile, Stage};

/// Event emitted during a pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    /// `--force` removed cache artifacts and previous output
    Purged { removed: Vec<PathBuf> },

    /// Change set resolved
    Resolved { total: usize, changed: usize },

    /// Stage started
    StageStarted { stage: Stage, files: usize },

    /// Stage completed; `invoked` is false when the file list was empty
    StageSucceeded { stage: Stage, invoked: bool },

    /// Stage failed; the run stops here
    StageFailed { stage: Stage, message: String },

    /// One profile pass of the dual-target compiler finished
    PassCompleted {
        profile: OutputProfile,
        written: usize,
    },

    /// Manifest persisted
    ManifestCommitted { path: PathBuf, entries: usize },
}

/// Trait for receiving pipeline events
pub trait PipelineEventSink: Send + Sync {
    fn on_event(&self, event: PipelineEvent);

    /// Whether this sink wants per-pass events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl PipelineEventSink for NoopEventSink {
    fn on_event(&self, _event: PipelineEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}

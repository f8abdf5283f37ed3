//! JSON Event Sink
//!
//! Outputs pipeline events as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use crate::domain::ports::{PipelineEvent, PipelineEventSink};
use crate::domain::value_objects::PipelineCommand;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    command: &'static str,
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: PipelineCommand) -> Self {
        Self::with_writer(command, io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(command: PipelineCommand, writer: W) -> Self {
        Self {
            command: command_name(command),
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

/// Name of a command as it appears in JSON output
pub fn command_name(command: PipelineCommand) -> &'static str {
    match command {
        PipelineCommand::Full => "esmc",
        PipelineCommand::Lint => "lint",
        PipelineCommand::Build => "build",
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

impl PipelineEventSink for JsonEventSink {
    fn on_event(&self, event: PipelineEvent) {
        let command = self.command;
        let json = match event {
            PipelineEvent::Purged { removed } => serde_json::json!({
                "event": "purged",
                "command": command,
                "removed": removed.iter().map(|p| display(p.as_path())).collect::<Vec<String>>(),
            }),

            PipelineEvent::Resolved { total, changed } => serde_json::json!({
                "event": "resolved",
                "command": command,
                "total": total,
                "changed": changed,
            }),

            PipelineEvent::StageStarted { stage, files } => serde_json::json!({
                "event": "stage_start",
                "command": command,
                "stage": stage.id(),
                "files": files,
            }),

            PipelineEvent::StageSucceeded { stage, invoked } => serde_json::json!({
                "event": "stage_complete",
                "command": command,
                "stage": stage.id(),
                "invoked": invoked,
            }),

            PipelineEvent::StageFailed { stage, message } => serde_json::json!({
                "event": "stage_error",
                "command": command,
                "stage": stage.id(),
                "message": message,
            }),

            PipelineEvent::PassCompleted { profile, written } => serde_json::json!({
                "event": "pass_complete",
                "command": command,
                "profile": profile.dir_name(),
                "written": written,
            }),

            PipelineEvent::ManifestCommitted { path, entries } => serde_json::json!({
                "event": "manifest_committed",
                "command": command,
                "path": display(&path),
                "entries": entries,
            }),
        };

        self.write_event(json);
    }

    fn wants_detailed_events(&self) -> bool {
        true // JSON mode wants all events
    }
}

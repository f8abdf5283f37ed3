//! NDJSON helpers for `--json`
//!
//! Pipeline progress is streamed by `esmc::infrastructure::JsonEventSink`;
//! this module writes the events that bracket a run.

use std::io::{self, Write};

use serde::Serialize;

/// Event emitted when a command completes successfully.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    pub changed: usize,
    pub total: usize,
    pub manifest_entries: usize,
}

impl<'a> CompleteEvent<'a> {
    pub fn new(command: &'a str, changed: usize, total: usize, manifest_entries: usize) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
            changed,
            total,
            manifest_entries,
        }
    }
}

/// Event emitted when an error occurs.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<&'static str>,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            message: message.into(),
            stage: None,
        }
    }

    pub fn with_stage(mut self, stage: Option<&'static str>) -> Self {
        self.stage = stage;
        self
    }
}

/// Emit a typed event as NDJSON to stdout.
pub fn emit_event<T: Serialize>(event: &T) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_typed_event(&mut out, event)
}

/// Write a typed event to a custom writer.
pub fn write_typed_event<T: Serialize, W: Write>(out: &mut W, event: &T) -> io::Result<()> {
    let json =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(json.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

//! Pipeline Result

use std::path::PathBuf;

use crate::application::stages::StageOutcome;
use crate::domain::value_objects::PipelineCommand;

/// Summary of a successful run
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub command: PipelineCommand,
    /// Paths removed by `--force`
    pub purged: Vec<PathBuf>,
    /// Enumerated source files
    pub total: usize,
    /// Files in the change set
    pub changed: Vec<PathBuf>,
    /// Stages in the order they ran
    pub stages: Vec<StageOutcome>,
    pub manifest_path: PathBuf,
    pub manifest_entries: usize,
}

impl PipelineReport {
    /// True when nothing changed since the last successful run
    pub fn is_up_to_date(&self) -> bool {
        self.changed.is_empty()
    }

    /// Stages whose collaborator actually ran
    pub fn invoked_stages(&self) -> impl Iterator<Item = &StageOutcome> {
        self.stages.iter().filter(|outcome| outcome.invoked)
    }
}

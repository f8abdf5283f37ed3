//! Stage runner
//!
//! Every stage shares one contract: run a collaborator over a file list,
//! report success or a stage-tagged failure. An empty list succeeds without
//! touching the collaborator.

use std::path::PathBuf;

use tracing::{debug, info_span};

use crate::domain::ports::{CollaboratorError, PipelineEvent, PipelineEventSink};
use crate::domain::value_objects::Stage;
use crate::error::{EsmcError, EsmcResult};

/// Outcome of a successful stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageOutcome {
    pub stage: Stage,
    pub files: usize,
    /// False when the file list was empty and the collaborator was skipped
    pub invoked: bool,
}

/// Run one stage over `files`
pub fn run_stage<F>(
    stage: Stage,
    files: &[PathBuf],
    events: &dyn PipelineEventSink,
    run: F,
) -> EsmcResult<StageOutcome>
where
    F: FnOnce(&[PathBuf]) -> Result<(), CollaboratorError>,
{
    let _span = info_span!("stage", stage = %stage).entered();
    events.on_event(PipelineEvent::StageStarted {
        stage,
        files: files.len(),
    });

    if files.is_empty() {
        debug!("no files; skipping collaborator");
        events.on_event(PipelineEvent::StageSucceeded {
            stage,
            invoked: false,
        });
        return Ok(StageOutcome {
            stage,
            files: 0,
            invoked: false,
        });
    }

    match run(files) {
        Ok(()) => {
            debug!(files = files.len(), "stage succeeded");
            events.on_event(PipelineEvent::StageSucceeded {
                stage,
                invoked: true,
            });
            Ok(StageOutcome {
                stage,
                files: files.len(),
                invoked: true,
            })
        }
        Err(source) => {
            events.on_event(PipelineEvent::StageFailed {
                stage,
                message: source.to_string(),
            });
            Err(EsmcError::stage_failed(stage, source))
        }
    }
}

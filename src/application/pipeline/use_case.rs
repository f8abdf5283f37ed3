//! Pipeline Use Case
//!
//! Orchestrates one run:
//! 1. Build the stage plan (rejects invalid flag combinations)
//! 2. Take the run lock
//! 3. Purge caches when forced
//! 4. Resolve the change set
//! 5. Run every planned stage in order over the change set
//! 6. Commit the prepared manifest
//!
//! Nothing is resolved, run or written when planning fails, and the
//! manifest is only written when every stage succeeded.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info};

use crate::application::compiler::DualTargetCompiler;
use crate::application::resolver::ChangeSetResolver;
use crate::application::stages::{run_stage, StageOutcome};
use crate::domain::ports::{
    BridgeGenerator, CollaboratorError, CollaboratorOptions, FileSystem, Linter,
    ManifestRepository, NoopEventSink, PipelineEvent, PipelineEventSink, StripRequest,
    Transformer, TypeChecker, TypeStripper,
};
use crate::domain::services::destination_for;
use crate::domain::value_objects::{
    PipelineCommand, PipelineConfig, PipelinePlan, ProjectLayout, Stage,
};
use crate::error::EsmcResult;
use crate::infrastructure::fs::RunLock;

use super::result::PipelineReport;

/// The five external tools a run may drive
pub struct Collaborators {
    pub type_checker: Box<dyn TypeChecker>,
    pub linter: Box<dyn Linter>,
    pub transformer: Box<dyn Transformer>,
    pub stripper: Box<dyn TypeStripper>,
    pub bridge: Box<dyn BridgeGenerator>,
}

/// Pipeline use case - sequences stages and commits the manifest
///
/// Parameterized by its ports so tests can run entirely in a temp dir
/// with recording collaborators.
pub struct PipelineUseCase<MR, FS>
where
    MR: ManifestRepository,
    FS: FileSystem,
{
    layout: ProjectLayout,
    manifest_repo: MR,
    file_system: FS,
    collaborators: Collaborators,
}

impl<MR, FS> PipelineUseCase<MR, FS>
where
    MR: ManifestRepository,
    FS: FileSystem,
{
    pub fn new(
        layout: ProjectLayout,
        manifest_repo: MR,
        file_system: FS,
        collaborators: Collaborators,
    ) -> Self {
        Self {
            layout,
            manifest_repo,
            file_system,
            collaborators,
        }
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Execute a command without event reporting
    pub fn execute(
        &self,
        command: PipelineCommand,
        config: &PipelineConfig,
    ) -> EsmcResult<PipelineReport> {
        self.execute_with_events(command, config, Arc::new(NoopEventSink))
    }

    /// Execute a command, reporting progress to `events`
    pub fn execute_with_events(
        &self,
        command: PipelineCommand,
        config: &PipelineConfig,
        events: Arc<dyn PipelineEventSink>,
    ) -> EsmcResult<PipelineReport> {
        let plan = PipelinePlan::for_command(command, config)?;
        debug!(?command, stages = ?plan.stages(), "planned run");

        let _lock = RunLock::acquire(&self.layout.lock_path())?;
        let resolver = ChangeSetResolver::new(&self.layout, &self.manifest_repo, &self.file_system)?;

        let purged = if config.force_clean {
            let removed = resolver.purge_caches()?;
            events.on_event(PipelineEvent::Purged {
                removed: removed.clone(),
            });
            removed
        } else {
            Vec::new()
        };

        let resolution = resolver.resolve()?;
        events.on_event(PipelineEvent::Resolved {
            total: resolution.total,
            changed: resolution.change_set.len(),
        });

        let options = CollaboratorOptions::from(config);
        let files = resolution.change_set.files();
        let mut stages = Vec::with_capacity(plan.stages().len());
        for &stage in plan.stages() {
            let outcome = self.run_planned(stage, files, &resolver, &options, events.as_ref())?;
            stages.push(outcome);
        }

        let (manifest_path, manifest_entries) = resolution.writer.commit(&self.manifest_repo)?;
        events.on_event(PipelineEvent::ManifestCommitted {
            path: manifest_path.clone(),
            entries: manifest_entries,
        });
        info!(
            changed = files.len(),
            entries = manifest_entries,
            "run complete"
        );

        Ok(PipelineReport {
            command,
            purged,
            total: resolution.total,
            changed: files.to_vec(),
            stages,
            manifest_path,
            manifest_entries,
        })
    }

    fn run_planned(
        &self,
        stage: Stage,
        files: &[PathBuf],
        resolver: &ChangeSetResolver<'_, MR, FS>,
        options: &CollaboratorOptions,
        events: &dyn PipelineEventSink,
    ) -> EsmcResult<StageOutcome> {
        let c = &self.collaborators;
        match stage {
            Stage::TypeCheck => run_stage(stage, files, events, |files| {
                c.type_checker.check(files, options)
            }),
            Stage::Lint => {
                let cache = self.layout.lint_cache_path();
                run_stage(stage, files, events, |files| {
                    c.linter.lint(files, &cache, options)
                })
            }
            Stage::Compile => run_stage(stage, files, events, |files| {
                DualTargetCompiler::new(
                    &self.file_system,
                    &*c.transformer,
                    &self.layout,
                    options.esm,
                    events,
                )
                .build(files)
                .map(|_| ())
            }),
            Stage::StripTypes => {
                let filter = resolver.filter();
                let destinations = self.layout.destination_roots();
                run_stage(stage, files, events, |files| {
                    let request = StripRequest {
                        files,
                        filter: &filter,
                        source_root: &self.layout.source_root,
                        destinations: &destinations,
                    };
                    c.stripper.strip(&request, options)
                })
            }
            Stage::RawCopy => run_stage(stage, files, events, |files| {
                self.raw_copy(files, resolver)
            }),
            // The change set only gates whether the bridge runs
            Stage::Bridge => run_stage(stage, files, events, |_| c.bridge.generate(options)),
        }
    }

    /// Copy accepted files into every destination root unchanged
    fn raw_copy(
        &self,
        files: &[PathBuf],
        resolver: &ChangeSetResolver<'_, MR, FS>,
    ) -> Result<(), CollaboratorError> {
        let roots = self.layout.destination_roots();
        for file in files.iter().filter(|f| resolver.accepts(f)) {
            for root in &roots {
                let dest = destination_for(file, &self.layout.source_root, root).map_err(|e| {
                    CollaboratorError::Write {
                        path: file.clone(),
                        message: e.to_string(),
                    }
                })?;
                self.file_system
                    .copy(file, &dest)
                    .map_err(|e| CollaboratorError::Write {
                        path: dest.clone(),
                        message: e.to_string(),
                    })?;
            }
        }
        Ok(())
    }
}

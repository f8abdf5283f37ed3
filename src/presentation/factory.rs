//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::{Collaborators, PipelineUseCase};
use crate::config::Config;
use crate::domain::ports::CollaboratorOptions;
use crate::domain::value_objects::PipelineConfig;
use crate::infrastructure::collaborators::{
    CommandBridge, CommandContext, CommandLinter, CommandSpec, CommandStripper,
    CommandTransformer, CommandTypeChecker,
};
use crate::infrastructure::{LocalFs, TomlManifestRepository};

/// Type alias for the concrete PipelineUseCase with all dependencies
pub type ConcretePipelineUseCase = PipelineUseCase<TomlManifestRepository, LocalFs>;

/// Create a pipeline use case for `project_root`
///
/// The layout follows `config.layout` and the source mode of `pipeline`;
/// every collaborator is the external command configured in
/// `config.collaborators`.
pub fn create_pipeline_use_case(
    project_root: &Path,
    config: &Config,
    pipeline: &PipelineConfig,
) -> ConcretePipelineUseCase {
    let layout = config.layout.resolve(project_root, pipeline.debug_source);
    let ctx = CommandContext {
        project_root: layout.project_root.clone(),
        dist_root: layout.dist_root.clone(),
        options: CollaboratorOptions::from(pipeline),
    };

    let commands = &config.collaborators;
    let collaborators = Collaborators {
        type_checker: Box::new(CommandTypeChecker::new(
            CommandSpec::from_argv(&commands.typecheck),
            ctx.clone(),
        )),
        linter: Box::new(CommandLinter::new(
            CommandSpec::from_argv(&commands.lint),
            ctx.clone(),
        )),
        transformer: Box::new(CommandTransformer::new(
            CommandSpec::from_argv(&commands.transform),
            ctx.clone(),
        )),
        stripper: Box::new(CommandStripper::new(
            CommandSpec::from_argv(&commands.strip),
            ctx.clone(),
        )),
        bridge: Box::new(CommandBridge::new(
            CommandSpec::from_argv(&commands.bridge),
            ctx,
        )),
    };

    PipelineUseCase::new(
        layout,
        TomlManifestRepository::new(),
        LocalFs::new(),
        collaborators,
    )
}

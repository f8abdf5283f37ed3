//! Pipeline configuration and the stage plan derived from it
//!
//! `PipelineConfig` is built once from the command line and never mutated.
//! `PipelinePlan` turns it into the exact, ordered list of stages a command
//! runs, so the orchestrator itself contains no branching on flags.

use crate::error::{EsmcError, EsmcResult};

use super::stage::Stage;

/// Options recognised by the orchestrator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Run the type checker (and strip types in pass-through mode)
    pub type_check: bool,
    /// Run the linter
    pub lint: bool,
    /// Compile; when false, strip types or copy raw sources instead
    pub compile: bool,
    /// Generate bridge (re-export) files; also selects ES module output
    pub generate_bridge: bool,
    /// Purge all caches and previous output before resolving
    pub force_clean: bool,
    /// Use the alternate example source root
    pub debug_source: bool,
    /// Forward warnings to the linter
    pub warnings: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            type_check: false,
            lint: true,
            compile: true,
            generate_bridge: true,
            force_clean: false,
            debug_source: false,
            warnings: false,
        }
    }
}

impl PipelineConfig {
    /// Output strategy selected by this configuration
    pub fn output_strategy(&self) -> OutputStrategy {
        OutputStrategy::select(self)
    }
}

/// How source files reach the destination roots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStrategy {
    /// Full dual-target compilation
    Compile,
    /// Pass-through with types removed
    StripTypes,
    /// Pass-through filtered copy
    RawCopy,
}

impl OutputStrategy {
    pub fn select(config: &PipelineConfig) -> Self {
        match (config.compile, config.type_check) {
            (true, _) => OutputStrategy::Compile,
            (false, true) => OutputStrategy::StripTypes,
            (false, false) => OutputStrategy::RawCopy,
        }
    }

    pub fn stage(&self) -> Stage {
        match self {
            OutputStrategy::Compile => Stage::Compile,
            OutputStrategy::StripTypes => Stage::StripTypes,
            OutputStrategy::RawCopy => Stage::RawCopy,
        }
    }
}

/// Which entry point is being run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineCommand {
    /// Type check, lint, output, bridge
    Full,
    /// Lint only
    Lint,
    /// Dual-target compile only
    Build,
}

/// Ordered stages of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelinePlan {
    stages: Vec<Stage>,
}

impl PipelinePlan {
    /// Build the plan for a command.
    ///
    /// Fails for the full pipeline when neither compilation nor bridge
    /// generation is requested.
    pub fn for_command(command: PipelineCommand, config: &PipelineConfig) -> EsmcResult<Self> {
        let stages = match command {
            PipelineCommand::Lint => vec![Stage::Lint],
            PipelineCommand::Build => vec![Stage::Compile],
            PipelineCommand::Full => {
                if !config.compile && !config.generate_bridge {
                    return Err(EsmcError::InvalidFlags {
                        flags: "--no-build and --no-esm".to_string(),
                    });
                }

                let mut stages = Vec::with_capacity(4);
                if config.type_check {
                    stages.push(Stage::TypeCheck);
                }
                if config.lint {
                    stages.push(Stage::Lint);
                }
                stages.push(config.output_strategy().stage());
                if config.generate_bridge {
                    stages.push(Stage::Bridge);
                }
                stages
            }
        };

        Ok(Self { stages })
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PipelineConfig {
        PipelineConfig::default()
    }

    #[test]
    fn strategy_compile_wins_over_type_check() {
        let cfg = PipelineConfig {
            type_check: true,
            ..config()
        };
        assert_eq!(cfg.output_strategy(), OutputStrategy::Compile);
    }

    #[test]
    fn strategy_strip_types_when_not_compiling_with_flow() {
        let cfg = PipelineConfig {
            compile: false,
            type_check: true,
            ..config()
        };
        assert_eq!(cfg.output_strategy(), OutputStrategy::StripTypes);
    }

    #[test]
    fn strategy_raw_copy_without_flow() {
        let cfg = PipelineConfig {
            compile: false,
            ..config()
        };
        assert_eq!(cfg.output_strategy(), OutputStrategy::RawCopy);
    }

    #[test]
    fn full_plan_default_order() {
        let plan = PipelinePlan::for_command(PipelineCommand::Full, &config()).unwrap();
        assert_eq!(plan.stages(), &[Stage::Lint, Stage::Compile, Stage::Bridge]);
    }

    #[test]
    fn full_plan_with_flow_starts_with_type_check() {
        let cfg = PipelineConfig {
            type_check: true,
            ..config()
        };
        let plan = PipelinePlan::for_command(PipelineCommand::Full, &cfg).unwrap();
        assert_eq!(
            plan.stages(),
            &[Stage::TypeCheck, Stage::Lint, Stage::Compile, Stage::Bridge]
        );
    }

    #[test]
    fn full_plan_pass_through_without_bridge_is_rejected() {
        let cfg = PipelineConfig {
            compile: false,
            generate_bridge: false,
            ..config()
        };
        let err = PipelinePlan::for_command(PipelineCommand::Full, &cfg).unwrap_err();
        assert!(matches!(err, EsmcError::InvalidFlags { .. }));
    }

    #[test]
    fn full_plan_pass_through_with_flow_strips() {
        let cfg = PipelineConfig {
            compile: false,
            type_check: true,
            ..config()
        };
        let plan = PipelinePlan::for_command(PipelineCommand::Full, &cfg).unwrap();
        assert_eq!(
            plan.stages(),
            &[Stage::TypeCheck, Stage::Lint, Stage::StripTypes, Stage::Bridge]
        );
    }

    #[test]
    fn lint_and_build_commands_ignore_flag_combination() {
        let cfg = PipelineConfig {
            compile: false,
            generate_bridge: false,
            ..config()
        };
        let lint = PipelinePlan::for_command(PipelineCommand::Lint, &cfg).unwrap();
        let build = PipelinePlan::for_command(PipelineCommand::Build, &cfg).unwrap();
        assert_eq!(lint.stages(), &[Stage::Lint]);
        assert_eq!(build.stages(), &[Stage::Compile]);
    }
}

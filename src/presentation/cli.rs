//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Every flag is global, so `esmc lint --warnings` and `esmc --warnings lint`
//!   are equivalent
//! - Paired flags (`--esm/--no-esm`, `--build/--no-build`) follow "last one wins"

use clap::{Parser, Subcommand};

use crate::domain::value_objects::{PipelineCommand, PipelineConfig};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// esmc - incremental dual-target build orchestrator
#[derive(Parser, Debug)]
#[command(name = "esmc")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'esmc' without a subcommand for the full pipeline.")]
pub struct Cli {
    /// Emit ES modules and generate bridge files (default)
    #[arg(long, global = true, overrides_with = "no_esm")]
    pub esm: bool,

    /// Emit CommonJS and skip bridge generation
    #[arg(long, global = true, overrides_with = "esm")]
    pub no_esm: bool,

    /// Compile sources (default)
    #[arg(long, global = true, overrides_with = "no_build")]
    pub build: bool,

    /// Skip compilation; strip types (with --flow) or copy sources instead
    #[arg(long, global = true, overrides_with = "build")]
    pub no_build: bool,

    /// Build the example sources with a separate cache
    #[arg(long, global = true)]
    pub dbg: bool,

    /// Run the type checker first
    #[arg(long, global = true)]
    pub flow: bool,

    /// Purge caches and previous output, then rebuild everything
    #[arg(long, global = true)]
    pub force: bool,

    /// Report lint warnings, not only errors
    #[arg(long, global = true)]
    pub warnings: bool,

    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Disable animations (spinners)
    #[arg(long, global = true)]
    pub no_animation: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Lint changed sources only
    Lint,

    /// Compile changed sources for both targets only
    Build,
}

impl Cli {
    /// Entry point selected by the subcommand
    pub fn pipeline_command(&self) -> PipelineCommand {
        match self.command {
            None => PipelineCommand::Full,
            Some(Commands::Lint) => PipelineCommand::Lint,
            Some(Commands::Build) => PipelineCommand::Build,
        }
    }

    /// Orchestrator options for this invocation
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            type_check: self.flow,
            lint: true,
            compile: !self.no_build,
            generate_bridge: !self.no_esm,
            force_clean: self.force,
            debug_source: self.dbg,
            warnings: self.warnings,
        }
    }
}

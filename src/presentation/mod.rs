//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the pipeline use case with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Argument definitions and their mapping onto `PipelineConfig`
//! - `factory` - Creates use cases with proper dependencies (dependency injection)

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::create_pipeline_use_case;

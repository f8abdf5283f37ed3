//! esmc - incremental dual-target build orchestrator
//!
//! esmc drives a JavaScript source tree through type checking, linting and
//! compilation for two runtimes (`dist/nodejs` and `dist/browsers`). Only
//! files whose content changed since the last successful run are handed to
//! the stages, and the content-hash manifest is only advanced when every
//! stage succeeded.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{PipelineReport, PipelineUseCase};
pub use config::Config;
pub use domain::value_objects::{PipelineCommand, PipelineConfig, Stage};
pub use error::{EsmcError, EsmcResult};

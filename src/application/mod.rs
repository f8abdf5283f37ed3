//! Application Layer
//!
//! Use cases that orchestrate the build flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Components
//!
//! - `ChangeSetResolver` - Works out which source files changed since the last successful run
//! - `run_stage` - Uniform stage contract with empty-list short-circuit
//! - `DualTargetCompiler` - Server then browser compile passes, staged and promoted
//! - `PipelineUseCase` - Sequences the stages and commits the manifest

pub mod compiler;
pub mod pipeline;
pub mod resolver;
pub mod stages;

pub use compiler::DualTargetCompiler;
pub use pipeline::{Collaborators, PipelineReport, PipelineUseCase};
pub use resolver::{ChangeSetResolver, ManifestWriter, Resolution};
pub use stages::{run_stage, StageOutcome};

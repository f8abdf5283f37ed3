//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod collaborators;
pub mod file_system;
pub mod manifest_repository;
pub mod pipeline_events;

pub use collaborators::{
    BridgeGenerator, CollaboratorError, CollaboratorOptions, Linter, StripRequest,
    TransformOutput, Transformer, TypeChecker, TypeStripper,
};
pub use file_system::{FileSystem, FsError, FsResult};
pub use manifest_repository::{ManifestError, ManifestRepository};
pub use pipeline_events::{NoopEventSink, PipelineEvent, PipelineEventSink};

//! Value Objects
//!
//! Immutable types without identity.

mod fingerprint;
mod ignore_patterns;
mod layout;
mod pipeline_config;
mod profile;
mod stage;

pub use fingerprint::Fingerprint;
pub use ignore_patterns::{IgnoreError, IgnorePatterns, BUILTIN_PATTERNS, IGNORE_FILE_NAME};
pub use layout::{ProjectLayout, LINT_CACHE_FILE_NAME, LOCK_FILE_NAME, MANIFEST_FILE_NAME};
pub use pipeline_config::{OutputStrategy, PipelineCommand, PipelineConfig, PipelinePlan};
pub use profile::{OutputProfile, ProfileConfig};
pub use stage::Stage;

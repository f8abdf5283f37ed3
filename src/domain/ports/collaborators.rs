//! Collaborator ports
//!
//! The orchestrator drives five external tools it knows nothing about: a type
//! checker, a linter, a source transformer, a type stripper and a bridge
//! generator. Each is reached only through the traits below.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::value_objects::{PipelineConfig, ProfileConfig};

/// Invocation options forwarded to every collaborator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollaboratorOptions {
    pub warnings: bool,
    pub esm: bool,
    pub flow: bool,
    pub dbg: bool,
}

impl From<&PipelineConfig> for CollaboratorOptions {
    fn from(config: &PipelineConfig) -> Self {
        Self {
            warnings: config.warnings,
            esm: config.generate_bridge,
            flow: config.type_check,
            dbg: config.debug_source,
        }
    }
}

/// Failure reported by a collaborator
#[derive(Debug, Error)]
pub enum CollaboratorError {
    /// The tool could not be started
    #[error("could not start '{tool}': {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// The tool ran and reported failure
    #[error("'{tool}' exited with {}{}", exit_label(.code), stderr_suffix(.stderr))]
    Failed {
        tool: String,
        code: Option<i32>,
        stderr: String,
    },

    /// The transformer rejected a source file
    #[error("{message}")]
    Diagnostic { file: PathBuf, message: String },

    /// Output could not be written
    #[error("failed to write {}: {message}", .path.display())]
    Write { path: PathBuf, message: String },

    /// No collaborator is configured for this stage
    #[error("no command configured for {0}")]
    NotConfigured(&'static str),
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "a signal".to_string(),
    }
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("\n{}", trimmed)
    }
}

/// Output of a single-file transform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOutput {
    pub code: String,
}

/// Everything the type stripper needs to place its output
pub struct StripRequest<'a> {
    pub files: &'a [PathBuf],
    pub filter: &'a (dyn Fn(&Path) -> bool + Sync),
    pub source_root: &'a Path,
    pub destinations: &'a [PathBuf],
}

impl StripRequest<'_> {
    /// Files accepted by the filter
    pub fn selected(&self) -> impl Iterator<Item = &PathBuf> {
        self.files.iter().filter(|f| (self.filter)(f.as_path()))
    }
}

/// Static type checker (advisory stage)
pub trait TypeChecker: Send + Sync {
    fn check(&self, files: &[PathBuf], options: &CollaboratorOptions)
        -> Result<(), CollaboratorError>;
}

/// Lint engine with its own incremental cache
pub trait Linter: Send + Sync {
    fn lint(
        &self,
        files: &[PathBuf],
        cache: &Path,
        options: &CollaboratorOptions,
    ) -> Result<(), CollaboratorError>;
}

/// Source-to-source compiler. Called concurrently from a compile pass.
pub trait Transformer: Send + Sync {
    fn transform_file(
        &self,
        path: &Path,
        profile: &ProfileConfig,
    ) -> Result<TransformOutput, CollaboratorError>;
}

/// Lightweight type remover for pass-through mode
pub trait TypeStripper: Send + Sync {
    fn strip(
        &self,
        request: &StripRequest<'_>,
        options: &CollaboratorOptions,
    ) -> Result<(), CollaboratorError>;
}

/// Re-export bridge generator
pub trait BridgeGenerator: Send + Sync {
    fn generate(&self, options: &CollaboratorOptions) -> Result<(), CollaboratorError>;
}

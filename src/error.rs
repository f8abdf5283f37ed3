//! Error types for esmc
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`
//! and downcasts back to `EsmcError` when rendering.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{CollaboratorError, FsError, ManifestError};
use crate::domain::value_objects::{IgnoreError, Stage};

/// Result type alias for esmc operations
pub type EsmcResult<T> = Result<T, EsmcError>;

/// Main error type for esmc operations
#[derive(Error, Debug)]
pub enum EsmcError {
    /// Mutually exclusive flags were combined
    #[error("Cannot use {flags} flags together")]
    InvalidFlags { flags: String },

    /// A pipeline stage failed; remaining stages were not run
    #[error("{stage} failed: {source}")]
    Stage {
        stage: Stage,
        #[source]
        source: CollaboratorError,
    },

    /// Source root does not exist
    #[error("source directory not found: {path}")]
    SourceRootNotFound { path: PathBuf },

    /// A file handed to the compiler lies outside the source root
    #[error("'{path}' is not inside source root '{root}'")]
    OutsideSourceRoot { path: PathBuf, root: PathBuf },

    /// Invalid `esmc.toml`
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Invalid `.esmcignore`
    #[error("{0}")]
    Ignore(#[from] IgnoreError),

    /// Manifest could not be written
    #[error("manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// Another esmc process holds the cache lock
    #[error("cache directory is locked by another esmc process: {path}")]
    CacheLocked { path: PathBuf },

    /// File system port error
    #[error("{0}")]
    Fs(#[from] FsError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Source tree walk failed
    #[error("failed to walk source tree: {0}")]
    Walk(#[from] ignore::Error),
}

impl EsmcError {
    /// Stage that produced this error, if any
    pub fn stage(&self) -> Option<Stage> {
        match self {
            EsmcError::Stage { stage, .. } => Some(*stage),
            _ => None,
        }
    }

    /// Wrap a collaborator failure with the stage it happened in
    pub fn stage_failed(stage: Stage, source: CollaboratorError) -> Self {
        EsmcError::Stage { stage, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_flags_display() {
        let err = EsmcError::InvalidFlags {
            flags: "--no-build and --no-esm".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Cannot use --no-build and --no-esm flags together"
        );
    }

    #[test]
    fn stage_error_reports_stage_label() {
        let err = EsmcError::stage_failed(
            Stage::Lint,
            CollaboratorError::Failed {
                tool: "eslint".to_string(),
                code: Some(1),
                stderr: "2 problems".to_string(),
            },
        );
        assert_eq!(err.stage(), Some(Stage::Lint));
        let msg = err.to_string();
        assert!(msg.contains("lint"));
        assert!(msg.contains("eslint"));
    }

    #[test]
    fn io_error_has_no_stage() {
        let err: EsmcError = std::io::Error::other("disk full").into();
        assert_eq!(err.stage(), None);
    }
}

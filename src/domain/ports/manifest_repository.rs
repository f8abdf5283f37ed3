//! ManifestRepository port - abstraction for manifest persistence
//!
//! Keeps the domain layer unaware of the on-disk format.

use std::path::Path;

use thiserror::Error;

use crate::domain::entities::Manifest;

/// Manifest operation errors
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Manifest could not be parsed
    #[error("invalid manifest format: {0}")]
    Parse(String),

    /// Manifest was written by an incompatible version
    #[error("manifest format incompatible (found version {found}, expected {expected})")]
    VersionMismatch { found: u32, expected: u32 },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(String),
}

/// Abstract repository for manifest persistence
pub trait ManifestRepository {
    /// Load the manifest at `path`; a missing file yields an empty manifest
    fn load(&self, path: &Path) -> Result<Manifest, ManifestError>;

    /// Load the manifest, treating any failure as a cold start
    fn load_or_new(&self, path: &Path) -> Manifest {
        self.load(path).unwrap_or_default()
    }

    /// Persist the manifest; either the full new content lands or nothing does
    fn save(&self, manifest: &Manifest, path: &Path) -> Result<(), ManifestError>;

    /// Delete the manifest file if present
    fn delete(&self, path: &Path) -> Result<(), ManifestError>;
}

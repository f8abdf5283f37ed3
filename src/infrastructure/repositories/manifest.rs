//! TOML Manifest Repository
//!
//! Implements the ManifestRepository port using TOML format.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::entities::Manifest;
use crate::domain::ports::file_system::{FileSystem, FsError};
use crate::domain::ports::manifest_repository::{ManifestError, ManifestRepository};
use crate::infrastructure::fs::LocalFs;

/// TOML-based manifest repository
///
/// Stores the manifest as `.esmc-cache` inside the cache directory.
pub struct TomlManifestRepository {
    fs: LocalFs,
}

impl TomlManifestRepository {
    /// Create a new repository with the default file system
    pub fn new() -> Self {
        Self { fs: LocalFs::new() }
    }
}

impl Default for TomlManifestRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// TOML representation of a file entry
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlFileEntry {
    hash: String,
}

/// TOML representation of the manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlManifest {
    version: u32,
    #[serde(default)]
    files: BTreeMap<String, TomlFileEntry>,
}

fn io_error(err: FsError) -> ManifestError {
    ManifestError::Io(err.to_string())
}

impl ManifestRepository for TomlManifestRepository {
    fn load(&self, path: &Path) -> Result<Manifest, ManifestError> {
        if !self.fs.exists(path) {
            return Ok(Manifest::new());
        }

        let bytes = self.fs.read(path).map_err(io_error)?;
        let content =
            String::from_utf8(bytes).map_err(|e| ManifestError::Parse(e.to_string()))?;
        let toml_manifest: TomlManifest =
            toml::from_str(&content).map_err(|e| ManifestError::Parse(e.to_string()))?;

        if toml_manifest.version != Manifest::VERSION {
            return Err(ManifestError::VersionMismatch {
                found: toml_manifest.version,
                expected: Manifest::VERSION,
            });
        }

        let mut manifest = Manifest::new();
        for (key, entry) in toml_manifest.files {
            manifest.set(key, entry.hash);
        }
        Ok(manifest)
    }

    fn save(&self, manifest: &Manifest, path: &Path) -> Result<(), ManifestError> {
        let files = manifest
            .entries()
            .map(|(key, fingerprint)| {
                (
                    key.to_string(),
                    TomlFileEntry {
                        hash: fingerprint.to_string(),
                    },
                )
            })
            .collect();

        let toml_manifest = TomlManifest {
            version: manifest.version(),
            files,
        };

        let content = toml::to_string_pretty(&toml_manifest)
            .map_err(|e| ManifestError::Parse(e.to_string()))?;
        self.fs.write(path, content.as_bytes()).map_err(io_error)
    }

    fn delete(&self, path: &Path) -> Result<(), ManifestError> {
        self.fs.remove(path).map_err(io_error)
    }
}

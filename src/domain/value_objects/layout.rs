//! Resolved project layout
//!
//! Absolute locations of everything a run reads or writes.

use std::path::{Path, PathBuf};

use super::profile::OutputProfile;

/// Manifest file name inside the cache directory
pub const MANIFEST_FILE_NAME: &str = ".esmc-cache";
/// Lint engine sub-cache inside the cache directory
pub const LINT_CACHE_FILE_NAME: &str = ".esmc-cache-lint";
/// Run lock inside the cache directory
pub const LOCK_FILE_NAME: &str = ".esmc-lock";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub project_root: PathBuf,
    /// Active source root (`src`, or `example-src` in debug mode)
    pub source_root: PathBuf,
    pub dist_root: PathBuf,
    /// `<cache_root>/esmc`, or `<cache_root>/esmc-dbg` in debug mode
    pub cache_dir: PathBuf,
    /// Source file extensions, without the leading dot
    pub extensions: Vec<String>,
}

impl ProjectLayout {
    /// Cache directory name for the given source mode
    pub fn cache_dir_name(debug_source: bool) -> &'static str {
        if debug_source {
            "esmc-dbg"
        } else {
            "esmc"
        }
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.cache_dir.join(MANIFEST_FILE_NAME)
    }

    pub fn lint_cache_path(&self) -> PathBuf {
        self.cache_dir.join(LINT_CACHE_FILE_NAME)
    }

    pub fn lock_path(&self) -> PathBuf {
        self.cache_dir.join(LOCK_FILE_NAME)
    }

    /// Destination root of a profile
    pub fn destination_root(&self, profile: OutputProfile) -> PathBuf {
        profile.destination_root(&self.dist_root)
    }

    /// Destination roots in pass order
    pub fn destination_roots(&self) -> Vec<PathBuf> {
        OutputProfile::PASS_ORDER
            .iter()
            .map(|profile| self.destination_root(*profile))
            .collect()
    }

    /// Whether `path` carries one of the configured source extensions
    pub fn is_source_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }
}

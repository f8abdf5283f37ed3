//! FileSystem port - abstraction over file I/O operations
//!
//! Lets the application layer read sources, write outputs and purge caches
//! without depending on a concrete implementation.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::Fingerprint;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error on a path
    Io { path: PathBuf, source: std::io::Error },
    /// Other error
    Other(String),
}

impl FsError {
    /// Classify an I/O error that happened on `path`
    pub fn at(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io { path, source } => write!(f, "I/O error on {}: {}", path.display(), source),
            FsError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FsError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Abstract file system interface
///
/// Implementations must be shareable across the compile pass worker threads.
pub trait FileSystem: Send + Sync {
    /// Read raw file content
    fn read(&self, path: &Path) -> FsResult<Vec<u8>>;

    /// Write content atomically, creating parent directories
    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()>;

    /// Check if a file or directory exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if `path` is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Remove a file; missing files are not an error
    fn remove(&self, path: &Path) -> FsResult<()>;

    /// Remove a directory tree; missing directories are not an error
    fn remove_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Copy a file, creating parent directories of `to`
    fn copy(&self, from: &Path, to: &Path) -> FsResult<()>;

    /// Move a file into place, creating parent directories of `to`
    fn rename(&self, from: &Path, to: &Path) -> FsResult<()>;

    /// Compute the content fingerprint of a file
    fn fingerprint(&self, path: &Path) -> FsResult<Fingerprint> {
        self.read(path).map(|bytes| Fingerprint::from_bytes(&bytes))
    }
}

//! Ignore predicate for source enumeration
//!
//! Built-in exclusions (dotfiles, dependency and build output directories,
//! logs) plus user patterns from an optional `.esmcignore`, all with
//! gitignore semantics.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the user ignore file at the project root
pub const IGNORE_FILE_NAME: &str = ".esmcignore";

/// Maximum file size for `.esmcignore` (64KB)
const MAX_FILE_SIZE: u64 = 65536;

/// Maximum number of user patterns allowed
const MAX_PATTERNS: usize = 1000;

/// Patterns every source tree ignores
pub const BUILTIN_PATTERNS: &[&str] = &[".*", "node_modules/", "dist/", "*.log"];

/// Compiled ignore predicate.
///
/// Paths are matched relative to the root the patterns were built for.
#[derive(Debug)]
pub struct IgnorePatterns {
    matcher: Gitignore,
    pattern_count: usize,
}

impl IgnorePatterns {
    /// Only the built-in patterns
    pub fn builtin(root: &Path) -> Self {
        // Built-in patterns are static and known to be valid
        Self::from_content(root, Path::new(IGNORE_FILE_NAME), "").unwrap_or_else(|_| Self {
            matcher: Gitignore::empty(),
            pattern_count: 0,
        })
    }

    /// Built-ins plus `.esmcignore` from `project_root`, matched against `root`.
    ///
    /// Returns only the built-ins if the file doesn't exist.
    pub fn load(project_root: &Path, root: &Path) -> Result<Self, IgnoreError> {
        let ignore_path = project_root.join(IGNORE_FILE_NAME);

        if !ignore_path.exists() {
            return Ok(Self::builtin(root));
        }

        let metadata = fs::metadata(&ignore_path).map_err(IgnoreError::Io)?;
        if metadata.len() > MAX_FILE_SIZE {
            return Err(IgnoreError::FileTooLarge {
                path: ignore_path,
                size: metadata.len(),
                limit: MAX_FILE_SIZE,
            });
        }

        let content = fs::read_to_string(&ignore_path).map_err(IgnoreError::Io)?;
        Self::from_content(root, &ignore_path, &content)
    }

    /// Parse user patterns from string content on top of the built-ins.
    pub fn from_content(
        root: &Path,
        source_path: &Path,
        content: &str,
    ) -> Result<Self, IgnoreError> {
        let mut builder = GitignoreBuilder::new(root);
        for pattern in BUILTIN_PATTERNS {
            builder
                .add_line(None, pattern)
                .map_err(|e| IgnoreError::BuildFailed(e.to_string()))?;
        }

        let mut pattern_count = 0;
        for (line_num, line) in content.lines().enumerate() {
            let trimmed = line.trim();

            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            pattern_count += 1;
            if pattern_count > MAX_PATTERNS {
                return Err(IgnoreError::TooManyPatterns {
                    path: source_path.to_path_buf(),
                    count: pattern_count,
                    limit: MAX_PATTERNS,
                });
            }

            if let Err(e) = builder.add_line(Some(source_path.to_path_buf()), line) {
                return Err(IgnoreError::InvalidPattern {
                    path: source_path.to_path_buf(),
                    line: line_num + 1,
                    pattern: line.to_string(),
                    message: e.to_string(),
                });
            }
        }

        let matcher = builder
            .build()
            .map_err(|e| IgnoreError::BuildFailed(e.to_string()))?;

        Ok(Self {
            matcher,
            pattern_count,
        })
    }

    /// Check if a path (relative to the matcher root) should be ignored.
    pub fn is_ignored(&self, rel_path: &Path, is_dir: bool) -> bool {
        self.matcher
            .matched_path_or_any_parents(rel_path, is_dir)
            .is_ignore()
    }

    /// Number of user patterns loaded from `.esmcignore`
    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }
}

/// Errors that can occur when loading ignore patterns.
#[derive(Debug)]
pub enum IgnoreError {
    FileTooLarge {
        path: PathBuf,
        size: u64,
        limit: u64,
    },
    TooManyPatterns {
        path: PathBuf,
        count: usize,
        limit: usize,
    },
    InvalidPattern {
        path: PathBuf,
        line: usize,
        pattern: String,
        message: String,
    },
    BuildFailed(String),
    Io(std::io::Error),
}

impl fmt::Display for IgnoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileTooLarge { path, size, limit } => write!(
                f,
                ".esmcignore exceeds {}KB limit ({} bytes): {}",
                limit / 1024,
                size,
                path.display()
            ),
            Self::TooManyPatterns { path, count, limit } => write!(
                f,
                ".esmcignore has {} patterns, exceeds {} limit: {}",
                count,
                limit,
                path.display()
            ),
            Self::InvalidPattern {
                path,
                line,
                pattern,
                message,
            } => write!(
                f,
                "Invalid pattern at {}:{}: '{}' - {}",
                path.display(),
                line,
                pattern,
                message
            ),
            Self::BuildFailed(msg) => write!(f, "Failed to build ignore matcher: {}", msg),
            Self::Io(e) => write!(f, "IO error reading .esmcignore: {}", e),
        }
    }
}

impl std::error::Error for IgnoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

//! ChangeSet entity - files requiring reprocessing in the current run

use std::path::{Path, PathBuf};

/// Ordered, immutable set of files that are new or modified since the last
/// successful run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    files: Vec<PathBuf>,
}

impl ChangeSet {
    /// Build from any file list; the result is sorted and deduplicated
    pub fn new(mut files: Vec<PathBuf>) -> Self {
        files.sort();
        files.dedup();
        Self { files }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.files.binary_search_by(|p| p.as_path().cmp(path)).is_ok()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

//! Manifest entity - fingerprints of every source file seen by the last
//! successful run.
//!
//! Pure data; persistence lives behind `ManifestRepository`.

use std::collections::BTreeMap;
use std::path::Path;

use crate::domain::value_objects::Fingerprint;

/// Normalize a path for manifest storage (always use forward slashes).
pub fn manifest_key(project_root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(project_root).unwrap_or(path);
    rel.to_string_lossy().replace('\\', "/")
}

/// Persisted fingerprint record enabling incremental builds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    version: u32,
    entries: BTreeMap<String, Fingerprint>,
}

impl Manifest {
    /// Current manifest format version
    pub const VERSION: u32 = 1;

    pub fn new() -> Self {
        Self {
            version: Self::VERSION,
            entries: BTreeMap::new(),
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn get(&self, key: &str) -> Option<&Fingerprint> {
        self.entries.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, fingerprint: impl Into<Fingerprint>) {
        self.entries.insert(key.into(), fingerprint.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<Fingerprint> {
        self.entries.remove(key)
    }

    /// True when `key` is unknown or was recorded with a different fingerprint
    pub fn is_stale(&self, key: &str, current: &Fingerprint) -> bool {
        match self.entries.get(key) {
            Some(stored) => stored != current,
            None => true,
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &Fingerprint)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self::new()
    }
}

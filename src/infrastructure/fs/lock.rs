//! Exclusive run lock
//!
//! Held from change-set resolution to manifest commit so two concurrent
//! invocations never interleave manifest writes.

use std::fs::{self, File, OpenOptions};
use std::path::Path;

use fs2::FileExt;

use crate::error::{EsmcError, EsmcResult};

/// Advisory lock on `<cache_dir>/.esmc-lock`, released on drop
#[derive(Debug)]
pub struct RunLock {
    _file: File,
}

impl RunLock {
    /// Take the lock without waiting
    pub fn acquire(path: &Path) -> EsmcResult<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(path)?;
        file.try_lock_exclusive()
            .map_err(|_| EsmcError::CacheLocked {
                path: path.to_path_buf(),
            })?;

        Ok(Self { _file: file })
    }
}

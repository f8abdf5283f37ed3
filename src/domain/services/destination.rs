//! Destination path derivation

use std::path::{Path, PathBuf};

use crate::error::{EsmcError, EsmcResult};

/// Replace the `source_root` prefix of `file` with `destination_root`,
/// keeping the relative path and file name unchanged.
pub fn destination_for(
    file: &Path,
    source_root: &Path,
    destination_root: &Path,
) -> EsmcResult<PathBuf> {
    let rel = file
        .strip_prefix(source_root)
        .map_err(|_| EsmcError::OutsideSourceRoot {
            path: file.to_path_buf(),
            root: source_root.to_path_buf(),
        })?;
    Ok(destination_root.join(rel))
}

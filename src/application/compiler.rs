//! Dual-Target Compiler
//!
//! Compiles a file list once per output profile. Passes run strictly in
//! `OutputProfile::PASS_ORDER` and the first failing pass stops the build.
//!
//! Inside a pass every file is transformed concurrently into a staging
//! directory under the dist root. Staged files are promoted into the
//! profile root only after every transform in the pass succeeded. Files
//! replaced during promotion are parked in the staging directory and put
//! back if a later rename fails, so a failed pass leaves every file in the
//! profile root as it was.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info_span, warn};

use crate::domain::ports::{
    CollaboratorError, FileSystem, FsResult, PipelineEvent, PipelineEventSink, Transformer,
};
use crate::domain::services::destination_for;
use crate::domain::value_objects::{OutputProfile, ProjectLayout};

const STAGING_PREFIX: &str = ".esmc-staging-";
const REPLACED_DIR: &str = ".replaced";

/// A promoted destination and where its previous file was parked
struct Promoted<'p> {
    dest: &'p Path,
    parked: Option<PathBuf>,
}

pub struct DualTargetCompiler<'a, FS: FileSystem> {
    fs: &'a FS,
    transformer: &'a dyn Transformer,
    layout: &'a ProjectLayout,
    esm: bool,
    events: &'a dyn PipelineEventSink,
}

impl<'a, FS: FileSystem> DualTargetCompiler<'a, FS> {
    pub fn new(
        fs: &'a FS,
        transformer: &'a dyn Transformer,
        layout: &'a ProjectLayout,
        esm: bool,
        events: &'a dyn PipelineEventSink,
    ) -> Self {
        Self {
            fs,
            transformer,
            layout,
            esm,
            events,
        }
    }

    /// Compile `files` for every profile. Returns the number of files
    /// written across all passes.
    pub fn build(&self, files: &[PathBuf]) -> Result<usize, CollaboratorError> {
        let mut written = 0;
        for profile in OutputProfile::PASS_ORDER {
            let count = self.run_pass(profile, files)?;
            if self.events.wants_detailed_events() {
                self.events.on_event(PipelineEvent::PassCompleted {
                    profile,
                    written: count,
                });
            }
            written += count;
        }
        Ok(written)
    }

    fn run_pass(&self, profile: OutputProfile, files: &[PathBuf]) -> Result<usize, CollaboratorError> {
        let _span = info_span!("pass", profile = %profile).entered();
        let config = profile.config(self.esm);
        let dest_root = self.layout.destination_root(profile);

        let dist_root = &self.layout.dist_root;
        self.fs
            .create_dir_all(dist_root)
            .map_err(|e| write_error(dist_root, e))?;
        let staging = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .tempdir_in(dist_root)
            .map_err(|e| write_error(dist_root, e))?;

        // Fire all, await all; the first failure in file order is reported
        let results: Vec<Result<(PathBuf, PathBuf), CollaboratorError>> = files
            .par_iter()
            .map(|file| {
                let output = self.transformer.transform_file(file, &config)?;
                let staged = self.place(file, staging.path())?;
                self.fs
                    .write(&staged, output.code.as_bytes())
                    .map_err(|e| write_error(&staged, e))?;
                Ok((staged, self.place(file, &dest_root)?))
            })
            .collect();
        let staged = results.into_iter().collect::<Result<Vec<_>, _>>()?;

        self.promote(&staged, &staging.path().join(REPLACED_DIR))?;
        debug!(written = staged.len(), root = %dest_root.display(), "pass promoted");
        Ok(staged.len())
    }

    /// Move every staged file into place, or none of them
    fn promote(&self, staged: &[(PathBuf, PathBuf)], parking: &Path) -> Result<(), CollaboratorError> {
        if let Some((_, dest)) = staged.iter().find(|(_, dest)| self.fs.is_dir(dest)) {
            return Err(write_error(dest, "destination is a directory"));
        }

        let mut promoted = Vec::with_capacity(staged.len());
        for (index, (from, to)) in staged.iter().enumerate() {
            match self.promote_one(from, to, &parking.join(index.to_string())) {
                Ok(parked) => promoted.push(Promoted { dest: to, parked }),
                Err(err) => {
                    self.roll_back(&promoted);
                    return Err(write_error(to, err));
                }
            }
        }
        Ok(())
    }

    fn promote_one(&self, from: &Path, to: &Path, park_at: &Path) -> FsResult<Option<PathBuf>> {
        let parked = if self.fs.exists(to) {
            self.fs.rename(to, park_at)?;
            Some(park_at.to_path_buf())
        } else {
            None
        };

        if let Err(err) = self.fs.rename(from, to) {
            if let Some(parked) = &parked {
                self.restore(parked, to);
            }
            return Err(err);
        }
        Ok(parked)
    }

    fn roll_back(&self, promoted: &[Promoted<'_>]) {
        for entry in promoted.iter().rev() {
            match &entry.parked {
                Some(parked) => self.restore(parked, entry.dest),
                None => {
                    if let Err(err) = self.fs.remove(entry.dest) {
                        warn!(path = %entry.dest.display(), %err, "failed to remove promoted file");
                    }
                }
            }
        }
    }

    fn restore(&self, parked: &Path, dest: &Path) {
        if let Err(err) = self.fs.rename(parked, dest) {
            warn!(path = %dest.display(), %err, "failed to restore replaced file");
        }
    }

    fn place(&self, file: &Path, root: &Path) -> Result<PathBuf, CollaboratorError> {
        destination_for(file, &self.layout.source_root, root).map_err(|e| write_error(file, e))
    }
}

fn write_error(path: &Path, err: impl std::fmt::Display) -> CollaboratorError {
    CollaboratorError::Write {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

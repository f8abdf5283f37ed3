//! Change Set Resolver
//!
//! Enumerates the active source root, fingerprints every source file and
//! compares against the manifest of the last successful run.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use ignore::WalkBuilder;
use tracing::{debug, trace};

use crate::domain::entities::{manifest_key, ChangeSet, Manifest};
use crate::domain::ports::{FileSystem, ManifestRepository};
use crate::domain::value_objects::{IgnorePatterns, ProjectLayout};
use crate::error::{EsmcError, EsmcResult};

/// Result of resolution: the work to do and the manifest to commit if it
/// all succeeds
#[derive(Debug)]
pub struct Resolution {
    pub change_set: ChangeSet,
    /// Number of enumerated source files
    pub total: usize,
    pub writer: ManifestWriter,
}

/// Manifest prepared during resolution, holding fresh fingerprints for
/// every enumerated file. Only committed after a fully successful run.
#[derive(Debug)]
pub struct ManifestWriter {
    path: PathBuf,
    manifest: Manifest,
}

impl ManifestWriter {
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Persist the prepared manifest
    pub fn commit<MR: ManifestRepository>(self, repo: &MR) -> EsmcResult<(PathBuf, usize)> {
        repo.save(&self.manifest, &self.path)?;
        Ok((self.path, self.manifest.len()))
    }
}

pub struct ChangeSetResolver<'a, MR, FS>
where
    MR: ManifestRepository,
    FS: FileSystem,
{
    layout: &'a ProjectLayout,
    repo: &'a MR,
    fs: &'a FS,
    ignore: Arc<IgnorePatterns>,
}

impl<'a, MR, FS> ChangeSetResolver<'a, MR, FS>
where
    MR: ManifestRepository,
    FS: FileSystem,
{
    /// Create a resolver, loading `.esmcignore` from the project root
    pub fn new(layout: &'a ProjectLayout, repo: &'a MR, fs: &'a FS) -> EsmcResult<Self> {
        let ignore = IgnorePatterns::load(&layout.project_root, &layout.source_root)?;
        debug!(patterns = ignore.pattern_count(), "loaded ignore patterns");
        Ok(Self {
            layout,
            repo,
            fs,
            ignore: Arc::new(ignore),
        })
    }

    /// Whether `path` is a source file the ignore predicate lets through
    pub fn accepts(&self, path: &Path) -> bool {
        accepts(&self.ignore, self.layout, path)
    }

    /// `accepts` as a shareable predicate
    pub fn filter(&self) -> impl Fn(&Path) -> bool + Sync + '_ {
        let ignore: &IgnorePatterns = &self.ignore;
        let layout = self.layout;
        move |path: &Path| accepts(ignore, layout, path)
    }

    /// Delete the manifest, the lint sub-cache and previous output.
    ///
    /// Returns the paths that existed and were removed.
    pub fn purge_caches(&self) -> EsmcResult<Vec<PathBuf>> {
        let mut removed = Vec::new();

        let manifest = self.layout.manifest_path();
        if self.fs.exists(&manifest) {
            self.repo.delete(&manifest)?;
            removed.push(manifest);
        }

        let lint_cache = self.layout.lint_cache_path();
        if self.fs.exists(&lint_cache) {
            self.fs.remove(&lint_cache)?;
            removed.push(lint_cache);
        }

        if self.fs.exists(&self.layout.dist_root) {
            self.fs.remove_dir_all(&self.layout.dist_root)?;
            removed.push(self.layout.dist_root.clone());
        }

        debug!(count = removed.len(), "purged caches");
        Ok(removed)
    }

    /// Compute the change set and the manifest to commit on success
    pub fn resolve(&self) -> EsmcResult<Resolution> {
        let files = self.enumerate()?;
        let previous = self.repo.load_or_new(&self.layout.manifest_path());

        let mut next = Manifest::new();
        let mut changed = Vec::new();
        for file in &files {
            let fingerprint = self.fs.fingerprint(file)?;
            let key = manifest_key(&self.layout.project_root, file);
            if previous.is_stale(&key, &fingerprint) {
                trace!(%key, "changed");
                changed.push(file.clone());
            }
            next.set(key, fingerprint);
        }

        let change_set = ChangeSet::new(changed);
        debug!(
            total = files.len(),
            changed = change_set.len(),
            "resolved change set"
        );

        Ok(Resolution {
            change_set,
            total: files.len(),
            writer: ManifestWriter {
                path: self.layout.manifest_path(),
                manifest: next,
            },
        })
    }

    /// Every source file under the active source root, sorted
    fn enumerate(&self) -> EsmcResult<Vec<PathBuf>> {
        let root = &self.layout.source_root;
        if !self.fs.exists(root) {
            return Err(EsmcError::SourceRootNotFound { path: root.clone() });
        }

        let ignore = Arc::clone(&self.ignore);
        let filter_root = root.clone();
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .filter_entry(move |entry| {
                let Ok(rel) = entry.path().strip_prefix(&filter_root) else {
                    return true;
                };
                if rel.as_os_str().is_empty() {
                    return true;
                }
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                !ignore.is_ignored(rel, is_dir)
            });

        let mut files = Vec::new();
        for entry in builder.build() {
            let entry = entry?;
            let Some(file_type) = entry.file_type() else {
                continue;
            };
            // Links to files count as sources; links to directories are not descended
            if file_type.is_symlink() && !entry.path().is_file() {
                debug!(path = %entry.path().display(), "skipping symlink that is not a file");
                continue;
            }
            if !file_type.is_file() && !file_type.is_symlink() {
                continue;
            }
            let path = entry.into_path();
            if self.layout.is_source_file(&path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

fn accepts(ignore: &IgnorePatterns, layout: &ProjectLayout, path: &Path) -> bool {
    if !layout.is_source_file(path) {
        return false;
    }
    match path.strip_prefix(&layout.source_root) {
        Ok(rel) => !ignore.is_ignored(rel, false),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Fingerprint;
    use crate::infrastructure::{LocalFs, TomlManifestRepository};
    use std::fs;
    use tempfile::TempDir;

    struct Fixture {
        dir: TempDir,
        layout: ProjectLayout,
        repo: TomlManifestRepository,
        fs: LocalFs,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            let root = dir.path().to_path_buf();
            let layout = ProjectLayout {
                source_root: root.join("src"),
                dist_root: root.join("dist"),
                cache_dir: root.join("node_modules/.cache/esmc"),
                extensions: vec!["js".to_string(), "mjs".to_string()],
                project_root: root,
            };
            fs::create_dir_all(&layout.source_root).unwrap();
            Self {
                dir,
                layout,
                repo: TomlManifestRepository::new(),
                fs: LocalFs::new(),
            }
        }

        fn write(&self, rel: &str, content: &str) -> PathBuf {
            let path = self.dir.path().join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, content).unwrap();
            path
        }

        fn resolver(&self) -> ChangeSetResolver<'_, TomlManifestRepository, LocalFs> {
            ChangeSetResolver::new(&self.layout, &self.repo, &self.fs).unwrap()
        }
    }

    #[test]
    fn cold_start_includes_every_source_file() {
        let fx = Fixture::new();
        let a = fx.write("src/a.js", "a");
        let b = fx.write("src/lib/b.mjs", "b");
        fx.write("src/README.md", "docs");

        let resolution = fx.resolver().resolve().unwrap();

        assert_eq!(resolution.total, 2);
        assert_eq!(resolution.change_set.files(), &[a, b]);
        assert_eq!(resolution.writer.manifest().len(), 2);
        assert!(resolution.writer.manifest().get("src/a.js").is_some());
    }

    #[test]
    fn unchanged_files_are_excluded_after_commit() {
        let fx = Fixture::new();
        fx.write("src/a.js", "a");
        let b = fx.write("src/b.js", "b");

        let first = fx.resolver().resolve().unwrap();
        first.writer.commit(&fx.repo).unwrap();

        fx.write("src/b.js", "b changed");
        let second = fx.resolver().resolve().unwrap();

        assert_eq!(second.change_set.files(), &[b]);
        // Unchanged files are still carried into the next manifest
        assert_eq!(second.writer.manifest().len(), 2);
        assert_eq!(
            second.writer.manifest().get("src/b.js"),
            Some(&Fingerprint::from_bytes(b"b changed"))
        );
    }

    #[test]
    fn deleted_files_drop_out_of_prepared_manifest() {
        let fx = Fixture::new();
        let a = fx.write("src/a.js", "a");
        fx.write("src/b.js", "b");
        fx.resolver().resolve().unwrap().writer.commit(&fx.repo).unwrap();

        fs::remove_file(&a).unwrap();
        let resolution = fx.resolver().resolve().unwrap();

        assert!(resolution.change_set.is_empty());
        assert!(resolution.writer.manifest().get("src/a.js").is_none());
        assert_eq!(resolution.writer.manifest().len(), 1);
    }

    #[test]
    fn ignored_paths_are_skipped() {
        let fx = Fixture::new();
        let kept = fx.write("src/a.js", "a");
        fx.write("src/.hidden.js", "h");
        fx.write("src/.cache/c.js", "c");
        fx.write("src/node_modules/dep/index.js", "d");
        fx.write("src/generated/g.js", "g");
        fx.write(".esmcignore", "generated/\n");

        let resolution = fx.resolver().resolve().unwrap();

        assert_eq!(resolution.change_set.files(), &[kept]);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_source_files_are_enumerated() {
        let fx = Fixture::new();
        let a = fx.write("src/a.js", "a");
        let shared = fx.write("shared/util.js", "util");
        fx.write("shared/nested/n.js", "n");
        let link = fx.layout.source_root.join("util.js");
        std::os::unix::fs::symlink(&shared, &link).unwrap();
        std::os::unix::fs::symlink(
            fx.dir.path().join("shared/nested"),
            fx.layout.source_root.join("nested"),
        )
        .unwrap();

        let resolution = fx.resolver().resolve().unwrap();

        assert_eq!(resolution.change_set.files(), &[a, link]);
        assert_eq!(
            resolution.writer.manifest().get("src/util.js"),
            Some(&Fingerprint::from_bytes(b"util"))
        );
    }

    #[test]
    fn accepts_applies_extension_and_ignore_rules() {
        let fx = Fixture::new();
        let resolver = fx.resolver();

        assert!(resolver.accepts(&fx.layout.source_root.join("a.js")));
        assert!(!resolver.accepts(&fx.layout.source_root.join(".a.js")));
        assert!(!resolver.accepts(&fx.layout.source_root.join("a.css")));
        assert!(!resolver.accepts(&fx.dir.path().join("other/a.js")));
    }

    #[test]
    fn missing_source_root_is_an_error() {
        let fx = Fixture::new();
        fs::remove_dir_all(&fx.layout.source_root).unwrap();

        let err = fx.resolver().resolve().unwrap_err();
        assert!(matches!(err, EsmcError::SourceRootNotFound { .. }));
    }

    #[test]
    fn purge_removes_manifest_lint_cache_and_dist() {
        let fx = Fixture::new();
        fx.write("src/a.js", "a");
        fx.resolver().resolve().unwrap().writer.commit(&fx.repo).unwrap();
        fx.write("node_modules/.cache/esmc/.esmc-cache-lint", "{}");
        fx.write("dist/nodejs/a.js", "old");

        let removed = fx.resolver().purge_caches().unwrap();

        assert_eq!(removed.len(), 3);
        assert!(!fx.layout.manifest_path().exists());
        assert!(!fx.layout.lint_cache_path().exists());
        assert!(!fx.layout.dist_root.exists());

        let resolution = fx.resolver().resolve().unwrap();
        assert_eq!(resolution.change_set.len(), 1);
    }

    #[test]
    fn purge_with_nothing_to_remove() {
        let fx = Fixture::new();
        assert!(fx.resolver().purge_caches().unwrap().is_empty());
    }
}

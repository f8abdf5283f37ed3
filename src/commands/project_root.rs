use std::path::{Path, PathBuf};

use esmc::config::CONFIG_FILE_NAME;

/// Discover the project root directory from an invocation directory.
///
/// Heuristics (first match wins, walking upward from `start`):
/// - `esmc.toml`
/// - `package.json`
///
/// Falls back to `start` when no markers are found.
pub(crate) fn discover_project_root(start: &Path) -> PathBuf {
    for dir in start.ancestors() {
        if dir.join(CONFIG_FILE_NAME).is_file() {
            return dir.to_path_buf();
        }
        if dir.join("package.json").is_file() {
            return dir.to_path_buf();
        }
    }
    start.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn discover_project_root_prefers_nearest_marker() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        std::fs::write(root.join("package.json"), "{}").unwrap();
        std::fs::create_dir_all(root.join("packages/web/src")).unwrap();
        std::fs::write(root.join("packages/web/esmc.toml"), "").unwrap();

        let start = root.join("packages/web/src");
        assert_eq!(discover_project_root(&start), root.join("packages/web"));
    }

    #[test]
    fn discover_project_root_walks_up_to_package_json() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        std::fs::write(root.join("package.json"), "{}").unwrap();
        std::fs::create_dir_all(root.join("src/lib")).unwrap();

        assert_eq!(discover_project_root(&root.join("src/lib")), root.to_path_buf());
    }

    #[test]
    fn discover_project_root_falls_back_to_start() {
        let dir = tempdir().unwrap();
        let start = dir.path().join("a/b");
        std::fs::create_dir_all(&start).unwrap();

        assert_eq!(discover_project_root(&start), start);
    }
}

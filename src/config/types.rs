//! Configuration types

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ProjectLayout;

/// Project config file name
pub const CONFIG_FILE_NAME: &str = "esmc.toml";

/// Source and output locations, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub source: PathBuf,
    /// Source root used with `--dbg`
    pub debug_source: PathBuf,
    pub dist: PathBuf,
    pub cache_root: PathBuf,
    pub extensions: Vec<String>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("src"),
            debug_source: PathBuf::from("example-src"),
            dist: PathBuf::from("dist"),
            cache_root: PathBuf::from("node_modules/.cache"),
            extensions: vec!["js".to_string(), "mjs".to_string(), "jsx".to_string()],
        }
    }
}

impl LayoutConfig {
    /// Resolve against `project_root` for the given source mode
    pub fn resolve(&self, project_root: &Path, debug_source: bool) -> ProjectLayout {
        let source = if debug_source {
            &self.debug_source
        } else {
            &self.source
        };
        ProjectLayout {
            project_root: project_root.to_path_buf(),
            source_root: project_root.join(source),
            dist_root: project_root.join(&self.dist),
            cache_dir: project_root
                .join(&self.cache_root)
                .join(ProjectLayout::cache_dir_name(debug_source)),
            extensions: self
                .extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect(),
        }
    }
}

/// External programs backing each collaborator, as argv vectors.
///
/// An empty vector leaves the collaborator unconfigured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollaboratorsConfig {
    pub typecheck: Vec<String>,
    pub lint: Vec<String>,
    pub transform: Vec<String>,
    pub strip: Vec<String>,
    pub bridge: Vec<String>,
}

fn argv(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

impl Default for CollaboratorsConfig {
    fn default() -> Self {
        Self {
            typecheck: argv(&["flow", "check"]),
            lint: argv(&["eslint", "--cache", "--cache-location", "{lint_cache}"]),
            transform: argv(&["babel", "{file}"]),
            strip: argv(&["flow-remove-types", "{file}"]),
            bridge: argv(&["esmc-bridge"]),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default)]
    pub animation: AnimationMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Animation output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnimationMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub collaborators: CollaboratorsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

//! Tests for the config module

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::tempdir;

use super::loader::{overrides_from, suggestion_for};
use super::*;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.layout.source, PathBuf::from("src"));
    assert_eq!(config.layout.debug_source, PathBuf::from("example-src"));
    assert_eq!(config.layout.cache_root, PathBuf::from("node_modules/.cache"));
    assert_eq!(config.layout.extensions, vec!["js", "mjs", "jsx"]);
    assert_eq!(config.collaborators.transform, vec!["babel", "{file}"]);
    assert_eq!(config.output.color, ColorMode::Auto);
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[layout]
source = "lib"
extensions = ["js"]

[collaborators]
transform = ["swc", "{file}"]
typecheck = []

[output]
color = "never"
animation = "always"
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.layout.source, PathBuf::from("lib"));
    // Unset keys keep their defaults
    assert_eq!(config.layout.dist, PathBuf::from("dist"));
    assert_eq!(config.collaborators.transform, vec!["swc", "{file}"]);
    assert!(config.collaborators.typecheck.is_empty());
    assert_eq!(config.collaborators.lint[0], "eslint");
    assert_eq!(config.output.color, ColorMode::Never);
    assert_eq!(config.output.animation, AnimationMode::Always);
}

#[test]
fn test_load_with_warnings_reports_unknown_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "[layout]\nsorce = \"lib\"\n\n[output]\ncolor = \"auto\"\n").unwrap();

    let (config, warnings) = load_with_warnings(&path).unwrap();

    assert_eq!(config.layout.source, PathBuf::from("src"));
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "sorce");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("source"));
}

#[test]
fn test_load_with_warnings_rejects_invalid_toml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "[output]\ncolor = \"sometimes\"\n").unwrap();

    let err = load_with_warnings(&path).unwrap_err();
    assert!(matches!(err, crate::error::EsmcError::InvalidConfig { .. }));
}

#[test]
fn test_load_or_default_without_file() {
    let dir = tempdir().unwrap();
    let (config, warnings) = load_or_default(dir.path()).unwrap();

    assert!(warnings.is_empty());
    assert_eq!(config.layout.dist, PathBuf::from("dist"));
}

#[test]
fn test_env_overrides() {
    let config = overrides_from(
        Config::default(),
        &[
            ("ESMC_CACHE_ROOT", ".cache"),
            ("ESMC_SOURCE_DIR", "lib"),
            ("ESMC_NO_COLOR", "1"),
        ],
    );

    assert_eq!(config.layout.cache_root, PathBuf::from(".cache"));
    assert_eq!(config.layout.source, PathBuf::from("lib"));
    assert_eq!(config.output.color, ColorMode::Never);
}

#[test]
fn test_env_no_color_false_is_ignored() {
    let config = overrides_from(Config::default(), &[("ESMC_NO_COLOR", "false")]);
    assert_eq!(config.output.color, ColorMode::Auto);
}

#[test]
fn test_layout_resolve() {
    let layout = LayoutConfig::default().resolve(Path::new("/p"), false);

    assert_eq!(layout.source_root, PathBuf::from("/p/src"));
    assert_eq!(layout.dist_root, PathBuf::from("/p/dist"));
    assert_eq!(layout.cache_dir, PathBuf::from("/p/node_modules/.cache/esmc"));
}

#[test]
fn test_layout_resolve_debug_source() {
    let layout = LayoutConfig::default().resolve(Path::new("/p"), true);

    assert_eq!(layout.source_root, PathBuf::from("/p/example-src"));
    assert_eq!(
        layout.cache_dir,
        PathBuf::from("/p/node_modules/.cache/esmc-dbg")
    );
}

#[test]
fn test_layout_extensions_tolerate_leading_dot() {
    let layout = LayoutConfig {
        extensions: vec![".js".to_string()],
        ..LayoutConfig::default()
    }
    .resolve(Path::new("/p"), false);

    assert_eq!(layout.extensions, vec!["js"]);
}

#[test]
fn test_suggest_key() {
    assert_eq!(suggestion_for("trasform").as_deref(), Some("transform"));
    assert_eq!(suggestion_for("completely_unrelated"), None);
}

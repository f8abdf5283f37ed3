//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EsmcError, EsmcResult};

use super::types::{ColorMode, Config, CONFIG_FILE_NAME};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// The unknown key
    pub key: String,
    pub file: PathBuf,
    /// 1-indexed line, if the key could be located
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (unknown keys).
pub fn load_with_warnings(path: &Path) -> EsmcResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| EsmcError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load `esmc.toml` from the project root, or defaults when it is absent.
///
/// Environment overrides are applied either way. A config file that exists
/// but does not parse is an error.
pub fn load_or_default(project_root: &Path) -> EsmcResult<(Config, Vec<ConfigWarning>)> {
    let path = project_root.join(CONFIG_FILE_NAME);
    let (config, warnings) = if path.exists() {
        load_with_warnings(&path)?
    } else {
        (Config::default(), Vec::new())
    };
    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (ESMC_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |name| std::env::var(name).ok())
}

fn apply_overrides(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    // ESMC_CACHE_ROOT
    if let Some(root) = var("ESMC_CACHE_ROOT").filter(|v| !v.is_empty()) {
        config.layout.cache_root = PathBuf::from(root);
    }

    // ESMC_SOURCE_DIR
    if let Some(source) = var("ESMC_SOURCE_DIR").filter(|v| !v.is_empty()) {
        config.layout.source = PathBuf::from(source);
    }

    // ESMC_NO_COLOR
    if let Some(val) = var("ESMC_NO_COLOR") {
        if val != "0" && val.to_lowercase() != "false" {
            config.output.color = ColorMode::Never;
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "layout",
        "source",
        "debug_source",
        "dist",
        "cache_root",
        "extensions",
        "collaborators",
        "typecheck",
        "lint",
        "transform",
        "strip",
        "bridge",
        "output",
        "color",
        "animation",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            Some((_, best_dist)) if dist >= best_dist => best,
            _ => Some((candidate, dist)),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

#[cfg(test)]
pub(super) fn overrides_from(config: Config, vars: &[(&str, &str)]) -> Config {
    apply_overrides(config, |name| {
        vars.iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.to_string())
    })
}

#[cfg(test)]
pub(super) fn suggestion_for(key: &str) -> Option<String> {
    suggest_key(key)
}

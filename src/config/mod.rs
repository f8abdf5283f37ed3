//! Configuration module for esmc
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ESMC_*)
//! 3. Project config (`esmc.toml` at the project root)
//! 4. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{load_or_default, load_with_warnings, with_env_overrides, ConfigWarning};
pub use types::{
    AnimationMode, ColorMode, CollaboratorsConfig, Config, LayoutConfig, OutputConfig,
    CONFIG_FILE_NAME,
};

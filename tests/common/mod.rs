//! Common test utilities for esmc CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project in a temp directory plus helpers to run esmc
//! - Fixtures: an `esmc.toml` wiring every collaborator to a shell script

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;

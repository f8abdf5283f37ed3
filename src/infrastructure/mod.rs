//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system
//! - `repositories/` - Manifest persistence
//! - `collaborators/` - External tools driven as child processes
//! - `events/` - Pipeline event sinks

pub mod collaborators;
pub mod events;
pub mod fs;
pub mod repositories;

pub use collaborators::{CommandContext, CommandSpec};
pub use events::JsonEventSink;
pub use fs::{LocalFs, RunLock};
pub use repositories::TomlManifestRepository;

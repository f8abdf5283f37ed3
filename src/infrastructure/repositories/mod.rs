//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod manifest;

pub use manifest::TomlManifestRepository;

//! Domain Layer
//!
//! Pure build-orchestration concepts without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Manifest and ChangeSet
//! - `value_objects/` - Fingerprint, profiles, stages, pipeline configuration
//! - `services/` - Destination derivation, diagnostic reformatting
//! - `ports/` - Interface definitions for infrastructure and collaborators

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

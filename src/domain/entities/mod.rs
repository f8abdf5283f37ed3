//! Domain Entities

mod change_set;
mod manifest;

pub use change_set::ChangeSet;
pub use manifest::{manifest_key, Manifest};

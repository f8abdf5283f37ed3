//! Command handlers for the esmc binary

pub mod pipeline;
mod project_root;

pub use pipeline::cmd_pipeline;
pub(crate) use project_root::discover_project_root;

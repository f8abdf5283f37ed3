//! Terminal UI
//!
//! Everything the binary prints goes through here: capability detection,
//! design tokens, the per-stage progress display and error rendering.

pub mod blocks;
pub mod context;
pub mod error;
pub mod json;
pub mod live_region;
pub mod output;
pub mod primitives;
pub mod progress;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;

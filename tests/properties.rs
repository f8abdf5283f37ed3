//! Property tests for esmc.
//!
//! Properties use randomized input generation to protect path and
//! change-set invariants.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/change_set.rs"]
mod change_set;

#[path = "properties/destination.rs"]
mod destination;

#[path = "properties/manifest_keys.rs"]
mod manifest_keys;

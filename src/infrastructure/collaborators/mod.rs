//! Collaborator adapters
//!
//! Every collaborator port is backed by an external program configured in
//! `esmc.toml`. Options travel to the child through its own environment.

mod command;

pub use command::{
    CommandBridge, CommandContext, CommandLinter, CommandSpec, CommandStripper,
    CommandTransformer, CommandTypeChecker,
};

mod args;

/// Subcommand handlers.
pub mod commands;

pub use args::{Args, Command};

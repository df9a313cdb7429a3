//! CLI module - Command-line interface for the settings tool.
//!
//! Provides commands for:
//! - `show` - Print the effective settings
//! - `check` - Validate the configuration
//! - `get` - Print a single setting

pub mod args;

pub use args::{Cli, Commands};

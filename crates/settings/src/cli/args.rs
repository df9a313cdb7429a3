//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::SettingsLoader;

/// AgroVision settings - Inspect the effective service configuration
#[derive(Parser, Debug)]
#[command(name = "agrovision-settings")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Overlay file with KEY=VALUE lines (defaults to .env)
    #[arg(short = 'f', long, global = true, env = "AGROVISION_ENV_FILE")]
    pub env_file: Option<PathBuf>,

    /// Ignore any overlay file
    #[arg(long, global = true, conflicts_with = "env_file")]
    pub no_env_file: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Loader reading the process environment and the selected overlay
    pub fn loader(&self) -> SettingsLoader {
        let loader = SettingsLoader::new();
        match (&self.env_file, self.no_env_file) {
            (_, true) => loader.without_env_file(),
            (Some(path), false) => loader.env_file(path.clone()),
            (None, false) => loader,
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the effective settings with secrets redacted
    Show(ShowArgs),

    /// Validate the configuration and print a summary
    Check,

    /// Print a single setting
    Get(GetArgs),
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Emit JSON (secret fields omitted)
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the get command
#[derive(Parser, Debug)]
pub struct GetArgs {
    /// Setting name, case-insensitive (e.g. "max_concurrent_jobs").
    ///
    /// Typed values print in canonical form: `log_level` set to `WARN`
    /// prints `warning`.
    pub field: String,
}

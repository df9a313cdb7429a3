//! AgroVision settings - Operator tool entry point
//!
//! Loads the configuration exactly as the service does at startup and
//! dispatches to the requested command.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use agrovision_settings::{
    cli::{Cli, Commands},
    commands, LogLevel,
};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration; the final subscriber depends on it, so loader
    // diagnostics go through a temporary one
    let bootstrap = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(bootstrap_filter(cli.verbose)))
        .finish();
    let loaded = tracing::subscriber::with_default(bootstrap, || cli.loader().load());

    // Initialize tracing (verbose mode sets debug level)
    let log_level = loaded.as_ref().map(|s| s.log_level).unwrap_or_default();
    init_tracing(cli.verbose, log_level);

    let settings = match loaded {
        Ok(settings) => settings.into_shared(),
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!("Configuration loaded");

    // Execute command
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = match cli.command {
        Commands::Show(args) => commands::show::execute(args, &settings, &mut out),
        Commands::Check => commands::check::execute(&settings, &mut out),
        Commands::Get(args) => commands::get::execute(args, &settings, &mut out),
    };

    // Handle errors
    if let Err(e) = result {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}

fn bootstrap_filter(verbose: bool) -> String {
    if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string())
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool, log_level: LogLevel) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.as_filter().to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::new(filter))
        .init();
}

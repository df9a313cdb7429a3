//! Check command - Validates the configuration and prints a summary.
//!
//! Reaching this command means loading already succeeded; it only reports.

use std::io::Write;

use crate::config::Settings;
use crate::errors::AppResult;

/// Execute the check command
pub fn execute(settings: &Settings, out: &mut impl Write) -> AppResult<()> {
    for field in settings.insecure_defaults() {
        tracing::warn!(field, "Using built-in development value");
    }

    writeln!(
        out,
        "Configuration OK: environment={} node_env={} log_level={} max_concurrent_jobs={} processing_timeout={}s",
        settings.environment,
        settings.node_env,
        settings.log_level,
        settings.max_concurrent_jobs,
        settings.processing_timeout,
    )?;
    Ok(())
}

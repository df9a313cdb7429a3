//! Show command - Prints the effective settings.

use std::io::Write;

use crate::cli::args::ShowArgs;
use crate::config::Settings;
use crate::errors::AppResult;

/// Execute the show command
pub fn execute(args: ShowArgs, settings: &Settings, out: &mut impl Write) -> AppResult<()> {
    if args.json {
        serde_json::to_writer_pretty(&mut *out, settings)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{:#?}", settings)?;
    }
    Ok(())
}

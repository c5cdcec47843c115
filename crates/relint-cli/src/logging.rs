//! Logging initialization and color control.
//!
//! Sets up the tracing subscriber from CLI verbosity flags and disables
//! colors when requested, when `NO_COLOR` is set, or when machine-readable
//! output is selected.

use anyhow::Result;
use colored::control as color_control;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::cli::{Cli, OutputFormat};

/// Initialize the logging subsystem based on CLI flags.
///
/// JSON output suppresses info/warn logs to keep stdout/stderr clean
/// unless verbose was explicitly requested.
///
/// # Errors
///
/// Returns an error if the global tracing subscriber cannot be set.
pub fn initialize(cli: &Cli) -> Result<()> {
    let mut level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::WARN
    };

    let mut machine_output = false;
    if !cli.verbose && cli.format == OutputFormat::Json {
        level = Level::ERROR;
        machine_output = true;
    }

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let env_no_color = std::env::var("NO_COLOR").is_ok();
    if cli.no_color || env_no_color || machine_output {
        color_control::set_override(false);
    }
    Ok(())
}

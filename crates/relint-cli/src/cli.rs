//! CLI structure and argument parsing.
//!
//! relint is a single-command tool: point it at a documentation repo
//! containing `redirects.json`, optionally at the built site directory,
//! and it validates the redirect rules.
//!
//! ```bash
//! # Full validation against the built site
//! relint --docs-dir ./docs --site-dir site
//!
//! # Graph checks only (duplicates, loops, chains)
//! relint --docs-dir ./docs --skip-static-check
//!
//! # Machine-readable report on stdout
//! relint --docs-dir ./docs --format json
//! ```

use std::path::PathBuf;

use clap::builder::TypedValueParser as _;
use clap::{Parser, ValueEnum};

/// Command-line interface for the `relint` binary.
#[derive(Parser, Clone, Debug)]
#[command(name = "relint")]
#[command(version)]
#[command(
    about = "relint - Redirect validation for documentation sites",
    long_about = None
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Documentation repo directory (must contain redirects.json)
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub docs_dir: PathBuf,

    /// Built-site directory, resolved relative to the docs dir unless absolute
    ///
    /// An empty value is treated as "no site dir" by `resolve_site_dir`, so the
    /// parser must accept empty strings (clap's default `PathBuf` parser rejects
    /// them).
    #[arg(
        long,
        value_name = "DIR",
        default_value = "site",
        value_parser = clap::builder::OsStringValueParser::new().map(PathBuf::from)
    )]
    pub site_dir: PathBuf,

    /// Only validate duplicates, loops, and chains
    #[arg(long)]
    pub skip_static_check: bool,

    /// Write redirect_report.json into the docs dir and print its path
    #[arg(long)]
    pub report: bool,

    /// Output format for the validation summary
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Disable all ANSI colors in output (also respects `NO_COLOR` env)
    #[arg(long = "no-color")]
    pub no_color: bool,
}

/// How the validation summary is rendered on stdout.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable summary with colors
    Text,
    /// The report as pretty-printed JSON
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["relint"]);

        assert_eq!(cli.docs_dir, PathBuf::from("."));
        assert_eq!(cli.site_dir, PathBuf::from("site"));
        assert!(!cli.skip_static_check);
        assert!(!cli.report);
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_flags_parse() {
        let cli = Cli::parse_from([
            "relint",
            "--docs-dir",
            "/srv/docs",
            "--site-dir",
            "/srv/docs/site",
            "--skip-static-check",
            "--format",
            "json",
        ]);

        assert_eq!(cli.docs_dir, PathBuf::from("/srv/docs"));
        assert!(cli.skip_static_check);
        assert_eq!(cli.format, OutputFormat::Json);
    }
}

//! relint CLI - redirect validation for documentation sites.
//!
//! Thin entry point: parse arguments, load `redirects.json`, run the
//! validator from relint-core, render the report, and map it to an exit
//! status (0 clean, 1 validation failures, 2 precondition errors).

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;

use relint_core::{RedirectValidator, ValidationConfig};

mod cli;
mod logging;
mod output;
mod rules;

use cli::{Cli, OutputFormat};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = logging::initialize(&cli) {
        eprintln!("{err:#}");
        return ExitCode::from(2);
    }

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::from(2)
        },
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let docs_dir = std::path::absolute(&cli.docs_dir)
        .with_context(|| format!("Failed to resolve docs dir {}", cli.docs_dir.display()))?;

    let redirects_path = docs_dir.join("redirects.json");
    if !redirects_path.is_file() {
        bail!("Redirects file not found: {}", redirects_path.display());
    }

    let rule_list = rules::load(&redirects_path)?;
    if rule_list.is_empty() {
        println!("No redirects found.");
        return Ok(ExitCode::SUCCESS);
    }

    let validator = RedirectValidator::new(ValidationConfig {
        skip_static_check: cli.skip_static_check,
        site_dir: resolve_site_dir(cli, &docs_dir),
    });
    let report = validator.run(&rule_list);

    match cli.format {
        OutputFormat::Text => output::print_text(&report),
        OutputFormat::Json => output::print_json(&report)?,
    }

    if cli.report {
        let path = output::write_report_file(&report, &docs_dir)?;
        println!("Report written to: {}", path.display());
    }

    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Resolve the site directory against the docs dir.
///
/// An empty `--site-dir` means no site dir at all; the validator then
/// reports the missing-site precondition instead of scanning the docs
/// dir itself.
fn resolve_site_dir(cli: &Cli, docs_dir: &std::path::Path) -> Option<PathBuf> {
    if cli.site_dir.as_os_str().is_empty() {
        return None;
    }
    Some(if cli.site_dir.is_absolute() {
        cli.site_dir.clone()
    } else {
        docs_dir.join(&cli.site_dir)
    })
}

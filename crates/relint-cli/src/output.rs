//! Rendering validation reports on stdout.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;

use relint_core::Report;

/// Print the human-readable validation summary.
pub fn print_text(report: &Report) {
    println!("{}", "Redirect validation summary".bold());
    println!(
        "- redirects: {} (unique: {})",
        report.total_rules, report.unique_rules
    );

    let failures = report.failures.len().to_string();
    let warnings = report.warnings.len().to_string();
    println!(
        "- failures: {}",
        if report.failures.is_empty() {
            failures.green()
        } else {
            failures.red()
        }
    );
    println!(
        "- warnings: {}",
        if report.warnings.is_empty() {
            warnings.normal()
        } else {
            warnings.yellow()
        }
    );

    if !report.failures.is_empty() {
        println!("{}", "Failures:".bold());
        for item in &report.failures {
            println!("  - {}", item.red());
        }
    }
    if !report.warnings.is_empty() {
        println!("{}", "Warnings:".bold());
        for item in &report.warnings {
            println!("  - {}", item.yellow());
        }
    }

    if report.loops > 0 {
        println!("- loops: {}", report.loops);
    }
    if report.chains > 0 {
        println!("- chains > 1 hop: {}", report.chains);
    }
}

/// Print the report as pretty-printed JSON.
///
/// # Errors
///
/// Fails when the report cannot be serialized.
pub fn print_json(report: &Report) -> Result<()> {
    println!("{}", report.to_json()?);
    Ok(())
}

/// Write the JSON report next to the rule file and return its path.
///
/// # Errors
///
/// Fails when the report cannot be serialized or written.
pub fn write_report_file(report: &Report, docs_dir: &Path) -> Result<PathBuf> {
    let path = docs_dir.join("redirect_report.json");
    let json = report.to_json()?;
    fs::write(&path, format!("{json}\n"))
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    Ok(path)
}

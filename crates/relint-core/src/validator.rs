//! Redirect validation: the three passes and their report.
//!
//! Passes run in a fixed order and accumulate findings into one
//! [`Report`]; validation never stops at the first defect. The only early
//! exit is the static pass when its site-directory precondition fails, in
//! which case the precondition itself is a failure and the other passes
//! still contribute to the same report.

use std::path::PathBuf;

use tracing::debug;

use crate::graph::{self, GraphAnalysis, RedirectMap};
use crate::normalize::{has_scheme, strip_query_fragment};
use crate::site::SiteInventory;
use crate::types::{Report, Rule};

/// Validation configuration.
///
/// Paths are explicit; the validator never consults the process working
/// directory or any implicit default location.
#[derive(Debug, Clone, Default)]
pub struct ValidationConfig {
    /// Only validate duplicates, loops, and chains.
    pub skip_static_check: bool,
    /// Root of the built site for the static cross-check.
    pub site_dir: Option<PathBuf>,
}

/// Validates a rule set against a [`ValidationConfig`].
///
/// Each call to [`run`](Self::run) builds every structure fresh from the
/// supplied rules; nothing persists between runs, and identical inputs
/// yield identical reports.
///
/// ```
/// use relint_core::{RedirectValidator, Rule, ValidationConfig};
///
/// let validator = RedirectValidator::new(ValidationConfig {
///     skip_static_check: true,
///     site_dir: None,
/// });
/// let report = validator.run(&[Rule::new("/old/", "/new/")]);
/// assert!(report.is_success());
/// ```
#[derive(Debug)]
pub struct RedirectValidator {
    config: ValidationConfig,
}

impl RedirectValidator {
    /// Create a validator with the given configuration.
    #[must_use]
    pub const fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Validate a rule set, scanning the configured site directory for the
    /// static pass when one is required.
    #[must_use]
    pub fn run(&self, rules: &[Rule]) -> Report {
        self.run_inner(rules, None)
    }

    /// Validate a rule set against a pre-built site inventory.
    ///
    /// Skips the directory scan; useful when several rule sets are checked
    /// against the same built site, or in tests. Ignored when
    /// `skip_static_check` is set.
    #[must_use]
    pub fn run_with_inventory(&self, rules: &[Rule], inventory: &SiteInventory) -> Report {
        self.run_inner(rules, Some(inventory))
    }

    /// Per-source classification map, for tooling and debugging.
    ///
    /// Not part of the pass/fail contract; the report only carries the
    /// aggregate chain and loop counts.
    #[must_use]
    pub fn classify(&self, rules: &[Rule]) -> GraphAnalysis {
        let (map, _) = RedirectMap::build(rules);
        graph::analyze(&map)
    }

    fn run_inner(&self, rules: &[Rule], inventory: Option<&SiteInventory>) -> Report {
        let mut failures = Vec::new();
        let mut warnings = Vec::new();

        // Pass 1: normalization and duplicate detection.
        let (map, duplicates) = RedirectMap::build(rules);
        for source in &duplicates {
            failures.push(format!("Duplicate redirect from {source}"));
        }

        // Pass 2: graph analysis.
        let analysis = graph::analyze(&map);
        if analysis.loops > 0 {
            failures.push(format!("Redirect loops detected: {}", analysis.loops));
        }
        if analysis.chains > 0 {
            failures.push(format!(
                "Redirect chains longer than 1 hop: {}",
                analysis.chains
            ));
        }

        // Pass 3: static cross-check, unless skipped or its precondition
        // fails (which is itself a failure).
        if !self.config.skip_static_check {
            let scanned;
            let inventory = match inventory {
                Some(inventory) => Some(inventory),
                None => match self.scan_site(&mut failures) {
                    Some(inventory) => {
                        scanned = inventory;
                        Some(&scanned)
                    },
                    None => None,
                },
            };

            if let Some(inventory) = inventory {
                static_cross_check(rules, inventory, &mut failures, &mut warnings);
            }
        }

        debug!(
            rules = rules.len(),
            unique = map.len(),
            failures = failures.len(),
            warnings = warnings.len(),
            "validation complete"
        );

        Report {
            failures,
            warnings,
            total_rules: rules.len(),
            unique_rules: map.len(),
            chains: analysis.chains,
            loops: analysis.loops,
        }
    }

    fn scan_site(&self, failures: &mut Vec<String>) -> Option<SiteInventory> {
        let Some(site_dir) = self.config.site_dir.as_deref() else {
            failures.push("Site dir is required unless static checks are skipped".to_string());
            return None;
        };
        if !site_dir.is_dir() {
            failures.push(format!("Site dir does not exist: {}", site_dir.display()));
            return None;
        }
        match SiteInventory::scan(site_dir) {
            Ok(inventory) => Some(inventory),
            Err(err) => {
                failures.push(format!(
                    "Failed to scan site dir {}: {err}",
                    site_dir.display()
                ));
                None
            },
        }
    }
}

/// Check every rule's endpoints against the built site.
///
/// Runs over the raw rule list in input order, duplicates included, so
/// message order is stable across runs.
fn static_cross_check(
    rules: &[Rule],
    inventory: &SiteInventory,
    failures: &mut Vec<String>,
    warnings: &mut Vec<String>,
) {
    for rule in rules {
        check_target(&rule.destination, inventory, failures, warnings);
        check_source_not_exists(&rule.source, inventory, failures);
    }
}

/// A destination must resolve to a real file unless it is external.
fn check_target(
    destination: &str,
    inventory: &SiteInventory,
    failures: &mut Vec<String>,
    warnings: &mut Vec<String>,
) {
    if has_scheme(destination) {
        return;
    }

    let target_path = strip_query_fragment(destination);
    match inventory.target_candidate(target_path) {
        Some(candidate) => {
            if !inventory.contains(&candidate) {
                failures.push(format!("Missing target file: {}", candidate.display()));
            }
        },
        None => {
            warnings.push(format!(
                "Target without trailing slash or .html: {target_path}"
            ));
        },
    }
}

/// A redirect whose source collides with real content will never fire.
fn check_source_not_exists(source: &str, inventory: &SiteInventory, failures: &mut Vec<String>) {
    let candidate = inventory.source_candidate(strip_query_fragment(source));
    if inventory.contains(&candidate) {
        failures.push(format!(
            "Redirect source exists as file (conflict): {}",
            candidate.display()
        ));
    }
}

//! Core data types for redirect validation.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A single redirect rule as supplied by the caller.
///
/// Sources are not assumed unique or normalized; canonicalization happens
/// inside the validator. Destinations stay raw: they may be site-relative
/// paths or absolute external URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Path requests are redirected from.
    pub source: String,
    /// Path or URL requests are redirected to.
    pub destination: String,
}

impl Rule {
    /// Create a rule from a source/destination pair.
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

/// How a redirect source resolves when its chain is followed to the end.
///
/// Derived per normalized source by the graph analyzer. Exposed for
/// tooling and debugging; the pass/fail contract only uses the aggregate
/// counts in [`Report`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Redirect edges traversed before reaching a terminal destination.
    ///
    /// Always 0 for looped sources.
    pub hops: usize,
    /// Whether following this source revisits a node and never terminates.
    pub looped: bool,
}

impl Classification {
    /// Whether this source needs more than one hop to terminate.
    ///
    /// Loops are never counted as chains, even when they are reachable
    /// through a longer path.
    #[must_use]
    pub const fn is_chain(&self) -> bool {
        self.hops > 1 && !self.looped
    }
}

/// Structured result of one validation run.
///
/// `failures` make the run fail; `warnings` do not. Both lists preserve
/// the order findings were produced in, so identical inputs yield
/// byte-identical reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Defects that must fail the run.
    pub failures: Vec<String>,
    /// Advisory findings that do not fail the run.
    pub warnings: Vec<String>,
    /// Number of rules supplied, duplicates included.
    #[serde(rename = "redirects_total")]
    pub total_rules: usize,
    /// Number of distinct normalized sources.
    #[serde(rename = "redirects_unique")]
    pub unique_rules: usize,
    /// Sources that resolve in more than one hop without looping.
    pub chains: usize,
    /// Sources whose resolution never terminates.
    pub loops: usize,
}

impl Report {
    /// Whether the run passed, i.e. no failures were recorded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Render the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Error::from)
    }
}

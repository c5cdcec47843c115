//! # relint-core
//!
//! Core functionality for relint - a redirect-graph validator for
//! documentation sites.
//!
//! Given an ordered list of redirect rules, relint detects structural
//! defects (duplicate sources, redirect loops, multi-hop chains) and can
//! cross-reference rule endpoints against a built static site to catch
//! broken or conflicting redirects.
//!
//! ## Architecture
//!
//! Validation is organized into three passes that feed one report:
//!
//! - **Normalization & duplicates**: canonicalize source paths, reject
//!   duplicates (last write wins in the map)
//! - **Graph analysis**: classify every source as terminal, chained, or
//!   looped via an iterative two-phase traversal
//! - **Static cross-check** (optional): verify destinations resolve to
//!   real files and sources do not collide with real content
//!
//! ## Quick Start
//!
//! ```rust
//! use relint_core::{RedirectValidator, Rule, ValidationConfig};
//!
//! let validator = RedirectValidator::new(ValidationConfig {
//!     skip_static_check: true,
//!     site_dir: None,
//! });
//!
//! let rules = vec![
//!     Rule::new("/old-guide/", "/guide/"),
//!     Rule::new("/old-faq/", "https://example.com/faq/"),
//! ];
//!
//! let report = validator.run(&rules);
//! assert!(report.is_success());
//! assert_eq!(report.unique_rules, 2);
//! ```
//!
//! ## Error Handling
//!
//! Validation findings are data, not errors: they land in
//! [`Report::failures`] and [`Report::warnings`], and the validator never
//! stops at the first defect. [`Error`] covers operational failures only,
//! such as an unreadable site tree.

/// Error types and result aliases
pub mod error;
/// Redirect-map construction and chain/loop classification
pub mod graph;
/// Path normalization helpers
pub mod normalize;
/// Built-site file inventory
pub mod site;
/// Core data types: rules, classifications, reports
pub mod types;
/// Validation passes and orchestration
pub mod validator;

// Re-export commonly used types
pub use error::{Error, Result};
pub use graph::{GraphAnalysis, RedirectMap};
pub use site::SiteInventory;
pub use types::{Classification, Report, Rule};
pub use validator::{RedirectValidator, ValidationConfig};

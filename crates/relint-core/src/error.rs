//! Error types and handling for relint-core operations.
//!
//! Validation findings (duplicate sources, loops, missing target files, ...)
//! are *not* errors: they are collected into a [`crate::Report`]. The error
//! type here covers operational failures only, such as an unreadable site
//! tree or a report that cannot be serialized.
//!
//! ## Error Categories
//!
//! - **I/O Errors**: file system operations while scanning the site tree
//! - **Parse Errors**: rule data that cannot be interpreted
//! - **Configuration Errors**: invalid validator configuration
//! - **Serialization Errors**: report encoding failures

use thiserror::Error;

/// The main error type for relint-core operations.
///
/// All fallible public functions in relint-core return `Result<T, Error>`.
/// Errors maintain the full source chain through `source()` where an
/// underlying error exists.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed.
    ///
    /// Covers file system operations such as walking the built-site tree.
    /// The underlying `std::io::Error` is preserved.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Rule data could not be interpreted.
    ///
    /// Occurs when redirect rules are structurally unusable, for example
    /// entries that are not string pairs.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Validator configuration is invalid.
    ///
    /// Occurs when configuration values are contradictory or out of range.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested resource was not found.
    ///
    /// Used for missing files or directories that a caller asked relint to
    /// operate on directly.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Serialization or deserialization failed.
    ///
    /// Occurs when converting a report or rule set to or from JSON fails.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic error for uncategorized failures.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl Error {
    /// Get the error category as a string identifier.
    ///
    /// Returns a static string that categorizes the error type for logging
    /// and error-handling logic.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Parse(_) => "parse",
            Self::Config(_) => "config",
            Self::NotFound(_) => "not_found",
            Self::Serialization(_) => "serialization",
            Self::Other(_) => "other",
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display_formatting() {
        let cases = vec![
            (Error::Parse("bad entry".to_string()), "Parse error"),
            (Error::Config("missing field".to_string()), "Configuration error"),
            (Error::NotFound("site dir".to_string()), "Not found"),
            (
                Error::Serialization("bad json".to_string()),
                "Serialization error",
            ),
        ];

        for (error, prefix) in cases {
            let rendered = error.to_string();
            assert!(
                rendered.starts_with(prefix),
                "expected '{rendered}' to start with '{prefix}'"
            );
        }

        // Other passes its message through unchanged.
        assert_eq!(Error::Other("plain".to_string()).to_string(), "plain");
    }

    #[test]
    fn test_error_categories() {
        let cases = vec![
            (Error::Io(io::Error::other("x")), "io"),
            (Error::Parse("x".to_string()), "parse"),
            (Error::Config("x".to_string()), "config"),
            (Error::NotFound("x".to_string()), "not_found"),
            (Error::Serialization("x".to_string()), "serialization"),
            (Error::Other("x".to_string()), "other"),
        ];

        for (error, expected) in cases {
            assert_eq!(error.category(), expected);
        }
    }

    #[test]
    fn test_error_chain_source() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let error: Error = io_error.into();

        let source = std::error::Error::source(&error);
        assert!(source.is_some());
        assert!(source.unwrap().to_string().contains("access denied"));
    }

    #[test]
    fn test_serde_json_error_converts_to_serialization() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error: Error = json_err.into();

        assert_eq!(error.category(), "serialization");
    }
}

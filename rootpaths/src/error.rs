//! Error types for the rootpaths library.
//!
//! This module provides the error hierarchy for path resolution,
//! configuration loading and log file handling, using `thiserror` for
//! ergonomic error handling.

use thiserror::Error;

/// Result type alias for operations that may fail with a rootpaths error.
///
/// # Examples
///
/// ```
/// use rootpaths::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/var/www/app".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the rootpaths library.
#[derive(Debug, Error)]
pub enum Error {
    /// A resolved path is not an existing directory (strict validation only).
    #[error("Configured path for \"{category}\" is not a valid directory: {path}")]
    InvalidPath {
        /// The category (or custom name) the path was resolved for.
        category: String,
        /// The offending path.
        path: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error in {path}: {source}")]
    Configuration {
        /// The file that failed to parse.
        path: String,
        /// The underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },

    /// A JSON document could not be produced.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A YAML document could not be produced.
    #[error("serialization error: {0}")]
    YamlSerialization(#[source] serde_yaml::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error is a strict validation failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use rootpaths::Error;
    ///
    /// let err = Error::InvalidPath {
    ///     category: "config".to_string(),
    ///     path: "/nonexistent".to_string(),
    /// };
    /// assert!(err.is_invalid_path());
    /// ```
    #[must_use]
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, Self::InvalidPath { .. })
    }

    /// Returns the category named by an `InvalidPath` error.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        match self {
            Self::InvalidPath { category, .. } => Some(category),
            _ => None,
        }
    }
}

//! Configuration validation.

use crate::config::schema::PathsConfig;
use crate::error::{Error, Result};

/// Validates a merged configuration.
///
/// # Examples
///
/// ```
/// use rootpaths::config::{ConfigValidator, PathsConfig};
///
/// ConfigValidator::validate(&PathsConfig::default()).unwrap();
///
/// let bad = PathsConfig { root: Some(String::new()), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when the root is empty, or when a path
    /// override has an invalid name or an empty value.
    pub fn validate(config: &PathsConfig) -> Result<()> {
        if let Some(root) = &config.root {
            if root.trim().is_empty() {
                return Err(Error::Validation {
                    field: "root".into(),
                    message: "cannot be empty".into(),
                });
            }
        }

        for (name, path) in config.paths.iter().flatten() {
            Self::validate_name(name)?;
            if path.trim().is_empty() {
                return Err(Error::Validation {
                    field: format!("paths.{name}"),
                    message: "path cannot be empty".into(),
                });
            }
        }

        Ok(())
    }

    /// Validate a path override name.
    ///
    /// Names consist of lowercase ASCII letters, digits, `_` and `-`.
    pub fn validate_name(name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::Validation {
                field: "paths".into(),
                message: "override name cannot be empty".into(),
            });
        }

        if let Some(c) = name
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_' || *c == '-'))
        {
            return Err(Error::Validation {
                field: format!("paths.{name}"),
                message: format!("invalid character '{c}' in override name"),
            });
        }

        Ok(())
    }
}

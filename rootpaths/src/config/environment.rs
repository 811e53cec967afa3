//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `ROOTPATHS_*` environment variables that
//! override configuration file values.

use crate::config::schema::PathsConfig;
use crate::error::{Error, Result};
use std::env;

/// Overrides the project root.
pub const ENV_ROOT: &str = "ROOTPATHS_ROOT";

/// Enables or disables auto-discovery.
pub const ENV_AUTO_DISCOVER: &str = "ROOTPATHS_AUTO_DISCOVER";

/// Enables or disables strict validation.
pub const ENV_VALIDATE: &str = "ROOTPATHS_VALIDATE";

/// Prefix of per-path overrides, e.g. `ROOTPATHS_PATH_VIEWS`.
pub const ENV_PATH_PREFIX: &str = "ROOTPATHS_PATH_";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use rootpaths::config::{EnvironmentConfig, PathsConfig};
///
/// let mut config = PathsConfig::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if a boolean variable holds an unrecognized value.
    pub fn apply_overrides(config: &mut PathsConfig) -> Result<()> {
        Self::apply_vars(config, env::vars())
    }

    /// Apply overrides from an explicit set of variables.
    ///
    /// Variables outside the `ROOTPATHS_` namespace are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if a boolean variable holds an unrecognized value.
    ///
    /// # Examples
    ///
    /// ```
    /// use rootpaths::config::{EnvironmentConfig, PathsConfig};
    ///
    /// let mut config = PathsConfig::default();
    /// EnvironmentConfig::apply_vars(
    ///     &mut config,
    ///     [("ROOTPATHS_PATH_VIEWS".to_string(), "/srv/views".to_string())],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(config.overrides().get("views"), Some("/srv/views"));
    /// ```
    pub fn apply_vars<I>(config: &mut PathsConfig, vars: I) -> Result<()>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            match key.as_str() {
                ENV_ROOT => config.root = Some(value),
                ENV_AUTO_DISCOVER => {
                    config.auto_discover = Some(Self::parse_bool(ENV_AUTO_DISCOVER, &value)?);
                }
                ENV_VALIDATE => config.validate = Some(Self::parse_bool(ENV_VALIDATE, &value)?),
                _ => {
                    if let Some(name) = key.strip_prefix(ENV_PATH_PREFIX) {
                        if !name.is_empty() {
                            log::debug!("path override {name} from environment");
                            config
                                .paths
                                .get_or_insert_with(Default::default)
                                .insert(name.to_lowercase(), value);
                        }
                    }
                }
            }
        }

        Ok(())
    }

    /// Parse boolean from string.
    ///
    /// Accepts: true/false, 1/0, yes/no, on/off (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}

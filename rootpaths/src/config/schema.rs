//! Configuration schema definitions.
//!
//! This module defines the configuration structure read from
//! `rootpaths.yaml` files, environment variables and programmatic overrides.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::Result;
use crate::path::ResolvedPaths;
use crate::registry::Paths;

/// Complete configuration structure.
///
/// Every field is optional so that partial configurations from several
/// sources can be merged; unset fields fall back to built-in defaults when
/// the configuration is turned into [`Paths`].
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use rootpaths::config::PathsConfig;
///
/// let config = PathsConfig {
///     root: Some("/var/www/app".to_string()),
///     auto_discover: Some(false),
///     paths: Some(BTreeMap::from([(
///         "views".to_string(),
///         "/var/www/shared/views".to_string(),
///     )])),
///     ..Default::default()
/// };
///
/// let paths = config.into_paths("/ignored").unwrap();
/// assert_eq!(paths.root_path(), "/var/www/app");
/// assert_eq!(paths.views_path(), "/var/www/shared/views");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    /// Project root directory.
    pub root: Option<String>,

    /// Probe the root for conventionally named directories.
    pub auto_discover: Option<bool>,

    /// Fail when a resolved path is not an existing directory.
    pub validate: Option<bool>,

    /// Path overrides by category or custom name.
    pub paths: Option<BTreeMap<String, String>>,
}

impl PathsConfig {
    /// Whether auto-discovery is enabled (default: true).
    #[must_use]
    pub fn auto_discover_enabled(&self) -> bool {
        self.auto_discover.unwrap_or(true)
    }

    /// Whether strict validation is enabled (default: false).
    #[must_use]
    pub fn validate_enabled(&self) -> bool {
        self.validate.unwrap_or(false)
    }

    /// The configured overrides as a resolved path map.
    #[must_use]
    pub fn overrides(&self) -> ResolvedPaths {
        self.paths
            .iter()
            .flatten()
            .map(|(name, path)| (name.as_str(), path.as_str()))
            .collect()
    }

    /// Resolve the project layout described by this configuration.
    ///
    /// `default_root` is used when no root is configured.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPath`] when validation is enabled and
    /// a resolved path is missing.
    pub fn into_paths(self, default_root: &str) -> Result<Paths> {
        let root = self.root.as_deref().unwrap_or(default_root);
        Paths::new(
            root,
            &self.overrides(),
            self.auto_discover_enabled(),
            self.validate_enabled(),
        )
    }
}

//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::PathsConfig;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use rootpaths::config::{ConfigMerger, PathsConfig};
///
/// let low = PathsConfig { root: Some("/low".to_string()), ..Default::default() };
/// let high = PathsConfig { root: Some("/high".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.root, Some("/high".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> PathsConfig {
        let mut result = PathsConfig::default();

        for source in sources {
            log::debug!(
                "merging configuration from {} (precedence {})",
                source.path.display(),
                source.precedence
            );
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Scalar fields: source overwrites if Some
    /// - Path overrides: merged key by key, source wins per key
    pub fn merge_into(target: &mut PathsConfig, source: &PathsConfig) {
        if source.root.is_some() {
            target.root.clone_from(&source.root);
        }

        if source.auto_discover.is_some() {
            target.auto_discover = source.auto_discover;
        }

        if source.validate.is_some() {
            target.validate = source.validate;
        }

        if let Some(paths) = &source.paths {
            let merged = target.paths.get_or_insert_with(Default::default);
            for (name, path) in paths {
                merged.insert(name.clone(), path.clone());
            }
        }
    }
}

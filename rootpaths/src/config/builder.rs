//! Configuration builder.
//!
//! Assembles a [`PathsConfig`] from every source in precedence order:
//! built-in defaults, project files, environment, programmatic overrides.

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::{ConfigLoader, ConfigSource};
use crate::config::merger::ConfigMerger;
use crate::config::schema::PathsConfig;
use crate::config::validator::ConfigValidator;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Builder for a merged, validated configuration.
///
/// # Examples
///
/// ```
/// use rootpaths::config::{ConfigBuilder, PathsConfig};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(PathsConfig {
///         root: Some("/srv/app".to_string()),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.root.as_deref(), Some("/srv/app"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    config_file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    programmatic: Option<PathsConfig>,
}

impl ConfigBuilder {
    /// Create a builder that reads files and environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the configuration file search in `dir` instead of the current
    /// directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Load exactly this file instead of searching for project files.
    #[must_use]
    pub fn with_config_file(mut self, path: &Path) -> Self {
        self.config_file = Some(path.to_path_buf());
        self
    }

    /// Do not read configuration files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Do not read `ROOTPATHS_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Apply `config` on top of every other source.
    #[must_use]
    pub fn with_config(mut self, config: PathsConfig) -> Self {
        self.programmatic = Some(config);
        self
    }

    /// Build the merged configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read or parsed, if
    /// an environment variable is malformed, or if the merged result fails
    /// validation.
    pub fn build(self) -> Result<PathsConfig> {
        let sources = if self.skip_files {
            Vec::new()
        } else {
            self.load_sources()?
        };

        let mut config = ConfigMerger::merge(sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(programmatic) = &self.programmatic {
            ConfigMerger::merge_into(&mut config, programmatic);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    fn load_sources(&self) -> Result<Vec<ConfigSource>> {
        if let Some(path) = &self.config_file {
            let config = ConfigLoader::load_file(path)?;
            return Ok(vec![ConfigSource {
                path: path.clone(),
                precedence: 1,
                config,
            }]);
        }

        match &self.working_dir {
            Some(dir) => ConfigLoader::load_all(dir),
            None => ConfigLoader::load_all(&std::env::current_dir()?),
        }
    }
}

//! Configuration file discovery and loading.
//!
//! This module handles discovering and loading rootpaths configuration files
//! with proper precedence.

use crate::config::schema::PathsConfig;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the shared project configuration file.
pub const PROJECT_CONFIG_FILE: &str = "rootpaths.yaml";

/// Name of the private, uncommitted project configuration file.
pub const LOCAL_CONFIG_FILE: &str = "rootpaths.local.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
///
/// # Examples
///
/// ```
/// use rootpaths::config::ConfigSource;
/// use std::path::PathBuf;
///
/// let source = ConfigSource {
///     path: PathBuf::from("/srv/app/rootpaths.yaml"),
///     precedence: 1,
///     config: Default::default(),
/// };
/// assert!(source.config.root.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: PathsConfig,
}

/// Loads configuration from files.
///
/// # Examples
///
/// ```no_run
/// use rootpaths::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new(".")).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all project configuration files.
    ///
    /// Walks up from `working_dir` looking for:
    /// 1. `rootpaths.yaml` (precedence 1)
    /// 2. `rootpaths.local.yaml` (precedence 2)
    ///
    /// The returned sources are sorted lowest precedence first.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration file exists but cannot be read
    /// or parsed.
    pub fn load_all(working_dir: &Path) -> Result<Vec<ConfigSource>> {
        let mut sources = Self::discover_project_configs(working_dir)?;
        sources.sort_by_key(|s| s.precedence);
        Ok(sources)
    }

    /// Discover project configurations by walking up directories.
    ///
    /// Stops at the first directory containing either file.
    ///
    /// # Errors
    ///
    /// Returns an error if any discovered file cannot be read or parsed.
    pub fn discover_project_configs(start_dir: &Path) -> Result<Vec<ConfigSource>> {
        let mut configs = Vec::new();
        let mut current = start_dir.to_path_buf();

        loop {
            for (name, precedence) in [(PROJECT_CONFIG_FILE, 1), (LOCAL_CONFIG_FILE, 2)] {
                let candidate = current.join(name);
                if candidate.is_file() {
                    let config = Self::load_file(&candidate)?;
                    configs.push(ConfigSource {
                        path: candidate,
                        precedence,
                        config,
                    });
                }
            }

            if !configs.is_empty() || !current.pop() {
                break;
            }
        }

        Ok(configs)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// A relative `root` is resolved against the directory holding the file
    /// and a leading `~` is expanded to the home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<PathsConfig> {
        let contents = fs::read_to_string(path).map_err(|e| Error::Validation {
            field: path.display().to_string(),
            message: format!("Failed to read configuration file: {e}"),
        })?;

        let mut config: PathsConfig = if contents.trim().is_empty() {
            PathsConfig::default()
        } else {
            serde_yaml::from_str(&contents).map_err(|source| Error::Configuration {
                path: path.display().to_string(),
                source,
            })?
        };

        if let Some(root) = config.root.take() {
            let base = path.parent().unwrap_or_else(|| Path::new("."));
            config.root = Some(resolve_root(&root, base));
        }

        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }
}

/// Resolve a configured root against `base_dir`.
///
/// `~` and `~/...` expand to the home directory when it is known. Absolute
/// roots, including Windows drive paths, are returned unchanged.
#[must_use]
pub fn resolve_root(root: &str, base_dir: &Path) -> String {
    if let Some(rest) = root.strip_prefix('~') {
        if rest.is_empty() || rest.starts_with('/') {
            if let Some(home) = home::home_dir() {
                return format!("{}{rest}", home.display());
            }
        }
    }

    if is_absolute(root) {
        return root.to_string();
    }

    base_dir.join(root).display().to_string()
}

fn is_absolute(path: &str) -> bool {
    let bytes = path.as_bytes();
    path.starts_with('/')
        || path.starts_with('\\')
        || (bytes.len() >= 3
            && bytes[0].is_ascii_alphabetic()
            && bytes[1] == b':'
            && (bytes[2] == b'/' || bytes[2] == b'\\'))
}

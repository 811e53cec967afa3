//! Utility functions for CLI operations.
//!
//! This module provides the global options shared by every command and the
//! helpers that turn them into a configuration and a resolved layout.

use crate::error::CliError;
use rootpaths::config::{ConfigBuilder, PathsConfig};
use rootpaths::output::OutputFormat;
use rootpaths::{Paths, ResolvedPaths};
use std::env;
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Project root (defaults to the current directory).
    pub root: Option<PathBuf>,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,

    /// Disable auto-discovery.
    pub no_discover: bool,

    /// Fail when a resolved path is missing.
    pub strict: bool,
}

/// Make `path` absolute against the current directory.
///
/// A leading `~` expands to the home directory.
pub fn absolute(path: &Path) -> Result<PathBuf, CliError> {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = home::home_dir() {
            return Ok(home.join(rest));
        }
    }

    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(path))
    }
}

/// The root used when neither flags, environment nor files name one.
pub fn default_root() -> Result<String, CliError> {
    Ok(env::current_dir()?.to_string_lossy().into_owned())
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<PathsConfig, CliError> {
    let root = global.root.as_deref().map(absolute).transpose()?;

    let mut builder = ConfigBuilder::new();
    if let Some(dir) = &root {
        builder = builder.with_working_dir(dir);
    }
    if let Some(file) = &global.config {
        builder = builder.with_config_file(file);
    }

    let overrides = PathsConfig {
        root: root.map(|r| r.to_string_lossy().into_owned()),
        auto_discover: global.no_discover.then_some(false),
        validate: global.strict.then_some(true),
        paths: None,
    };

    builder
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Resolve the project layout described by the global options.
pub fn load_paths(global: &GlobalOptions) -> Result<Paths, CliError> {
    let config = load_configuration(global)?;
    Ok(config.into_paths(&default_root()?)?)
}

/// Render `paths` in `format`.
pub fn format_paths(format: OutputFormat, paths: &ResolvedPaths) -> Result<String, CliError> {
    Ok(format.create_formatter().format(paths)?)
}

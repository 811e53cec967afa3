//! Configuration system for rootpaths.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (`rootpaths.yaml`, `rootpaths.local.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`ROOTPATHS_*`)
//! 3. Private project config (`rootpaths.local.yaml`)
//! 4. Project config (`rootpaths.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use rootpaths::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//!
//! let paths = config.into_paths("/path/to/project").unwrap();
//! println!("views: {}", paths.views_path());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource, LOCAL_CONFIG_FILE, PROJECT_CONFIG_FILE};
pub use merger::ConfigMerger;
pub use schema::PathsConfig;
pub use validator::ConfigValidator;

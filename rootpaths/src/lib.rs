#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # rootpaths
//!
//! A registry of a web project's standard directories.
//!
//! Given a project root, this library resolves where configuration,
//! templates, assets, caches, logs, the public web root, database files,
//! migrations, storage and tests live. Defaults follow a conventional
//! layout, optional auto-discovery probes for common alternatives, and
//! explicit overrides win over both.
//!
//! ## Core Types
//!
//! - [`Paths`]: the resolved, immutable project layout
//! - [`PathNormalizer`], [`PathDiscoverer`], [`PathValidator`]: the pieces it
//!   is built from
//! - [`BasePathResolver`] and [`BasePathContext`]: URL prefix detection for
//!   applications served from a subdirectory
//! - [`PathsMiddleware`] and [`BasePathMiddleware`]: request pipeline glue
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`], [`LogLevel`] and [`LoggerFactory`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use rootpaths::Paths;
//!
//! let paths = Paths::builder("/var/www/app")
//!     .auto_discover(false)
//!     .with_override("views", "/var/www/shared/templates/")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(paths.config_path(), "/var/www/app/config");
//! assert_eq!(paths.views_path(), "/var/www/shared/templates");
//! assert_eq!(paths.path("config/app.php"), "/var/www/app/config/app.php");
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod output;
pub mod path;
pub mod provider;
pub mod registry;

// Re-export key types at crate root for convenience
pub use config::{ConfigBuilder, PathsConfig};
pub use error::{Error, Result};
pub use http::{
    detect_base_path, BasePathContext, BasePathMiddleware, BasePathResolver, BasePathTarget,
    Middleware, PathsMiddleware, RequestHandler, ServerMode, ServerRequest,
};
pub use logging::{init_logger, LogLevel, LogOutput, Logger, LoggerConfig, LoggerFactory};
pub use path::{Category, PathDiscoverer, PathNormalizer, PathValidator, ResolvedPaths};
pub use provider::{Container, PathsProvider, ServiceContainer};
pub use registry::{Paths, PathsBuilder, DEFAULT_BUILD_DIRECTORY};

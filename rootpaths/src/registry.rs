//! The resolved project layout.
//!
//! [`Paths`] combines built-in defaults, optionally discovered directories
//! and caller overrides into one normalized, ordered map. Precedence is
//! `overrides > discovered > defaults`.

use std::path::Path;

use crate::error::Result;
use crate::path::normalize::{join, normalize};
use crate::path::{Category, PathDiscoverer, PathValidator, ResolvedPaths};

/// Build directory name used when callers have no preference.
pub const DEFAULT_BUILD_DIRECTORY: &str = "build";

/// A project's resolved directory layout.
///
/// Constructed once per project root and immutable afterwards, so it can be
/// shared freely (for example behind an `Arc`) between request handlers.
///
/// # Examples
///
/// ```
/// use rootpaths::{Paths, ResolvedPaths};
///
/// let paths = Paths::new("/var/www/app/", &ResolvedPaths::new(), false, false).unwrap();
///
/// assert_eq!(paths.root_path(), "/var/www/app");
/// assert_eq!(paths.config_path(), "/var/www/app/config");
/// assert_eq!(paths.migrations_path(), "/var/www/app/database/migrations");
/// assert_eq!(paths.path("/config/app.php"), "/var/www/app/config/app.php");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    paths: ResolvedPaths,
}

impl Paths {
    /// Resolve the layout of the project at `root`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPath`] when `validate` is true and a
    /// resolved path is not an existing directory.
    pub fn new(
        root: &str,
        overrides: &ResolvedPaths,
        auto_discover: bool,
        validate: bool,
    ) -> Result<Self> {
        let root = normalize(root);

        let mut paths = Self::defaults(&root);

        if auto_discover {
            let discovered = PathDiscoverer::new().discover(&root);
            log::debug!("auto-discovery found {} path(s)", discovered.len());
            paths.merge(&discovered);
        }

        paths.merge(overrides);
        paths.map_values(normalize);

        if validate {
            PathValidator::new().validate(&paths, true)?;
        }

        Ok(Self { paths })
    }

    /// Start building a layout for the project at `root`.
    ///
    /// Auto-discovery is on and validation is off unless changed.
    #[must_use]
    pub fn builder(root: impl Into<String>) -> PathsBuilder {
        PathsBuilder::new(root)
    }

    /// Default locations for every category under `root`.
    #[must_use]
    pub fn defaults(root: &str) -> ResolvedPaths {
        Category::ALL
            .into_iter()
            .map(|category| {
                let path = match category {
                    Category::Root => root.to_string(),
                    other => format!("{root}/{}", other.default_relative()),
                };
                (category.as_str(), path)
            })
            .collect()
    }

    /// Path for a built-in category.
    #[must_use]
    pub fn get(&self, category: Category) -> &str {
        // Every built-in category is seeded by `defaults`.
        self.paths.get(category.as_str()).unwrap_or_default()
    }

    /// Path for any name, including custom override names.
    #[must_use]
    pub fn get_named(&self, name: &str) -> Option<&str> {
        self.paths.get(name)
    }

    /// The project root.
    #[must_use]
    pub fn root_path(&self) -> &str {
        self.get(Category::Root)
    }

    /// The configuration directory.
    #[must_use]
    pub fn config_path(&self) -> &str {
        self.get(Category::Config)
    }

    /// The resources directory.
    #[must_use]
    pub fn resources_path(&self) -> &str {
        self.get(Category::Resources)
    }

    /// The templates directory.
    #[must_use]
    pub fn views_path(&self) -> &str {
        self.get(Category::Views)
    }

    /// The front-end assets source directory.
    #[must_use]
    pub fn assets_path(&self) -> &str {
        self.get(Category::Assets)
    }

    /// The cache directory.
    #[must_use]
    pub fn cache_path(&self) -> &str {
        self.get(Category::Cache)
    }

    /// The logs directory.
    #[must_use]
    pub fn logs_path(&self) -> &str {
        self.get(Category::Logs)
    }

    /// The public document root.
    #[must_use]
    pub fn public_path(&self) -> &str {
        self.get(Category::Public)
    }

    /// The database directory.
    #[must_use]
    pub fn database_path(&self) -> &str {
        self.get(Category::Database)
    }

    /// The migrations directory.
    #[must_use]
    pub fn migrations_path(&self) -> &str {
        self.get(Category::Migrations)
    }

    /// The storage directory.
    #[must_use]
    pub fn storage_path(&self) -> &str {
        self.get(Category::Storage)
    }

    /// The tests directory.
    #[must_use]
    pub fn tests_path(&self) -> &str {
        self.get(Category::Tests)
    }

    /// Join `relative` onto the project root.
    ///
    /// Leading slashes on `relative` are ignored, so `"config/app.php"` and
    /// `"/config/app.php"` resolve to the same path.
    #[must_use]
    pub fn path(&self, relative: &str) -> String {
        join(self.root_path(), relative)
    }

    /// Every resolved path, in resolution order.
    #[must_use]
    pub fn all(&self) -> &ResolvedPaths {
        &self.paths
    }

    /// Output directory of a front-end build inside the public directory.
    #[must_use]
    pub fn build_path(&self, build_directory: &str) -> String {
        format!("{}/{build_directory}", self.public_path())
    }

    /// Built assets directory.
    ///
    /// Always `{public}/assets`; the build directory argument is accepted
    /// for compatibility and ignored.
    #[must_use]
    pub fn build_assets_path(&self, _build_directory: &str) -> String {
        format!("{}/assets", self.public_path())
    }

    /// Location of the Vite asset manifest.
    ///
    /// Probes `{public}/assets/manifest.json`, then
    /// `{public}/assets/.vite/manifest.json`, and returns the first that
    /// exists. Falls back to the `.vite` location when neither exists. The
    /// build directory argument is ignored.
    #[must_use]
    pub fn vite_manifest_path(&self, _build_directory: &str) -> String {
        let public = self.public_path();
        let nested = format!("{public}/assets/.vite/manifest.json");
        let candidates = [format!("{public}/assets/manifest.json"), nested.clone()];

        candidates
            .into_iter()
            .find(|candidate| Path::new(candidate).exists())
            .unwrap_or(nested)
    }
}

/// Builder for [`Paths`].
///
/// # Examples
///
/// ```
/// use rootpaths::Paths;
///
/// let paths = Paths::builder("/srv/site")
///     .auto_discover(false)
///     .with_override("views", "/srv/shared/templates")
///     .with_override("uploads", "/srv/data/uploads")
///     .build()
///     .unwrap();
///
/// assert_eq!(paths.views_path(), "/srv/shared/templates");
/// assert_eq!(paths.get_named("uploads"), Some("/srv/data/uploads"));
/// ```
#[derive(Debug, Clone)]
pub struct PathsBuilder {
    root: String,
    overrides: ResolvedPaths,
    auto_discover: bool,
    validate: bool,
}

impl PathsBuilder {
    /// Create a builder for the project at `root`.
    #[must_use]
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            overrides: ResolvedPaths::new(),
            auto_discover: true,
            validate: false,
        }
    }

    /// Override a single path.
    #[must_use]
    pub fn with_override(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.overrides.insert(name, path);
        self
    }

    /// Override several paths at once.
    #[must_use]
    pub fn with_overrides(mut self, overrides: &ResolvedPaths) -> Self {
        self.overrides.merge(overrides);
        self
    }

    /// Enable or disable auto-discovery.
    #[must_use]
    pub fn auto_discover(mut self, enabled: bool) -> Self {
        self.auto_discover = enabled;
        self
    }

    /// Enable or disable strict validation.
    #[must_use]
    pub fn validate(mut self, enabled: bool) -> Self {
        self.validate = enabled;
        self
    }

    /// Resolve the layout.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPath`] when validation is enabled and a
    /// resolved path is not an existing directory.
    pub fn build(self) -> Result<Paths> {
        Paths::new(
            &self.root,
            &self.overrides,
            self.auto_discover,
            self.validate,
        )
    }
}

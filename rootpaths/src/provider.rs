//! Service container registration.
//!
//! Host applications that resolve services by type register the path
//! services once at startup with [`PathsProvider::register`].

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use crate::config::PathsConfig;
use crate::error::Result;
use crate::http::PathsMiddleware;
use crate::path::{PathDiscoverer, PathNormalizer, PathValidator};
use crate::registry::Paths;

/// A type-keyed service registry.
pub trait Container {
    /// Register `service` as the instance for `T`, replacing any previous one.
    fn register<T: Any + Send + Sync>(&mut self, service: Arc<T>);

    /// The instance registered for `T`.
    fn get<T: Any + Send + Sync>(&self) -> Option<Arc<T>>;

    /// Whether an instance is registered for `T`.
    fn contains<T: Any + Send + Sync>(&self) -> bool {
        self.get::<T>().is_some()
    }
}

/// A [`Container`] backed by a `TypeId` map.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use rootpaths::provider::{Container, ServiceContainer};
///
/// let mut container = ServiceContainer::new();
/// container.register(Arc::new(42u32));
///
/// assert_eq!(container.get::<u32>().as_deref(), Some(&42));
/// assert!(container.get::<String>().is_none());
/// ```
#[derive(Default)]
pub struct ServiceContainer {
    services: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl std::fmt::Debug for ServiceContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContainer")
            .field("services", &self.services.len())
            .finish()
    }
}

impl ServiceContainer {
    /// Create an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered services.
    #[must_use]
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl Container for ServiceContainer {
    fn register<T: Any + Send + Sync>(&mut self, service: Arc<T>) {
        self.services.insert(TypeId::of::<T>(), service);
    }

    fn get<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.services
            .get(&TypeId::of::<T>())
            .and_then(|service| Arc::clone(service).downcast::<T>().ok())
    }
}

/// Registers the path services in a [`Container`].
///
/// # Examples
///
/// ```
/// use rootpaths::config::PathsConfig;
/// use rootpaths::provider::{Container, PathsProvider, ServiceContainer};
/// use rootpaths::{Paths, PathsMiddleware};
///
/// let mut container = ServiceContainer::new();
/// let config = PathsConfig {
///     root: Some("/var/www/app".to_string()),
///     auto_discover: Some(false),
///     ..Default::default()
/// };
/// PathsProvider::register(&mut container, config).unwrap();
///
/// let paths = container.get::<Paths>().unwrap();
/// assert_eq!(paths.config_path(), "/var/www/app/config");
/// assert!(container.contains::<PathsMiddleware>());
/// ```
pub struct PathsProvider;

impl PathsProvider {
    /// Build [`Paths`] from `config` and register it together with
    /// [`PathsMiddleware`], [`PathDiscoverer`], [`PathValidator`] and
    /// [`PathNormalizer`].
    ///
    /// A configuration without a root uses the current directory.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPath`] when strict validation fails,
    /// or an I/O error when the current directory is needed but unreadable.
    /// Nothing is registered on error.
    pub fn register<C: Container>(container: &mut C, config: PathsConfig) -> Result<()> {
        let default_root = if config.root.is_some() {
            String::new()
        } else {
            std::env::current_dir()?.to_string_lossy().into_owned()
        };
        let paths = config.into_paths(&default_root)?;
        let paths = Arc::new(paths);
        log::debug!("registering paths rooted at {}", paths.root_path());

        container.register(Arc::new(PathsMiddleware::new(Arc::clone(&paths))));
        container.register(paths);
        container.register(Arc::new(PathDiscoverer::new()));
        container.register(Arc::new(PathValidator::new()));
        container.register(Arc::new(PathNormalizer::new()));

        Ok(())
    }
}

//! Framework-agnostic middleware.
//!
//! The serving framework is an external collaborator. It only has to adapt
//! its request type to [`ServerRequest`], its next-handler to
//! [`RequestHandler`], and its router to [`BasePathTarget`].

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use crate::http::base_path::{BasePathContext, ServerMode};
use crate::registry::Paths;

/// Request attribute under which [`PathsMiddleware`] stores the layout.
pub const PATHS_ATTRIBUTE: &str = "paths";

/// The parts of an inbound request the middleware reads or extends.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use rootpaths::{Paths, ServerRequest};
///
/// let paths = Arc::new(Paths::builder("/app").auto_discover(false).build().unwrap());
/// let request = ServerRequest::new().with_paths(Arc::clone(&paths));
///
/// assert_eq!(request.paths().unwrap().root_path(), "/app");
/// ```
#[derive(Clone, Default)]
pub struct ServerRequest {
    server_params: HashMap<String, String>,
    attributes: HashMap<String, Arc<dyn Any + Send + Sync>>,
}

impl std::fmt::Debug for ServerRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerRequest")
            .field("server_params", &self.server_params)
            .field("attributes", &self.attributes.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ServerRequest {
    /// Create a request with no server parameters or attributes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a request from server parameters.
    #[must_use]
    pub fn with_server_params(server_params: HashMap<String, String>) -> Self {
        Self {
            server_params,
            attributes: HashMap::new(),
        }
    }

    /// Add a single server parameter.
    #[must_use]
    pub fn with_server_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.server_params.insert(name.into(), value.into());
        self
    }

    /// The server parameters.
    #[must_use]
    pub fn server_params(&self) -> &HashMap<String, String> {
        &self.server_params
    }

    /// Attach a typed attribute.
    #[must_use]
    pub fn with_attribute<T: Any + Send + Sync>(mut self, name: impl Into<String>, value: Arc<T>) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    /// Read a typed attribute; `None` when absent or of another type.
    #[must_use]
    pub fn attribute<T: Any + Send + Sync>(&self, name: &str) -> Option<Arc<T>> {
        self.attributes
            .get(name)
            .and_then(|value| Arc::clone(value).downcast::<T>().ok())
    }

    /// Attach the project layout.
    #[must_use]
    pub fn with_paths(self, paths: Arc<Paths>) -> Self {
        self.with_attribute(PATHS_ATTRIBUTE, paths)
    }

    /// The project layout, if a [`PathsMiddleware`] ran.
    #[must_use]
    pub fn paths(&self) -> Option<Arc<Paths>> {
        self.attribute::<Paths>(PATHS_ATTRIBUTE)
    }
}

/// The next step in the request pipeline.
pub trait RequestHandler {
    /// What handling a request produces.
    type Response;

    /// Handle a request.
    fn handle(&self, request: ServerRequest) -> Self::Response;
}

impl<F, R> RequestHandler for F
where
    F: Fn(ServerRequest) -> R,
{
    type Response = R;

    fn handle(&self, request: ServerRequest) -> R {
        self(request)
    }
}

/// A step that may inspect or extend a request before delegating.
pub trait Middleware {
    /// Process a request, delegating to `handler`.
    fn process<H: RequestHandler>(&self, request: ServerRequest, handler: &H) -> H::Response;
}

/// Makes the project layout available to every request.
#[derive(Debug, Clone)]
pub struct PathsMiddleware {
    paths: Arc<Paths>,
}

impl PathsMiddleware {
    /// Create a middleware sharing `paths`.
    #[must_use]
    pub fn new(paths: Arc<Paths>) -> Self {
        Self { paths }
    }

    /// The shared layout.
    #[must_use]
    pub fn paths(&self) -> &Arc<Paths> {
        &self.paths
    }
}

impl Middleware for PathsMiddleware {
    fn process<H: RequestHandler>(&self, request: ServerRequest, handler: &H) -> H::Response {
        handler.handle(request.with_paths(Arc::clone(&self.paths)))
    }
}

/// The routing layer whose base path the middleware sets.
pub trait BasePathTarget {
    /// Strip `base_path` from incoming paths before route matching.
    fn set_base_path(&self, base_path: &str);
}

impl<T: BasePathTarget + ?Sized> BasePathTarget for Arc<T> {
    fn set_base_path(&self, base_path: &str) {
        (**self).set_base_path(base_path);
    }
}

/// Detects the base path of each request and hands it to the router.
#[derive(Debug, Clone)]
pub struct BasePathMiddleware<T> {
    target: T,
    mode: ServerMode,
}

impl<T: BasePathTarget> BasePathMiddleware<T> {
    /// Create a middleware for a fixed server mode.
    pub fn new(target: T, mode: ServerMode) -> Self {
        Self { target, mode }
    }

    /// Create a middleware from a SAPI name (`"cli-server"` selects the
    /// built-in server mode).
    pub fn from_sapi(target: T, sapi: Option<&str>) -> Self {
        Self::new(target, ServerMode::from_sapi(sapi))
    }

    /// The server mode detection runs in.
    pub fn mode(&self) -> ServerMode {
        self.mode
    }
}

impl<T: BasePathTarget> Middleware for BasePathMiddleware<T> {
    fn process<H: RequestHandler>(&self, request: ServerRequest, handler: &H) -> H::Response {
        let base_path =
            BasePathContext::from_server_params(request.server_params(), self.mode).detect();
        log::debug!("base path for {} server: {base_path:?}", self.mode);
        self.target.set_base_path(&base_path);
        handler.handle(request)
    }
}

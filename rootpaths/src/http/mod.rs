//! HTTP integration: base path detection and middleware.
//!
//! # Examples
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use rootpaths::http::{BasePathMiddleware, BasePathTarget, Middleware, ServerRequest};
//! use rootpaths::ServerMode;
//!
//! #[derive(Default)]
//! struct Router {
//!     base_path: Mutex<String>,
//! }
//!
//! impl BasePathTarget for Router {
//!     fn set_base_path(&self, base_path: &str) {
//!         *self.base_path.lock().unwrap() = base_path.to_string();
//!     }
//! }
//!
//! let router = Arc::new(Router::default());
//! let middleware = BasePathMiddleware::new(Arc::clone(&router), ServerMode::WebServer);
//!
//! let request = ServerRequest::new()
//!     .with_server_param("SCRIPT_NAME", "/shop/public/index.php")
//!     .with_server_param("REQUEST_URI", "/shop/cart");
//! middleware.process(request, &|_: ServerRequest| ());
//!
//! assert_eq!(*router.base_path.lock().unwrap(), "/shop");
//! ```

pub mod base_path;
pub mod middleware;

pub use base_path::{detect_base_path, BasePathContext, BasePathResolver, ServerMode};
pub use middleware::{
    BasePathMiddleware, BasePathTarget, Middleware, PathsMiddleware, RequestHandler, ServerRequest,
    PATHS_ATTRIBUTE,
};

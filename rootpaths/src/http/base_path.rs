//! Base path detection from server parameters.
//!
//! When an application is not served from the web server's document root,
//! routing has to ignore the URL prefix the application is mounted under.
//! This module derives that prefix from `SCRIPT_NAME` and `REQUEST_URI`.
//!
//! Detection never fails: missing or malformed input yields an empty prefix.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use url::Url;

/// Server parameter holding the path of the front controller script.
pub const SCRIPT_NAME: &str = "SCRIPT_NAME";

/// Server parameter holding the raw request target.
pub const REQUEST_URI: &str = "REQUEST_URI";

/// SAPI name reported by PHP's built-in development server.
pub const BUILTIN_SERVER_SAPI: &str = "cli-server";

/// How the application is being served.
///
/// # Examples
///
/// ```
/// use rootpaths::ServerMode;
///
/// assert_eq!(ServerMode::from_sapi(Some("cli-server")), ServerMode::BuiltinServer);
/// assert_eq!(ServerMode::from_sapi(Some("fpm-fcgi")), ServerMode::WebServer);
/// assert_eq!(ServerMode::from_sapi(None), ServerMode::WebServer);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServerMode {
    /// A development server that routes every request through the script.
    BuiltinServer,
    /// A regular web server (Apache, nginx, ...) in front of the script.
    #[default]
    WebServer,
}

impl ServerMode {
    /// Map a SAPI name to a server mode.
    #[must_use]
    pub fn from_sapi(sapi: Option<&str>) -> Self {
        match sapi {
            Some(BUILTIN_SERVER_SAPI) => Self::BuiltinServer,
            _ => Self::WebServer,
        }
    }
}

impl fmt::Display for ServerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BuiltinServer => write!(f, "builtin"),
            Self::WebServer => write!(f, "web"),
        }
    }
}

impl FromStr for ServerMode {
    type Err = String;

    /// Recognizes `builtin`, `cli-server` and `web` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "builtin" | BUILTIN_SERVER_SAPI => Ok(Self::BuiltinServer),
            "web" => Ok(Self::WebServer),
            _ => Err(format!("invalid server mode: {s}")),
        }
    }
}

/// The request metadata base path detection needs.
///
/// # Examples
///
/// ```
/// use rootpaths::{BasePathContext, ServerMode};
///
/// let ctx = BasePathContext::new(ServerMode::WebServer)
///     .with_script_name("/my-app/public/index.php")
///     .with_request_uri("/my-app/users?page=2");
///
/// assert_eq!(ctx.detect(), "/my-app");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasePathContext {
    /// Path of the front controller script.
    pub script_name: Option<String>,
    /// Raw request target.
    pub request_uri: Option<String>,
    /// Deployment mode.
    pub mode: ServerMode,
}

impl BasePathContext {
    /// Create an empty context for the given mode.
    #[must_use]
    pub fn new(mode: ServerMode) -> Self {
        Self {
            script_name: None,
            request_uri: None,
            mode,
        }
    }

    /// Read `SCRIPT_NAME` and `REQUEST_URI` from server parameters.
    #[must_use]
    pub fn from_server_params(params: &HashMap<String, String>, mode: ServerMode) -> Self {
        Self {
            script_name: params.get(SCRIPT_NAME).cloned(),
            request_uri: params.get(REQUEST_URI).cloned(),
            mode,
        }
    }

    /// Set the script name.
    #[must_use]
    pub fn with_script_name(mut self, script_name: impl Into<String>) -> Self {
        self.script_name = Some(script_name.into());
        self
    }

    /// Set the request URI.
    #[must_use]
    pub fn with_request_uri(mut self, request_uri: impl Into<String>) -> Self {
        self.request_uri = Some(request_uri.into());
        self
    }

    /// Detect the base path for this context. See [`detect_base_path`].
    #[must_use]
    pub fn detect(&self) -> String {
        detect_base_path(self)
    }
}

/// Detect the URL prefix the application is mounted under.
///
/// - Built-in server: the directory of the script, or `""` when that is the
///   root.
/// - Web server: the request path cut to the length of the script's
///   grandparent directory, or `""` when there is no request URI, the
///   grandparent is `/`, or the cut leaves at most one character.
#[must_use]
pub fn detect_base_path(ctx: &BasePathContext) -> String {
    match ctx.mode {
        ServerMode::BuiltinServer => by_script_name(ctx.script_name.as_deref().unwrap_or("")),
        ServerMode::WebServer => match ctx.request_uri.as_deref() {
            Some(uri) => by_request_uri(ctx.script_name.as_deref().unwrap_or(""), uri),
            None => String::new(),
        },
    }
}

fn by_script_name(script_name: &str) -> String {
    let base_path = dirname(&unify_separators(script_name), 1);
    if base_path.len() > 1 {
        base_path
    } else {
        String::new()
    }
}

fn by_request_uri(script_name: &str, request_uri: &str) -> String {
    let request_path = url_path(request_uri);
    let script_dir = dirname(&unify_separators(script_name), 2);

    if script_dir == "/" {
        return String::new();
    }

    let base_path = truncate(&request_path, script_dir.len());
    if base_path.len() > 1 {
        base_path.to_string()
    } else {
        String::new()
    }
}

fn unify_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Path component of a request target.
///
/// Absolute-form targets (`http://host/path`) and network-path references
/// (`//host/path`) are parsed as URLs, so their authority is never part of
/// the path. Origin-form targets (`/path?query`) lose their query and
/// fragment.
fn url_path(request_uri: &str) -> String {
    let parsed = if request_uri.starts_with("//") {
        Url::parse(&format!("http:{request_uri}"))
    } else if is_absolute_form(request_uri) {
        Url::parse(request_uri)
    } else {
        let end = request_uri.find(&['?', '#'][..]).unwrap_or(request_uri.len());
        return request_uri[..end].to_string();
    };

    parsed.map(|url| url.path().to_string()).unwrap_or_default()
}

/// Whether `uri` starts with a `scheme://` prefix.
fn is_absolute_form(uri: &str) -> bool {
    uri.split_once("://").is_some_and(|(scheme, _)| {
        let mut chars = scheme.chars();
        chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Parent directory of `path`, `levels` times over.
///
/// Follows POSIX `dirname`: empty input stays empty, a bare name yields `.`,
/// trailing separators are ignored and the root stays `/`.
fn dirname(path: &str, levels: usize) -> String {
    let mut current = path.to_string();
    for _ in 0..levels {
        current = dirname_once(&current);
    }
    current
}

fn dirname_once(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }

    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }

    match trimmed.rfind('/') {
        None => ".".to_string(),
        Some(idx) => {
            let parent = trimmed[..idx].trim_end_matches('/');
            if parent.is_empty() {
                "/".to_string()
            } else {
                parent.to_string()
            }
        }
    }
}

/// First `max_len` bytes of `s`, backing off to a char boundary.
fn truncate(s: &str, max_len: usize) -> &str {
    if max_len >= s.len() {
        return s;
    }
    let mut end = max_len;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Computes base paths for one deployment mode.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use rootpaths::{BasePathResolver, ServerMode};
///
/// let resolver = BasePathResolver::new(ServerMode::BuiltinServer);
/// let params = HashMap::from([("SCRIPT_NAME".to_string(), "/blog/index.php".to_string())]);
/// assert_eq!(resolver.resolve(&params), "/blog");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BasePathResolver {
    mode: ServerMode,
}

impl BasePathResolver {
    /// Create a resolver for the given mode.
    #[must_use]
    pub const fn new(mode: ServerMode) -> Self {
        Self { mode }
    }

    /// The mode this resolver detects for.
    #[must_use]
    pub const fn mode(&self) -> ServerMode {
        self.mode
    }

    /// Detect the base path from raw server parameters.
    #[must_use]
    pub fn resolve(&self, params: &HashMap<String, String>) -> String {
        BasePathContext::from_server_params(params, self.mode).detect()
    }
}

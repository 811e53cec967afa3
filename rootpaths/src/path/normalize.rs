//! Path normalization functions.
//!
//! Normalization is a pure string transformation:
//! - Backslashes are converted to forward slashes
//! - All trailing slashes are removed
//!
//! No filesystem access is performed and no input is rejected.

/// Normalize a path string.
///
/// Every `\` becomes `/`, then every trailing `/` is stripped. A path made
/// only of separators normalizes to the empty string.
///
/// # Examples
///
/// ```
/// use rootpaths::path::normalize::normalize;
///
/// assert_eq!(normalize("C:\\a\\b\\"), "C:/a/b");
/// assert_eq!(normalize("/a/b/"), "/a/b");
/// assert_eq!(normalize("/a/b///"), "/a/b");
/// assert_eq!(normalize(""), "");
/// ```
#[must_use]
pub fn normalize(path: &str) -> String {
    let unified = path.replace('\\', "/");
    unified.trim_end_matches('/').to_string()
}

/// Join a relative path onto a base without duplicating separators.
///
/// The relative part is normalized and its leading slashes are dropped, so
/// `"config/app.php"` and `"/config/app.php"` produce the same result.
///
/// # Examples
///
/// ```
/// use rootpaths::path::normalize::join;
///
/// assert_eq!(join("/var/www/app", "config/app.php"), "/var/www/app/config/app.php");
/// assert_eq!(join("/var/www/app", "/config/app.php"), "/var/www/app/config/app.php");
/// ```
#[must_use]
pub fn join(base: &str, relative: &str) -> String {
    let normalized = normalize(relative);
    format!("{base}/{}", normalized.trim_start_matches('/'))
}

/// Service wrapper around [`normalize`].
///
/// This exists so the normalizer can be handed to collaborators (for example
/// registered in a service container) like the other path components.
///
/// # Examples
///
/// ```
/// use rootpaths::PathNormalizer;
///
/// let normalizer = PathNormalizer::new();
/// assert_eq!(normalizer.normalize("a\\b\\"), "a/b");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathNormalizer;

impl PathNormalizer {
    /// Create a new normalizer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Normalize a path string. See [`normalize`].
    #[must_use]
    pub fn normalize(&self, path: &str) -> String {
        normalize(path)
    }
}

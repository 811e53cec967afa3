//! Existence checks for resolved paths.

use std::path::Path;

use crate::error::{Error, Result};
use crate::path::types::ResolvedPaths;

/// Checks that resolved paths point at existing directories.
///
/// # Examples
///
/// ```
/// use rootpaths::{PathValidator, ResolvedPaths};
///
/// let paths: ResolvedPaths = [("config", "/nonexistent")].into_iter().collect();
///
/// // Non-strict validation never fails
/// PathValidator::new().validate(&paths, false).unwrap();
///
/// let err = PathValidator::new().validate(&paths, true).unwrap_err();
/// assert_eq!(err.category(), Some("config"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PathValidator;

impl PathValidator {
    /// Create a new validator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validate every entry of `paths`.
    ///
    /// # Errors
    ///
    /// When `strict` is true, returns [`Error::InvalidPath`] for the first
    /// entry, in map order, that is not an existing directory. When `strict`
    /// is false this never fails.
    pub fn validate(&self, paths: &ResolvedPaths, strict: bool) -> Result<()> {
        if !strict {
            return Ok(());
        }

        match paths.iter().find(|(_, path)| !Path::new(path).is_dir()) {
            Some((category, path)) => Err(Error::InvalidPath {
                category: category.to_string(),
                path: path.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Every entry that is not an existing directory, in map order.
    #[must_use]
    pub fn missing(&self, paths: &ResolvedPaths) -> Vec<(String, String)> {
        paths
            .iter()
            .filter(|(_, path)| !Path::new(path).is_dir())
            .map(|(category, path)| (category.to_string(), path.to_string()))
            .collect()
    }
}

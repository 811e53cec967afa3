//! Core types for path resolution.

use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// One of the fixed directory categories every project layout has.
///
/// The declaration order is the canonical order used for defaults and
/// output.
///
/// # Examples
///
/// ```
/// use rootpaths::Category;
///
/// let category: Category = "migrations".parse().unwrap();
/// assert_eq!(category, Category::Migrations);
/// assert_eq!(category.as_str(), "migrations");
/// assert_eq!(Category::ALL.len(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Project root.
    Root,
    /// Configuration files.
    Config,
    /// Non-public resources.
    Resources,
    /// Templates.
    Views,
    /// Front-end sources.
    Assets,
    /// Cache files.
    Cache,
    /// Log files.
    Logs,
    /// Web server document root.
    Public,
    /// Database files.
    Database,
    /// Database migrations.
    Migrations,
    /// Application storage.
    Storage,
    /// Test suite.
    Tests,
}

impl Category {
    /// Every category, in canonical order.
    pub const ALL: [Self; 12] = [
        Self::Root,
        Self::Config,
        Self::Resources,
        Self::Views,
        Self::Assets,
        Self::Cache,
        Self::Logs,
        Self::Public,
        Self::Database,
        Self::Migrations,
        Self::Storage,
        Self::Tests,
    ];

    /// The category's key in a resolved path map.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::Config => "config",
            Self::Resources => "resources",
            Self::Views => "views",
            Self::Assets => "assets",
            Self::Cache => "cache",
            Self::Logs => "logs",
            Self::Public => "public",
            Self::Database => "database",
            Self::Migrations => "migrations",
            Self::Storage => "storage",
            Self::Tests => "tests",
        }
    }

    /// Location relative to the project root used when nothing else is
    /// configured. Empty for [`Category::Root`].
    #[must_use]
    pub const fn default_relative(self) -> &'static str {
        match self {
            Self::Root => "",
            Self::Config => "config",
            Self::Resources => "resources",
            Self::Views => "resources/views",
            Self::Assets => "resources/assets",
            Self::Cache => "var/cache",
            Self::Logs => "var/logs",
            Self::Public => "public",
            Self::Database => "database",
            Self::Migrations => "database/migrations",
            Self::Storage => "storage",
            Self::Tests => "tests",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown category name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown path category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// An insertion-ordered map from category name to path.
///
/// Inserting an existing name replaces its value without moving it, so
/// merging several maps keeps the position of the first occurrence.
///
/// # Examples
///
/// ```
/// use rootpaths::ResolvedPaths;
///
/// let mut paths = ResolvedPaths::new();
/// paths.insert("root", "/app");
/// paths.insert("config", "/app/config");
/// paths.insert("root", "/srv/app");
///
/// assert_eq!(paths.get("root"), Some("/srv/app"));
/// assert_eq!(paths.names().collect::<Vec<_>>(), vec!["root", "config"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedPaths {
    entries: Vec<(String, String)>,
}

impl ResolvedPaths {
    /// Create an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert or replace an entry.
    pub fn insert(&mut self, name: impl Into<String>, path: impl Into<String>) {
        let name = name.into();
        let path = path.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = path,
            None => self.entries.push((name, path)),
        }
    }

    /// Copy every entry of `other` into this map; `other` wins on collision.
    pub fn merge(&mut self, other: &Self) {
        for (name, path) in other.iter() {
            self.insert(name, path);
        }
    }

    /// Look up a path by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, path)| path.as_str())
    }

    /// Whether an entry with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, path)| (name.as_str(), path.as_str()))
    }

    /// Iterate names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Apply `f` to every value.
    pub fn map_values(&mut self, mut f: impl FnMut(&str) -> String) {
        for (_, path) in &mut self.entries {
            *path = f(path);
        }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ResolvedPaths {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut paths = Self::new();
        for (name, path) in iter {
            paths.insert(name, path);
        }
        paths
    }
}

impl Serialize for ResolvedPaths {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, path) in &self.entries {
            map.serialize_entry(name, path)?;
        }
        map.end()
    }
}

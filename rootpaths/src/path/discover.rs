//! Auto-discovery of conventionally named project directories.
//!
//! Each category has an ordered list of candidate locations relative to the
//! project root. The first candidate that exists as a directory wins;
//! categories with no existing candidate are left out of the result.

use std::path::Path;

use crate::path::types::{Category, ResolvedPaths};

/// A category together with its candidate locations, highest priority first.
pub type DiscoveryRule = (Category, &'static [&'static str]);

/// Candidate locations probed during discovery, in probe order.
pub const DISCOVERY_RULES: &[DiscoveryRule] = &[
    (Category::Config, &["config", "app/config", "etc"]),
    (Category::Resources, &["resources", "app/resources", "res"]),
    (
        Category::Views,
        &["resources/views", "templates", "views", "app/views"],
    ),
    (
        Category::Assets,
        &["resources/assets", "assets", "public/assets"],
    ),
    (
        Category::Cache,
        &["var/cache", "cache", "tmp/cache", "storage/cache"],
    ),
    (
        Category::Logs,
        &["var/logs", "logs", "log", "storage/logs"],
    ),
    (Category::Public, &["public", "web", "www", "htdocs"]),
    (
        Category::Database,
        &["database", "db", "storage/database"],
    ),
    (
        Category::Migrations,
        &["database/migrations", "migrations", "db/migrations"],
    ),
    (Category::Storage, &["storage", "var", "data"]),
    (Category::Tests, &["tests", "test"]),
];

/// Probes a project root for conventional directory names.
///
/// # Examples
///
/// ```no_run
/// use rootpaths::PathDiscoverer;
///
/// let discovered = PathDiscoverer::new().discover("/var/www/app");
/// if let Some(views) = discovered.get("views") {
///     println!("templates live in {views}");
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PathDiscoverer {
    rules: &'static [DiscoveryRule],
}

impl Default for PathDiscoverer {
    fn default() -> Self {
        Self {
            rules: DISCOVERY_RULES,
        }
    }
}

impl PathDiscoverer {
    /// Create a discoverer using the built-in rule table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The rule table this discoverer probes.
    #[must_use]
    pub const fn rules(&self) -> &'static [DiscoveryRule] {
        self.rules
    }

    /// Discover directories under `root`.
    ///
    /// Every hit is recorded as `root + "/" + candidate`. The result follows
    /// rule-table order and omits categories without a hit.
    #[must_use]
    pub fn discover(&self, root: &str) -> ResolvedPaths {
        let mut found = ResolvedPaths::new();

        for (category, candidates) in self.rules {
            if let Some(path) = Self::find_first(root, candidates) {
                log::debug!("discovered {category} at {path}");
                found.insert(category.as_str(), path);
            }
        }

        found
    }

    /// Return the first candidate under `root` that is an existing directory.
    #[must_use]
    pub fn find_first(root: &str, candidates: &[&str]) -> Option<String> {
        candidates
            .iter()
            .map(|candidate| format!("{root}/{candidate}"))
            .find(|full| Path::new(full).is_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn root_of(dir: &tempfile::TempDir) -> String {
        dir.path().to_str().unwrap().to_string()
    }

    #[test]
    fn test_rules_cover_every_category_but_root() {
        let categories: Vec<Category> = DISCOVERY_RULES.iter().map(|(c, _)| *c).collect();
        let expected: Vec<Category> = Category::ALL
            .into_iter()
            .filter(|c| *c != Category::Root)
            .collect();
        assert_eq!(categories, expected);
    }

    #[test]
    fn test_discover_empty_root() {
        let dir = tempdir().unwrap();
        let found = PathDiscoverer::new().discover(&root_of(&dir));
        assert!(found.is_empty());
    }

    #[test]
    fn test_discover_standard_layout() {
        let dir = tempdir().unwrap();
        let root = root_of(&dir);
        fs::create_dir_all(dir.path().join("config")).unwrap();
        fs::create_dir_all(dir.path().join("resources/views")).unwrap();
        fs::create_dir_all(dir.path().join("public")).unwrap();

        let found = PathDiscoverer::new().discover(&root);

        let expected: ResolvedPaths = [
            ("config", format!("{root}/config")),
            ("resources", format!("{root}/resources")),
            ("views", format!("{root}/resources/views")),
            ("public", format!("{root}/public")),
        ]
        .into_iter()
        .collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_discover_prefers_earlier_candidate() {
        let dir = tempdir().unwrap();
        let root = root_of(&dir);
        fs::create_dir_all(dir.path().join("templates")).unwrap();
        fs::create_dir_all(dir.path().join("views")).unwrap();

        let found = PathDiscoverer::new().discover(&root);
        assert_eq!(found.get("views"), Some(format!("{root}/templates").as_str()));
    }

    #[test]
    fn test_discover_ignores_files() {
        let dir = tempdir().unwrap();
        let root = root_of(&dir);
        fs::write(dir.path().join("config"), "not a directory").unwrap();
        fs::create_dir_all(dir.path().join("etc")).unwrap();

        let found = PathDiscoverer::new().discover(&root);
        assert_eq!(found.get("config"), Some(format!("{root}/etc").as_str()));
    }

    #[test]
    fn test_discover_nonstandard_layout() {
        let dir = tempdir().unwrap();
        let root = root_of(&dir);
        for sub in ["web", "log", "db/migrations", "test"] {
            fs::create_dir_all(dir.path().join(sub)).unwrap();
        }

        let found = PathDiscoverer::new().discover(&root);
        assert_eq!(found.get("public"), Some(format!("{root}/web").as_str()));
        assert_eq!(found.get("logs"), Some(format!("{root}/log").as_str()));
        assert_eq!(found.get("database"), Some(format!("{root}/db").as_str()));
        assert_eq!(
            found.get("migrations"),
            Some(format!("{root}/db/migrations").as_str())
        );
        assert_eq!(found.get("tests"), Some(format!("{root}/test").as_str()));
        assert!(!found.contains("config"));
    }

    #[test]
    fn test_discover_nonexistent_root() {
        let found = PathDiscoverer::new().discover("/nonexistent/rootpaths/project");
        assert!(found.is_empty());
    }

    #[test]
    fn test_find_first_none() {
        let dir = tempdir().unwrap();
        assert_eq!(PathDiscoverer::find_first(&root_of(&dir), &["a", "b"]), None);
    }
}

//! Common test utilities for integration tests.
//!
//! This module provides fixture builders for project directory trees.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Builder for a temporary project directory.
///
/// # Examples
///
/// ```no_run
/// # use common::ProjectFixture;
/// let project = ProjectFixture::new()
///     .with_dirs(&["config", "resources/views", "public"])
///     .build();
/// ```
#[allow(dead_code)]
pub struct ProjectFixture {
    dirs: Vec<String>,
    files: Vec<(String, String)>,
}

#[allow(dead_code)]
impl ProjectFixture {
    /// Creates an empty project.
    pub fn new() -> Self {
        Self {
            dirs: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Adds directories (relative to the root) to create.
    pub fn with_dirs(mut self, dirs: &[&str]) -> Self {
        self.dirs.extend(dirs.iter().map(|d| (*d).to_string()));
        self
    }

    /// Adds a file (relative to the root) with the given contents.
    pub fn with_file(mut self, path: &str, contents: &str) -> Self {
        self.files.push((path.to_string(), contents.to_string()));
        self
    }

    /// Creates the tree in a fresh temporary directory.
    pub fn build(self) -> Project {
        let dir = tempfile::tempdir().unwrap();

        for sub in &self.dirs {
            fs::create_dir_all(dir.path().join(sub)).unwrap();
        }
        for (path, contents) in &self.files {
            let full = dir.path().join(path);
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(full, contents).unwrap();
        }

        Project { dir }
    }
}

/// A temporary project tree, removed on drop.
#[allow(dead_code)]
pub struct Project {
    dir: TempDir,
}

#[allow(dead_code)]
impl Project {
    /// The project root as a filesystem path.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// The project root as a string with forward slashes.
    pub fn root(&self) -> String {
        self.dir.path().to_string_lossy().replace('\\', "/")
    }

    /// `root + "/" + relative`.
    pub fn join(&self, relative: &str) -> String {
        format!("{}/{relative}", self.root())
    }
}

/// Every built-in category with its default location under `/var/www/app`.
#[allow(dead_code)]
pub const DEFAULT_LAYOUT: [(&str, &str); 12] = [
    ("root", "/var/www/app"),
    ("config", "/var/www/app/config"),
    ("resources", "/var/www/app/resources"),
    ("views", "/var/www/app/resources/views"),
    ("assets", "/var/www/app/resources/assets"),
    ("cache", "/var/www/app/var/cache"),
    ("logs", "/var/www/app/var/logs"),
    ("public", "/var/www/app/public"),
    ("database", "/var/www/app/database"),
    ("migrations", "/var/www/app/database/migrations"),
    ("storage", "/var/www/app/storage"),
    ("tests", "/var/www/app/tests"),
];

//! Common test utilities for CLI integration tests.
//!
//! This module provides an isolated project directory and command builders
//! that point the binary at it.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables the binary reads; cleared for every command.
const ROOTPATHS_VARS: [&str; 6] = [
    "ROOTPATHS_ROOT",
    "ROOTPATHS_CONFIG",
    "ROOTPATHS_AUTO_DISCOVER",
    "ROOTPATHS_VALIDATE",
    "ROOTPATHS_LOG_MODE",
    "ROOTPATHS_PATH_VIEWS",
];

/// Test environment with an isolated project root.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Project root inside the temporary directory
    pub root: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with an empty project root.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = temp_dir.path().join("project");
        std::fs::create_dir_all(&root).expect("Failed to create project root");

        Self { temp_dir, root }
    }

    /// Get a bare command builder without `--root`.
    ///
    /// Runs inside the project root with every `ROOTPATHS_*` variable removed.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("rootpaths").expect("Failed to find rootpaths binary");
        cmd.current_dir(&self.root);
        for var in ROOTPATHS_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with `--root` pointing at the project.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--root").arg(&self.root);
        cmd
    }

    /// The project root.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// The project root as a string.
    pub fn root_str(&self) -> String {
        self.root.to_string_lossy().into_owned()
    }

    /// `root + "/" + relative`.
    pub fn join(&self, relative: &str) -> String {
        format!("{}/{relative}", self.root_str())
    }

    /// Create directories under the project root.
    pub fn create_dirs(&self, dirs: &[&str]) {
        for dir in dirs {
            std::fs::create_dir_all(self.root.join(dir)).expect("Failed to create test directory");
        }
    }

    /// Write a file under the project root.
    pub fn write_file(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Create every default directory so strict validation passes.
    pub fn create_default_layout(&self) {
        self.create_dirs(&[
            "config",
            "resources/views",
            "resources/assets",
            "var/cache",
            "var/logs",
            "public",
            "database/migrations",
            "storage",
            "tests",
        ]);
    }

    /// Run a command and return its stdout, asserting success.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run rootpaths");

        assert!(
            output.status.success(),
            "rootpaths {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

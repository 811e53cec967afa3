//! Integration tests for the configuration system.
//!
//! Tests that modify environment variables are marked with `#[serial]` to
//! ensure they run sequentially. Environment variables are process-global,
//! so concurrent access would cause race conditions.

mod common;

use serial_test::serial;
use std::env;

use common::ProjectFixture;
use rootpaths::config::{ConfigBuilder, PathsConfig};
use rootpaths::Error;

/// RAII guard for setting and restoring environment variables.
struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

impl EnvGuard {
    fn new(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}

/// Clear every `ROOTPATHS_*` variable for the duration of a test.
fn clear_rootpaths_env_vars() -> Vec<EnvGuard> {
    env::vars()
        .map(|(key, _)| key)
        .filter(|key| key.starts_with("ROOTPATHS_"))
        .map(|key| EnvGuard::remove(&key))
        .collect()
}

#[test]
fn test_file_config_end_to_end() {
    let project = ProjectFixture::new()
        .with_dirs(&["templates"])
        .with_file(
            "rootpaths.yaml",
            "auto_discover: true\npaths:\n  cache: /tmp/app-cache/\n",
        )
        .build();

    let config = ConfigBuilder::new()
        .with_working_dir(project.path())
        .skip_env()
        .build()
        .unwrap();

    let paths = config.into_paths(&project.root()).unwrap();
    assert_eq!(paths.views_path(), project.join("templates"));
    assert_eq!(paths.cache_path(), "/tmp/app-cache");
}

#[test]
fn test_relative_root_in_nested_file() {
    let project = ProjectFixture::new()
        .with_dirs(&["site/config", "tools"])
        .with_file("rootpaths.yaml", "root: site\n")
        .build();

    let config = ConfigBuilder::new()
        .with_working_dir(&project.path().join("tools"))
        .skip_env()
        .build()
        .unwrap();

    let paths = config.into_paths("/unused").unwrap();
    assert!(paths.root_path().ends_with("/site"));
    assert!(paths.config_path().ends_with("/site/config"));
}

#[test]
fn test_local_file_overrides_shared() {
    let project = ProjectFixture::new()
        .with_file(
            "rootpaths.yaml",
            "validate: true\npaths:\n  views: /shared/views\n  logs: /shared/logs\n",
        )
        .with_file("rootpaths.local.yaml", "validate: false\npaths:\n  logs: /mine/logs\n")
        .build();

    let config = ConfigBuilder::new()
        .with_working_dir(project.path())
        .skip_env()
        .build()
        .unwrap();

    assert_eq!(config.validate, Some(false));
    let overrides = config.overrides();
    assert_eq!(overrides.get("views"), Some("/shared/views"));
    assert_eq!(overrides.get("logs"), Some("/mine/logs"));
}

#[test]
fn test_invalid_yaml_reports_file() {
    let project = ProjectFixture::new()
        .with_file("rootpaths.yaml", "paths: [not, a, map]\n")
        .build();

    let err = ConfigBuilder::new()
        .with_working_dir(project.path())
        .skip_env()
        .build()
        .unwrap_err();

    match err {
        Error::Configuration { path, .. } => assert!(path.ends_with("rootpaths.yaml")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
#[serial]
fn test_env_overrides_file() {
    let _clean = clear_rootpaths_env_vars();
    let project = ProjectFixture::new()
        .with_file("rootpaths.yaml", "root: /from/file\nauto_discover: true\n")
        .build();

    let _root = EnvGuard::new("ROOTPATHS_ROOT", "/from/env");
    let _discover = EnvGuard::new("ROOTPATHS_AUTO_DISCOVER", "off");
    let _views = EnvGuard::new("ROOTPATHS_PATH_VIEWS", "/env/views");

    let config = ConfigBuilder::new()
        .with_working_dir(project.path())
        .build()
        .unwrap();

    assert_eq!(config.root.as_deref(), Some("/from/env"));
    assert_eq!(config.auto_discover, Some(false));
    assert_eq!(config.overrides().get("views"), Some("/env/views"));
}

#[test]
#[serial]
fn test_programmatic_overrides_env() {
    let _clean = clear_rootpaths_env_vars();
    let _root = EnvGuard::new("ROOTPATHS_ROOT", "/from/env");
    let _validate = EnvGuard::new("ROOTPATHS_VALIDATE", "yes");

    let config = ConfigBuilder::new()
        .skip_files()
        .with_config(PathsConfig {
            root: Some("/from/code".to_string()),
            ..Default::default()
        })
        .build()
        .unwrap();

    assert_eq!(config.root.as_deref(), Some("/from/code"));
    assert_eq!(config.validate, Some(true));
}

#[test]
#[serial]
fn test_skip_env_ignores_variables() {
    let _clean = clear_rootpaths_env_vars();
    let _root = EnvGuard::new("ROOTPATHS_ROOT", "/from/env");

    let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
    assert!(config.root.is_none());
}

#[test]
#[serial]
fn test_invalid_env_bool() {
    let _clean = clear_rootpaths_env_vars();
    let _validate = EnvGuard::new("ROOTPATHS_VALIDATE", "perhaps");

    let err = ConfigBuilder::new().skip_files().build().unwrap_err();
    assert!(err.to_string().contains("ROOTPATHS_VALIDATE"));
}

#[test]
#[serial]
fn test_defaults_when_nothing_configured() {
    let _clean = clear_rootpaths_env_vars();
    let project = ProjectFixture::new().build();

    let config = ConfigBuilder::new()
        .with_working_dir(project.path())
        .build()
        .unwrap();

    assert!(config.auto_discover_enabled());
    assert!(!config.validate_enabled());

    let paths = config.into_paths("/var/www/app").unwrap();
    assert_eq!(paths.public_path(), "/var/www/app/public");
}

//! Formatter implementations.

use super::OutputFormatter;
use crate::path::ResolvedPaths;
use crate::{Error, Result};

/// Formatter for human-readable output.
///
/// One `name  path` line per entry with names padded to a common width.
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format(&self, paths: &ResolvedPaths) -> Result<String> {
        if paths.is_empty() {
            return Ok("No paths resolved.".to_string());
        }

        let width = paths.names().map(str::len).max().unwrap_or(0);
        let lines: Vec<String> = paths
            .iter()
            .map(|(name, path)| format!("{name:<width$}  {path}"))
            .collect();

        Ok(lines.join("\n"))
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, paths: &ResolvedPaths) -> Result<String> {
        Ok(serde_json::to_string_pretty(paths)?)
    }
}

/// Formatter for YAML output.
pub struct YamlFormatter;

impl OutputFormatter for YamlFormatter {
    fn format(&self, paths: &ResolvedPaths) -> Result<String> {
        let yaml = serde_yaml::to_string(paths).map_err(Error::YamlSerialization)?;
        Ok(yaml.trim_end().to_string())
    }
}

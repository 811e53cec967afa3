//! Output formatting for resolved path maps.
//!
//! Renders an ordered name to path map as aligned human-readable lines,
//! JSON, or YAML.

mod formatters;

use std::fmt;
use std::str::FromStr;

use crate::path::ResolvedPaths;
use crate::Result;

pub use formatters::{HumanFormatter, JsonFormatter, YamlFormatter};

/// Trait for formatting resolved paths into different output formats.
pub trait OutputFormatter {
    /// Format the given paths into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, paths: &ResolvedPaths) -> Result<String>;
}

/// Available output formats.
///
/// # Examples
///
/// ```
/// use rootpaths::output::OutputFormat;
/// use rootpaths::ResolvedPaths;
///
/// let paths: ResolvedPaths = [("root", "/app"), ("config", "/app/config")]
///     .into_iter()
///     .collect();
///
/// let text = OutputFormat::Human.create_formatter().format(&paths).unwrap();
/// assert_eq!(text, "root    /app\nconfig  /app/config");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned `name  path` lines.
    #[default]
    Human,
    /// Pretty-printed JSON object.
    Json,
    /// YAML mapping.
    Yaml,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Human => Box::new(HumanFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Yaml => Box::new(YamlFormatter),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(format!("unknown output format: {s}")),
        }
    }
}

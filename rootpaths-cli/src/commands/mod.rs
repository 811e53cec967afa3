//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `show`: Print every resolved path
//! - `get`: Print one path
//! - `join`: Join a relative path onto the project root
//! - `discover`: Print only what auto-discovery finds
//! - `validate`: Check that every resolved path exists
//! - `build_paths`: Print front-end build locations
//! - `base_path`: Detect the URL base path of a request
//! - `completions`: Generate shell completion scripts

pub mod base_path;
pub mod build_paths;
pub mod completions;
pub mod discover;
pub mod get;
pub mod join;
pub mod show;
pub mod validate;

use clap::ValueEnum;
use rootpaths::output::OutputFormat;

pub use base_path::BasePathCommand;
pub use build_paths::BuildPathsCommand;
pub use completions::CompletionsCommand;
pub use discover::DiscoverCommand;
pub use get::GetCommand;
pub use join::JoinCommand;
pub use show::ShowCommand;
pub use validate::ValidateCommand;

/// Output format argument for clap.
#[derive(Debug, Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormatArg {
    /// Aligned name and path columns
    Human,
    /// JSON object
    Json,
    /// YAML mapping
    Yaml,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Yaml => OutputFormat::Yaml,
        }
    }
}

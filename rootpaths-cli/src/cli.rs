//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    BasePathCommand, BuildPathsCommand, CompletionsCommand, DiscoverCommand, GetCommand,
    JoinCommand, ShowCommand, ValidateCommand,
};
use crate::utils::GlobalOptions;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for inspecting a web project's directory layout.
#[derive(Parser)]
#[command(name = "rootpaths")]
#[command(version, about = "Resolve a web project's standard directories", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Project root directory (defaults to the current directory)
    #[arg(long, value_name = "PATH", global = true, env = "ROOTPATHS_ROOT")]
    pub root: Option<PathBuf>,

    /// Configuration file to load instead of searching for rootpaths.yaml
    #[arg(long, value_name = "PATH", global = true, env = "ROOTPATHS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable auto-discovery of conventional directories
    #[arg(long, global = true)]
    pub no_discover: bool,

    /// Fail if any resolved path is not an existing directory
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// The options every command sees.
    pub fn global_options(&self) -> GlobalOptions {
        GlobalOptions {
            verbose: self.verbose,
            quiet: self.quiet,
            root: self.root.clone(),
            config: self.config.clone(),
            no_discover: self.no_discover,
            strict: self.strict,
        }
    }
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print every resolved path
    Show(ShowCommand),

    /// Print the path for one category
    Get(GetCommand),

    /// Join a relative path onto the project root
    Join(JoinCommand),

    /// Print only the directories auto-discovery finds
    Discover(DiscoverCommand),

    /// Check that every resolved path exists
    Validate(ValidateCommand),

    /// Print front-end build locations
    BuildPaths(BuildPathsCommand),

    /// Detect the URL base path of a request
    BasePath(BasePathCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

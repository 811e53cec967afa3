//! Command to print only the directories auto-discovery finds.

use super::OutputFormatArg;
use crate::error::CliError;
use crate::utils::{default_root, format_paths, load_configuration, GlobalOptions};
use clap::Args;
use rootpaths::path::normalize::normalize;
use rootpaths::PathDiscoverer;

/// Probe the project root for conventional directories.
#[derive(Args)]
pub struct DiscoverCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormatArg,
}

impl DiscoverCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let root = match config.root {
            Some(root) => root,
            None => default_root()?,
        };

        let found = PathDiscoverer::new().discover(&normalize(&root));
        println!("{}", format_paths(self.format.into(), &found)?);
        Ok(())
    }
}

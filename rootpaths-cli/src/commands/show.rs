//! Command to print every resolved path.

use super::OutputFormatArg;
use crate::error::CliError;
use crate::utils::{format_paths, load_paths, GlobalOptions};
use clap::Args;

/// Print every resolved path.
#[derive(Args)]
pub struct ShowCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormatArg,
}

impl ShowCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let paths = load_paths(global)?;
        println!("{}", format_paths(self.format.into(), paths.all())?);
        Ok(())
    }
}

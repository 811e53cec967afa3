//! Command to join a relative path onto the project root.

use crate::error::CliError;
use crate::utils::{load_paths, GlobalOptions};
use clap::Args;

/// Join a relative path onto the project root.
#[derive(Args)]
pub struct JoinCommand {
    /// Path relative to the project root (a leading slash is ignored)
    #[arg(value_name = "RELATIVE")]
    pub relative: String,
}

impl JoinCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let paths = load_paths(global)?;
        println!("{}", paths.path(&self.relative));
        Ok(())
    }
}

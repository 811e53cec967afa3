//! Command to check that every resolved path exists.

use crate::error::CliError;
use crate::utils::{default_root, load_configuration, GlobalOptions};
use clap::Args;
use rootpaths::PathValidator;

/// Check that every resolved path is an existing directory.
#[derive(Args)]
pub struct ValidateCommand {}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut config = load_configuration(global)?;
        // Report every missing path instead of stopping at the first
        config.validate = Some(false);
        let paths = config.into_paths(&default_root()?)?;

        let missing = PathValidator::new().missing(paths.all());
        if missing.is_empty() {
            if !global.quiet {
                println!("All {} paths exist", paths.all().len());
            }
            return Ok(());
        }

        for (name, path) in &missing {
            eprintln!("missing: {name} ({path})");
        }

        Err(CliError::SemanticFailure(format!(
            "{} of {} paths are missing",
            missing.len(),
            paths.all().len()
        )))
    }
}

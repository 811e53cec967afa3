//! Command to print a single resolved path.

use crate::error::CliError;
use crate::utils::{load_paths, GlobalOptions};
use clap::Args;
use rootpaths::config::ConfigValidator;

/// Print the path for one category or custom name.
#[derive(Args)]
pub struct GetCommand {
    /// Category (config, views, logs, ...) or custom override name
    #[arg(value_name = "CATEGORY")]
    pub category: String,
}

impl GetCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        ConfigValidator::validate_name(&self.category)
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        let paths = load_paths(global)?;

        match paths.get_named(&self.category) {
            Some(path) => {
                println!("{path}");
                Ok(())
            }
            None => Err(CliError::SemanticFailure(format!(
                "Unknown path category: {}",
                self.category
            ))),
        }
    }
}

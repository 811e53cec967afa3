//! Command to print front-end build locations.

use super::OutputFormatArg;
use crate::error::CliError;
use crate::utils::{format_paths, load_paths, GlobalOptions};
use clap::Args;
use rootpaths::{ResolvedPaths, DEFAULT_BUILD_DIRECTORY};

/// Print the build directory, built assets directory and manifest location.
#[derive(Args)]
pub struct BuildPathsCommand {
    /// Build directory name inside the public directory
    #[arg(long, value_name = "DIR", default_value = DEFAULT_BUILD_DIRECTORY)]
    pub build_dir: String,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormatArg,
}

impl BuildPathsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.build_dir.trim().is_empty() {
            return Err(CliError::InvalidArguments(
                "--build-dir cannot be empty".into(),
            ));
        }

        let paths = load_paths(global)?;

        let build: ResolvedPaths = [
            ("build", paths.build_path(&self.build_dir)),
            ("build_assets", paths.build_assets_path(&self.build_dir)),
            ("manifest", paths.vite_manifest_path(&self.build_dir)),
        ]
        .into_iter()
        .collect();

        println!("{}", format_paths(self.format.into(), &build)?);
        Ok(())
    }
}

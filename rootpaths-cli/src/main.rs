//! Main entry point for the rootpaths CLI.
//!
//! This is the command-line interface for resolving a web project's
//! standard directories:
//! - `show`: Print every resolved path
//! - `get`: Print one path
//! - `join`: Join a relative path onto the project root
//! - `discover`: Print what auto-discovery finds
//! - `validate`: Check that every path exists
//! - `build-paths`: Print front-end build locations
//! - `base-path`: Detect the URL base path of a request

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use error::INVALID_ARGUMENTS_EXIT_CODE;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(INVALID_ARGUMENTS_EXIT_CODE);
        }
        // --help and --version
        Err(e) => e.exit(),
    };

    let logger = rootpaths::init_logger(cli.verbose, cli.quiet);
    let global = cli.global_options();
    logger.debug(&format!("options: {global:?}"));

    let result = match cli.command {
        cli::Command::Show(cmd) => cmd.execute(&global),
        cli::Command::Get(cmd) => cmd.execute(&global),
        cli::Command::Join(cmd) => cmd.execute(&global),
        cli::Command::Discover(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::BuildPaths(cmd) => cmd.execute(&global),
        cli::Command::BasePath(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

//! Library exports for rootpaths-cli.
//!
//! This module exports the CLI structure for use by tests and tooling that
//! need the command definition.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;

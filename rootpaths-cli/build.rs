//! Build script for rootpaths-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this structure synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("rootpaths")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve a web project's standard directories")
        .long_about(
            "Command-line tool for inspecting where a web project keeps its configuration, \
             templates, assets, caches, logs and other standard directories",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("root")
                .long("root")
                .help("Project root directory (defaults to the current directory)")
                .value_name("PATH")
                .global(true)
                .env("ROOTPATHS_ROOT"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Configuration file to load instead of searching for rootpaths.yaml")
                .value_name("PATH")
                .global(true)
                .env("ROOTPATHS_CONFIG"),
        )
        .arg(
            Arg::new("no-discover")
                .long("no-discover")
                .help("Disable auto-discovery of conventional directories")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Fail if any resolved path is not an existing directory")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("show")
                .about("Print every resolved path")
                .long_about("Print every resolved path as aligned text, JSON or YAML"),
            Command::new("get")
                .about("Print the path for one category")
                .long_about("Print the path for a built-in category or custom override name"),
            Command::new("join")
                .about("Join a relative path onto the project root")
                .long_about("Print the project root joined with a relative path"),
            Command::new("discover")
                .about("Print only the directories auto-discovery finds")
                .long_about("Probe the project root for conventionally named directories"),
            Command::new("validate")
                .about("Check that every resolved path exists")
                .long_about("List every resolved path that is not an existing directory"),
            Command::new("build-paths")
                .about("Print front-end build locations")
                .long_about("Print the build directory, built assets directory and manifest path"),
            Command::new("base-path")
                .about("Detect the URL base path of a request")
                .long_about(
                    "Compute the URL prefix an application is served under from SCRIPT_NAME \
                     and REQUEST_URI",
                ),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("rootpaths.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}

//! Build script for sift-cli.
//!
//! This script generates man pages at build time using clap_mangen.
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
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("sift")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve analysis target paths")
        .long_about(
            "Turn include and exclude path patterns into the list of paths a static-analysis tool should visit",
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
            Arg::new("project-root")
                .long("project-root")
                .help("Project root (defaults to the nearest directory holding a sift.yaml)")
                .value_name("DIR")
                .global(true)
                .env("SIFT_PROJECT_ROOT"),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("DIR")
                .global(true)
                .env("SIFT_DATA_DIR"),
        )
        .arg(
            Arg::new("dependency-dir")
                .long("dependency-dir")
                .help("Dependency directory, relative to the project root or absolute")
                .value_name("DIR")
                .global(true)
                .env("SIFT_DEPENDENCY_DIR"),
        )
        .subcommands(vec![
            Command::new("resolve")
                .about("Print the resolved target paths")
                .long_about("Resolve patterns (or the configured scan list) to absolute paths"),
            Command::new("check-paths")
                .about("Check that paths exist and are readable")
                .long_about("Partition paths into valid, invalid and inaccessible"),
            Command::new("debug")
                .about("Show how each pattern was classified and resolved")
                .long_about("Report each pattern's dialect and absolute form with the resolved list"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a sift configuration file for errors"),
            Command::new("show-dependency-dir")
                .about("Show the detected dependency directory")
                .long_about("Display the dependency directory used for namespace patterns"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("sift.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}

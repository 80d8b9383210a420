//! Main entry point for the sift CLI.
//!
//! This is the command-line interface for the sift target resolver.
//! It provides commands for working with analysis targets:
//! - `resolve`: Print the resolved target paths
//! - `check-paths`: Check that paths exist and are readable
//! - `debug`: Show how patterns were classified and resolved
//! - `validate`: Validate a configuration file
//! - `show-dependency-dir`: Show the detected dependency directory

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Route library diagnostics through the CLI's verbosity
    sift::init_logger(cli.verbose, cli.quiet).install();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        project_root: cli.project_root,
        data_dir: cli.data_dir,
        dependency_dir: cli.dependency_dir,
    };

    let result = match cli.command {
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::CheckPaths(cmd) => cmd.execute(&global),
        cli::Command::Debug(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::ShowDependencyDir(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

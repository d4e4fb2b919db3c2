//! Main entry point for the envprobe CLI.
//!
//! This is the command-line interface for the envprobe introspection library.
//! It provides commands for querying the process environment and the host:
//! - `report`: Print a full environment report
//! - `exe`: Print the path of the current executable
//! - `resolve`: Resolve a path to its absolute form
//! - `which`: Locate an executable on the PATH
//! - `env`, `paths`, `cwd`, `home`, `user`, `os`: Individual queries

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

    // Initialize logging based on verbosity
    let _logger = envprobe::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Report(cmd) => cmd.execute(&global),
        cli::Command::Exe(cmd) => cmd.execute(&global),
        cli::Command::Cwd(cmd) => cmd.execute(&global),
        cli::Command::Home(cmd) => cmd.execute(&global),
        cli::Command::User(cmd) => cmd.execute(&global),
        cli::Command::Os(cmd) => cmd.execute(&global),
        cli::Command::Paths(cmd) => cmd.execute(&global),
        cli::Command::Env(cmd) => cmd.execute(&global),
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::Which(cmd) => cmd.execute(&global),
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

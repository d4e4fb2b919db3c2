//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, CwdCommand, EnvCommand, ExeCommand, HomeCommand, OsCommand, PathsCommand,
    ReportCommand, ResolveCommand, UserCommand, WhichCommand,
};
use clap::{Parser, Subcommand};

/// Command-line tool for environment and path introspection.
#[derive(Parser)]
#[command(name = "envprobe")]
#[command(version, about = "Inspect the process environment and host", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print a full environment report
    Report(ReportCommand),

    /// Print the path of the current executable
    Exe(ExeCommand),

    /// Print the current working directory
    Cwd(CwdCommand),

    /// Print the home directory of the current user
    Home(HomeCommand),

    /// Print the name of the current user
    User(UserCommand),

    /// Print the operating system identity
    Os(OsCommand),

    /// Print the directories of the PATH variable
    Paths(PathsCommand),

    /// Print the value of an environment variable
    Env(EnvCommand),

    /// Resolve a path to its absolute form
    Resolve(ResolveCommand),

    /// Locate an executable on the PATH
    Which(WhichCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `report`: Print a full environment report
//! - `exe`: Print the path of the current executable
//! - `cwd`: Print the current working directory
//! - `home`: Print the home directory of the current user
//! - `user`: Print the name of the current user
//! - `os`: Print the operating system identity
//! - `paths`: Print the directories of the PATH variable
//! - `env`: Print the value of an environment variable
//! - `resolve`: Resolve a path to its absolute form
//! - `which`: Locate an executable on the PATH
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod cwd;
pub mod env;
pub mod exe;
pub mod home;
pub mod os;
pub mod paths;
pub mod report;
pub mod resolve;
pub mod user;
pub mod which;

pub use completions::CompletionsCommand;
pub use cwd::CwdCommand;
pub use env::EnvCommand;
pub use exe::ExeCommand;
pub use home::HomeCommand;
pub use os::OsCommand;
pub use paths::PathsCommand;
pub use report::ReportCommand;
pub use resolve::ResolveCommand;
pub use user::UserCommand;
pub use which::WhichCommand;

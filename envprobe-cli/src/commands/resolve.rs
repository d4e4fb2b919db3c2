//! Command to resolve a path to its absolute form.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use envprobe::{full_path, parent_dir, real_path};
use std::path::PathBuf;

/// Resolve a path against the working directory.
///
/// By default resolution is purely lexical: the path is made absolute and
/// `.` and `..` segments are folded away without touching the filesystem.
#[derive(Args)]
pub struct ResolveCommand {
    /// Path to resolve
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Resolve symlinks against the filesystem (the path must exist)
    #[arg(long)]
    pub real: bool,

    /// Print the parent directory of the resolved path
    #[arg(long)]
    pub parent: bool,
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let resolved = if self.real {
            real_path(&self.path)?
        } else {
            full_path(&self.path)?
        };

        let resolved = if self.parent {
            parent_dir(&resolved)?
        } else {
            resolved
        };

        println!("{}", resolved.display());
        Ok(())
    }
}

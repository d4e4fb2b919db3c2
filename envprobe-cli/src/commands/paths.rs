//! Command to print the directories of the PATH variable.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use envprobe::env_paths;
use std::io::Write;

/// Print every PATH directory on its own line, in search order.
///
/// An empty PATH prints nothing and succeeds; an unset PATH fails.
#[derive(Args)]
pub struct PathsCommand {}

impl PathsCommand {
    /// Execute the paths command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let dirs = env_paths()
            .ok_or_else(|| CliError::Absent("PATH is not set in this environment".to_string()))?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        for dir in dirs {
            writeln!(handle, "{}", dir.display())?;
        }

        Ok(())
    }
}

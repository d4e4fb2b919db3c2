//! Command to print the current working directory.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;

/// Print the working directory of this process.
#[derive(Args)]
pub struct CwdCommand {}

impl CwdCommand {
    /// Execute the cwd command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let dir = envprobe::cwd()?;
        println!("{}", dir.display());
        Ok(())
    }
}

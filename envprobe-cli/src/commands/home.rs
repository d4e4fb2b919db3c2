//! Command to print the home directory of the current user.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use envprobe::home_dir;

/// Print the home directory of the user running this process.
#[derive(Args)]
pub struct HomeCommand {}

impl HomeCommand {
    /// Execute the home command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let home = home_dir()?;
        println!("{}", home.display());
        Ok(())
    }
}

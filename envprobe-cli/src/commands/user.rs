//! Command to print the name of the current user.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use envprobe::username;

/// Print the login name of the user running this process.
#[derive(Args)]
pub struct UserCommand {}

impl UserCommand {
    /// Execute the user command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let name = username()?;
        println!("{name}");
        Ok(())
    }
}

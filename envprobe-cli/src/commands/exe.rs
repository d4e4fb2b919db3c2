//! Command to print the path of the current executable.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use envprobe::{executable_dir, executable_path};

/// Print the absolute path of the running binary.
#[derive(Args)]
pub struct ExeCommand {
    /// Print the containing directory instead of the full path
    #[arg(long)]
    pub dir: bool,
}

impl ExeCommand {
    /// Execute the exe command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let path = if self.dir {
            executable_dir()?
        } else {
            executable_path()?
        };

        println!("{}", path.display());
        Ok(())
    }
}

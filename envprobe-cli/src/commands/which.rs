//! Command to locate an executable on the PATH.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use envprobe::find_in_path;

/// Search the PATH directories in order and print the first match.
#[derive(Args)]
pub struct WhichCommand {
    /// Name of the file to look up
    #[arg(value_name = "NAME")]
    pub name: String,
}

impl WhichCommand {
    /// Execute the which command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        if self.name.is_empty() {
            return Err(CliError::InvalidArguments(
                "name must be non-empty".to_string(),
            ));
        }

        match find_in_path(&self.name) {
            Some(path) => {
                println!("{}", path.display());
                Ok(())
            }
            None => Err(CliError::Absent(format!("{} not found on PATH", self.name))),
        }
    }
}

//! Command to print the value of an environment variable.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use envprobe::get_env;

/// Print the bare value of a variable, for use in scripts.
#[derive(Args)]
pub struct EnvCommand {
    /// Name of the variable to read
    #[arg(value_name = "NAME")]
    pub name: String,
}

impl EnvCommand {
    /// Execute the env command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        // Reject names the environment cannot hold, rather than folding them
        // into the unset case.
        if self.name.is_empty() {
            return Err(CliError::InvalidArguments(
                "variable name must be non-empty".to_string(),
            ));
        }
        if self.name.contains('=') {
            return Err(CliError::InvalidArguments(
                "variable name must not contain '='".to_string(),
            ));
        }

        match get_env(&self.name) {
            Some(value) => {
                println!("{value}");
                Ok(())
            }
            None => Err(CliError::Absent(format!("{} is not set", self.name))),
        }
    }
}

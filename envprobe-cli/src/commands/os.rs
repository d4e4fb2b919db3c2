//! Command to print the operating system identity.

use crate::error::CliError;
use crate::utils::{GlobalOptions, OutputFormat};
use clap::Args;
use envprobe::{os_name, os_product_name, os_version};
use std::io::Write;

/// Print the kernel name, version, and product name of the host.
#[derive(Args)]
pub struct OsCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: OutputFormat,
}

impl OsCommand {
    /// Execute the os command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        // All three or nothing: a partially identified host is not scriptable.
        let name = os_name()?;
        let version = os_version()?;
        let product = os_product_name()?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();

        match self.format {
            OutputFormat::Text => {
                writeln!(handle, "OS: {name}")?;
                writeln!(handle, "OS version: {version}")?;
                writeln!(handle, "OS product name: {product}")?;
            }
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "name": name,
                    "version": version,
                    "product_name": product,
                });
                serde_json::to_writer_pretty(&mut handle, &json)
                    .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
                writeln!(handle)?;
            }
        }

        Ok(())
    }
}

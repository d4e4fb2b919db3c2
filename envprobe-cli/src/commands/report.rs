//! Command to print the full environment report.

use crate::error::CliError;
use crate::utils::{render_report_text, GlobalOptions, OutputFormat};
use clap::Args;
use envprobe::EnvReport;
use std::io::Write;

/// Print everything the library can determine about the process and host.
///
/// Collection is best effort: fields that cannot be determined are rendered
/// as `-` in text output and `null` in JSON, and the command still succeeds.
#[derive(Args)]
pub struct ReportCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: OutputFormat,
}

impl ReportCommand {
    /// Execute the report command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let report = EnvReport::collect();

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();

        match self.format {
            OutputFormat::Text => {
                write!(handle, "{}", render_report_text(&report))?;
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut handle, &report)
                    .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
                writeln!(handle)?;
            }
        }

        Ok(())
    }
}

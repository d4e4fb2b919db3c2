//! Utility functions for CLI operations.
//!
//! This module provides common helpers used across CLI commands, including
//! shared output formats and the text rendering of the environment report.

use clap::ValueEnum;
use envprobe::EnvReport;
use std::fmt::Write;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields consumed by the logger setup in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,
}

/// Output format for multi-value commands.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Labeled lines (human-readable)
    Text,
    /// JSON object
    Json,
}

/// Render an optional value for text output, with `-` standing in for
/// anything that could not be determined.
pub fn display_or_dash<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Render the full report as labeled lines.
pub fn render_report_text(report: &EnvReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "envprobe v{}", report.version);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Executable path: {}",
        display_or_dash(report.executable_path.as_ref().map(|p| p.display()))
    );
    let _ = writeln!(
        out,
        "Executable dir: {}",
        display_or_dash(report.executable_dir.as_ref().map(|p| p.display()))
    );
    let _ = writeln!(
        out,
        "CWD: {}",
        display_or_dash(report.cwd.as_ref().map(|p| p.display()))
    );
    let _ = writeln!(
        out,
        "Home: {}",
        display_or_dash(report.home_dir.as_ref().map(|p| p.display()))
    );
    let _ = writeln!(out, "User: {}", display_or_dash(report.username.as_ref()));
    let _ = writeln!(out, "OS: {}", display_or_dash(report.os_name.as_ref()));
    let _ = writeln!(
        out,
        "OS version: {}",
        display_or_dash(report.os_version.as_ref())
    );
    let _ = writeln!(
        out,
        "OS product name: {}",
        display_or_dash(report.os_product_name.as_ref())
    );
    match &report.env_paths {
        Some(dirs) => {
            let _ = writeln!(out, "PATH:");
            for dir in dirs {
                let _ = writeln!(out, "  {}", dir.display());
            }
        }
        None => {
            let _ = writeln!(out, "PATH: -");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_or_dash() {
        assert_eq!(display_or_dash(Some("value")), "value");
        assert_eq!(display_or_dash::<&str>(None), "-");
    }

    #[test]
    fn test_render_report_text_labels_every_field() {
        let report = EnvReport::collect();
        let text = render_report_text(&report);

        for label in [
            "Executable path:",
            "Executable dir:",
            "CWD:",
            "Home:",
            "User:",
            "OS:",
            "OS version:",
            "OS product name:",
            "PATH",
        ] {
            assert!(text.contains(label), "missing label: {label}");
        }
        assert!(text.starts_with(&format!("envprobe v{}", report.version)));
    }
}

//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use envprobe::Error as LibError;
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// A queried value is absent (variable unset, executable not on PATH).
    Absent(String),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Value could not be determined or is absent
    /// - 2: Invalid arguments
    /// - 3: I/O error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Absent(_) => 1,
            CliError::Library(lib_err) => match lib_err {
                LibError::InvalidPath { .. } | LibError::InvalidArgument { .. } => 2,
                LibError::Io(_) => 3,
                _ => 1,
            },
            CliError::InvalidArguments(_) => 2,
            CliError::Io(_) => 3,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::Absent(msg) => write!(f, "{msg}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_maps_to_exit_one() {
        let err = CliError::Absent("PATH is not set".to_string());
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_undetermined_library_error_maps_to_exit_one() {
        let err = CliError::from(LibError::NotDetermined {
            what: "home directory",
        });
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_invalid_input_maps_to_exit_two() {
        let err = CliError::from(LibError::InvalidArgument {
            what: "variable name",
            reason: "must be non-empty".to_string(),
        });
        assert_eq!(err.exit_code(), 2);

        let err = CliError::InvalidArguments("name must be non-empty".to_string());
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_io_maps_to_exit_three() {
        let err = CliError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            "disk on fire",
        ));
        assert_eq!(err.exit_code(), 3);
    }
}

//! Error types for the envprobe library.
//!
//! This module provides the error hierarchy for all operations in the
//! envprobe library, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with an envprobe error.
///
/// # Examples
///
/// ```
/// use envprobe::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("Linux".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the envprobe library.
///
/// Every failing query maps to one of these variants. An error always means
/// "absent": no operation returns a partial or placeholder value alongside
/// a failure.
#[derive(Debug, Error)]
pub enum Error {
    /// An OS query failed or returned no usable data.
    ///
    /// This also covers operations with no meaningful implementation on the
    /// current platform; callers see both cases as "could not determine".
    #[error("could not determine {what}")]
    NotDetermined {
        /// The quantity that could not be determined.
        what: &'static str,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// An argument violated the operation's contract.
    #[error("invalid {what}: {reason}")]
    InvalidArgument {
        /// The argument that was invalid.
        what: &'static str,
        /// The reason the argument is invalid.
        reason: String,
    },

    /// A path does not exist.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if error indicates an undetermined result.
    ///
    /// # Examples
    ///
    /// ```
    /// use envprobe::Error;
    ///
    /// let err = Error::NotDetermined { what: "home directory" };
    /// assert!(err.is_not_determined());
    /// ```
    #[must_use]
    pub fn is_not_determined(&self) -> bool {
        matches!(self, Self::NotDetermined { .. })
    }

    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use envprobe::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }

    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use envprobe::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PermissionDenied { path: PathBuf::from("/restricted") };
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }

    /// Check if error indicates an invalid argument or path.
    ///
    /// # Examples
    ///
    /// ```
    /// use envprobe::Error;
    ///
    /// let err = Error::InvalidArgument {
    ///     what: "variable name",
    ///     reason: "must be non-empty".to_string(),
    /// };
    /// assert!(err.is_invalid_input());
    /// ```
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. } | Self::InvalidPath { .. })
    }
}

//! Current working directory access.

use std::env;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Returns the current working directory.
///
/// # Errors
///
/// Returns `NotDetermined` if the OS cannot report a working directory,
/// which happens when it has been deleted out from under the process.
///
/// # Examples
///
/// ```
/// let dir = envprobe::cwd().unwrap();
/// assert!(dir.is_absolute());
/// ```
pub fn cwd() -> Result<PathBuf> {
    env::current_dir().map_err(|_| Error::NotDetermined {
        what: "working directory",
    })
}

/// Changes the current working directory.
///
/// # Errors
///
/// Returns an error if:
/// - The path does not exist (`PathNotFound`)
/// - Permission is denied (`PermissionDenied`)
/// - Another I/O error occurs (`Io`), including the path not being a
///   directory
pub fn set_cwd(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    env::set_current_dir(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::PathNotFound {
            path: path.to_path_buf(),
        },
        ErrorKind::PermissionDenied => Error::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => Error::Io(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_cwd_is_absolute() {
        let dir = cwd().unwrap();
        assert!(dir.is_absolute());
    }

    #[test]
    #[serial]
    fn test_set_cwd_round_trip() {
        let original = cwd().unwrap();
        let target = tempfile::tempdir().unwrap();

        set_cwd(target.path()).unwrap();
        // Compare canonical forms; the tempdir may live behind a symlink
        // (macOS /tmp, for instance).
        assert_eq!(
            std::fs::canonicalize(cwd().unwrap()).unwrap(),
            std::fs::canonicalize(target.path()).unwrap()
        );

        set_cwd(&original).unwrap();
        assert_eq!(cwd().unwrap(), original);
    }

    #[test]
    #[serial]
    fn test_set_cwd_missing_path() {
        let target = tempfile::tempdir().unwrap();
        let missing = target.path().join("not-here");

        let err = set_cwd(&missing).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    #[serial]
    fn test_set_cwd_to_file_fails() {
        let target = tempfile::tempdir().unwrap();
        let file = target.path().join("plain-file");
        std::fs::write(&file, b"x").unwrap();

        assert!(set_cwd(&file).is_err());
    }
}

//! Filesystem-backed path resolution and existence checks.
//!
//! The counterpart to the lexical engine: [`real_path`] asks the OS for the
//! canonical form of an existing path, following symlinks, and the existence
//! predicates answer what the path currently names. Everything here touches
//! the real filesystem.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Resolves `path` against the real filesystem.
///
/// The path must exist; every symlink in it is followed and all dot
/// segments are resolved by the OS. On Windows the `\\?\` verbatim prefix
/// that `std` adds is stripped from plain drive paths for display
/// compatibility.
///
/// # Errors
///
/// Returns an error if:
/// - The path does not exist (`PathNotFound`)
/// - Permission is denied (`PermissionDenied`)
/// - Another I/O error occurs
///
/// # Examples
///
/// ```no_run
/// let real = envprobe::real_path("/tmp").unwrap();
/// assert!(real.is_absolute());
/// ```
pub fn real_path(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    let resolved = fs::canonicalize(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::PathNotFound {
            path: path.to_path_buf(),
        },
        ErrorKind::PermissionDenied => Error::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => Error::Io(e),
    })?;
    Ok(strip_verbatim(resolved))
}

#[cfg(windows)]
fn strip_verbatim(path: PathBuf) -> PathBuf {
    let Some(text) = path.to_str() else {
        return path;
    };
    let Some(stripped) = text.strip_prefix(r"\\?\") else {
        return path;
    };
    let bytes = stripped.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        PathBuf::from(stripped)
    } else {
        // UNC and device paths keep the verbatim form.
        path
    }
}

#[cfg(not(windows))]
fn strip_verbatim(path: PathBuf) -> PathBuf {
    path
}

/// Returns true iff `path` names an existing regular file.
///
/// Symlinks are followed, so a symlink to a regular file counts. Broken
/// symlinks, directories, and anything unreadable do not.
///
/// # Examples
///
/// ```no_run
/// assert!(envprobe::file_exists("/etc/hosts"));
/// assert!(!envprobe::file_exists("/etc"));
/// ```
#[must_use]
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    fs::metadata(path).map_or(false, |meta| meta.is_file())
}

/// Returns true iff `path` names anything that currently exists.
///
/// Symlinks are followed; a broken symlink does not exist by this test.
#[must_use]
pub fn path_exists(path: impl AsRef<Path>) -> bool {
    fs::metadata(path).is_ok()
}

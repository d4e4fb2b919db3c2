//! Parsing, joining, and searching PATH-style variable values.
//!
//! The parser is deliberately forgiving: zero-length segments produced by
//! doubled, leading, or trailing delimiters are dropped rather than reported,
//! because real-world PATH values accumulate them and no platform treats
//! them as meaningful entries.

use std::path::{Path, PathBuf};

use crate::env::vars::get_env;
use crate::path::file_exists;
use crate::platform::Platform;

/// Splits a delimiter-separated path list into its entries.
///
/// Zero-length segments are dropped, so consecutive delimiters and
/// delimiters at either end of the string contribute nothing. An empty
/// input yields an empty list.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
///
/// let paths = envprobe::split_path_list("/usr/bin::/bin:", ':');
/// assert_eq!(paths, vec![PathBuf::from("/usr/bin"), PathBuf::from("/bin")]);
///
/// assert!(envprobe::split_path_list("", ':').is_empty());
/// ```
#[must_use]
pub fn split_path_list(value: &str, delimiter: char) -> Vec<PathBuf> {
    value
        .split(delimiter)
        .filter(|segment| !segment.is_empty())
        .map(PathBuf::from)
        .collect()
}

/// Splits a path list using the running platform's delimiter.
///
/// The delimiter is `;` on Windows and `:` everywhere else.
///
/// # Examples
///
/// ```
/// let paths = envprobe::parse_env_paths("");
/// assert!(paths.is_empty());
/// ```
#[must_use]
pub fn parse_env_paths(value: &str) -> Vec<PathBuf> {
    split_path_list(value, Platform::current().path_delimiter())
}

/// Reads and parses the current `PATH` variable.
///
/// Returns `None` when the variable is unset (or unreadable as UTF-8). A
/// set-but-empty `PATH` yields `Some` of an empty list; the two states are
/// deliberately kept distinct.
#[must_use]
pub fn env_paths() -> Option<Vec<PathBuf>> {
    get_env("PATH").map(|value| parse_env_paths(&value))
}

/// Joins path entries into a delimiter-separated list.
///
/// The inverse of [`split_path_list`] for entries that are non-empty and
/// contain no delimiter characters.
///
/// # Examples
///
/// ```
/// let joined = envprobe::join_path_list(&["/usr/bin", "/bin"], ':');
/// assert_eq!(joined, "/usr/bin:/bin");
/// ```
#[must_use]
pub fn join_path_list<P: AsRef<Path>>(paths: &[P], delimiter: char) -> String {
    paths
        .iter()
        .map(|p| p.as_ref().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(&delimiter.to_string())
}

/// Joins path entries using the running platform's delimiter.
#[must_use]
pub fn join_env_paths<P: AsRef<Path>>(paths: &[P]) -> String {
    join_path_list(paths, Platform::current().path_delimiter())
}

/// Searches the given directories, in order, for a regular file `name`.
///
/// This is the search core behind [`find_in_path`]; taking the directory
/// list as an argument keeps it testable without touching the process
/// environment.
#[must_use]
pub fn find_in_path_dirs<P: AsRef<Path>>(name: &str, dirs: &[P]) -> Option<PathBuf> {
    if name.is_empty() {
        return None;
    }
    for dir in dirs {
        let candidate = dir.as_ref().join(name);
        if file_exists(&candidate) {
            log::debug!("found {name} at {}", candidate.display());
            return Some(candidate);
        }
    }
    None
}

/// Searches the current `PATH` list for a regular file `name`.
///
/// Entries are tried in order of appearance; the first directory containing
/// a regular file with the given name wins. Returns `None` when `PATH` is
/// unset or no entry matches.
#[must_use]
pub fn find_in_path(name: &str) -> Option<PathBuf> {
    let dirs = env_paths()?;
    find_in_path_dirs(name, &dirs)
}

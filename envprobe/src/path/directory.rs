//! Lexical parent extraction.
//!
//! A pure string chop: no resolution, no filesystem access, separators kept
//! as written. `parent_dir("/usr/lib")` is `/usr`, a separator-free input
//! answers `.`, and a root is its own parent.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::style::PathStyle;

fn is_bare_drive(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Extracts the parent of `path` under an explicit style.
///
/// Trailing separators are ignored (`usr/` has parent `.`), the root is
/// returned unchanged, and everything else is cut at its last separator.
/// The input's own separator characters are kept as written; nothing is
/// normalized.
///
/// # Examples
///
/// ```
/// use envprobe::{parent_dir_with, PathStyle};
///
/// assert_eq!(parent_dir_with("/usr/lib", PathStyle::Posix), "/usr");
/// assert_eq!(parent_dir_with("usr", PathStyle::Posix), ".");
/// assert_eq!(parent_dir_with("C:\\usr\\", PathStyle::Windows), "C:\\");
/// ```
#[must_use]
pub fn parent_dir_with(path: &str, style: PathStyle) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let (root, rest) = style.split_root(path);
    if root.is_some() && rest.chars().all(|c| style.is_separator(c)) {
        // A root is its own parent; extra trailing separators drop off.
        let root_len = path.len() - rest.len();
        return path[..root_len].to_string();
    }

    let trimmed = path.trim_end_matches(|c| style.is_separator(c));
    let Some((idx, _)) = trimmed
        .char_indices()
        .rev()
        .find(|&(_, c)| style.is_separator(c))
    else {
        return ".".to_string();
    };

    let head = trimmed[..idx].trim_end_matches(|c| style.is_separator(c));
    if head.is_empty() {
        // Only separators before the cut: the parent is that leading run.
        let leading = trimmed.len() - trimmed.trim_start_matches(|c| style.is_separator(c)).len();
        return trimmed[..leading].to_string();
    }
    if style == PathStyle::Windows && is_bare_drive(head) {
        // Keep the separator after the drive letter, as written.
        return trimmed[..=idx].to_string();
    }
    head.to_string()
}

/// Extracts the parent of `path` in the native style.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] only if the path is not valid UTF-8.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
///
/// assert_eq!(envprobe::parent_dir("/usr/lib").unwrap(), PathBuf::from("/usr"));
/// assert_eq!(envprobe::parent_dir("usr").unwrap(), PathBuf::from("."));
/// ```
pub fn parent_dir(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    let text = path.to_str().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "path contains invalid UTF-8".to_string(),
    })?;
    Ok(PathBuf::from(parent_dir_with(text, PathStyle::native())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posix_grid() {
        let cases = [
            ("/usr/lib", "/usr"),
            ("/usr/", "/"),
            ("usr", "."),
            ("usr/", "."),
            ("/", "/"),
            (".", "."),
            ("..", "."),
            ("", "."),
        ];
        for (input, expected) in cases {
            assert_eq!(
                parent_dir_with(input, PathStyle::Posix),
                expected,
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_windows_grid() {
        let cases = [
            ("C:\\usr\\lib", "C:\\usr"),
            ("C:\\usr\\", "C:\\"),
            ("C:\\", "C:\\"),
            ("C:/usr", "C:/"),
            ("usr\\lib", "usr"),
            ("usr\\", "."),
            ("\\usr", "\\"),
        ];
        for (input, expected) in cases {
            assert_eq!(
                parent_dir_with(input, PathStyle::Windows),
                expected,
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_separators_kept_as_written() {
        assert_eq!(parent_dir_with("a//b", PathStyle::Posix), "a");
        assert_eq!(parent_dir_with("//srv/a", PathStyle::Posix), "//srv");
        assert_eq!(parent_dir_with("//a", PathStyle::Posix), "//");
        assert_eq!(
            parent_dir_with("C:\\usr/lib", PathStyle::Windows),
            "C:\\usr"
        );
    }

    #[test]
    fn test_root_with_extra_separators() {
        assert_eq!(parent_dir_with("///", PathStyle::Posix), "/");
        assert_eq!(parent_dir_with("C:\\\\", PathStyle::Windows), "C:\\");
    }

    #[test]
    fn test_native_wrapper() {
        assert_eq!(parent_dir("").unwrap(), PathBuf::from("."));
        #[cfg(unix)]
        {
            assert_eq!(parent_dir("/usr/lib").unwrap(), PathBuf::from("/usr"));
            assert_eq!(parent_dir("/usr/").unwrap(), PathBuf::from("/"));
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_rejected() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let bad = OsStr::from_bytes(b"/usr/\xff");
        let err = parent_dir(Path::new(bad)).unwrap_err();
        assert!(err.is_invalid_input());
    }
}

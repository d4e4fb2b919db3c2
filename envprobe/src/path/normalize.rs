//! Lexical path resolution.
//!
//! This module turns a possibly-relative, possibly-dotted path into a clean
//! absolute path using only string scanning:
//! - `.` segments are dropped and `..` segments pop the previous segment
//! - pops above the root are absorbed at the root, never an error
//! - duplicate separators follow the style's policy (POSIX keeps the empty
//!   segments they create, Windows drops them)
//! - the output carries no trailing separator unless it is exactly a root
//!
//! Nothing here touches the filesystem: no existence checks and no symlink
//! resolution (see [`real_path`](crate::path::real_path) for that).

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::style::{PathStyle, Root};

/// What a scanned segment means to the resolver.
#[derive(Debug, PartialEq, Eq)]
enum Directive {
    /// Contributes nothing (`.`, and segments a style drops).
    Stay,
    /// Removes the previously kept segment (`..`).
    Pop,
    /// An ordinary name, kept verbatim.
    Keep,
}

/// Classifies one separator-free segment.
///
/// A run of exactly one or two dots is a directive; three or more dots, or
/// dots mixed with other characters, name a real file. Windows additionally
/// reads four or more dots as `.` (the `GetFullPathNameW` compatibility
/// rule); exactly three dots stay literal everywhere.
fn classify_segment(segment: &str, style: PathStyle) -> Directive {
    if segment.is_empty() {
        return if style.keeps_empty_segments() {
            Directive::Keep
        } else {
            Directive::Stay
        };
    }
    if !segment.bytes().all(|b| b == b'.') {
        return Directive::Keep;
    }
    match segment.len() {
        1 => Directive::Stay,
        2 => Directive::Pop,
        n if n >= 4 && style.collapses_long_dot_runs() => Directive::Stay,
        _ => Directive::Keep,
    }
}

/// Splits `text` on the style's separators and folds the directives into
/// `segments`.
///
/// Pops that underflow the segment stack are counted in `carried_pops`
/// instead; the caller absorbs them at a root or carries them into the
/// working directory. A trailing separator contributes no segment.
fn fold_segments(
    text: &str,
    style: PathStyle,
    segments: &mut Vec<String>,
    carried_pops: &mut usize,
) {
    let mut pieces = text.split(|c: char| style.is_separator(c)).peekable();
    while let Some(piece) = pieces.next() {
        if pieces.peek().is_none() && piece.is_empty() {
            // End of string right after a separator (or an empty text).
            break;
        }
        match classify_segment(piece, style) {
            Directive::Stay => {}
            Directive::Pop => {
                if segments.pop().is_none() {
                    *carried_pops += 1;
                }
            }
            Directive::Keep => segments.push(piece.to_string()),
        }
    }
}

/// Joins a root and its segments back into a path string.
///
/// Trailing empty segments (leftovers of trailing duplicate separators) are
/// dropped so the result never ends in a separator unless it is the root.
fn render(root: Root, segments: &[String], style: PathStyle) -> String {
    let mut end = segments.len();
    while end > 0 && segments[end - 1].is_empty() {
        end -= 1;
    }
    let mut out = root.render();
    for (i, segment) in segments[..end].iter().enumerate() {
        if i > 0 {
            out.push(style.separator());
        }
        out.push_str(segment);
    }
    out
}

/// Resolves a `CurrentDrive` root against the working directory's root.
fn anchor_root(root: Root, cwd: Option<&str>, style: PathStyle, original: &str) -> Result<Root> {
    if root != Root::CurrentDrive {
        return Ok(root);
    }
    let Some(cwd) = cwd else {
        return Err(Error::InvalidPath {
            path: PathBuf::from(original),
            reason: "drive-less absolute path requires a working directory".to_string(),
        });
    };
    match style.split_root(cwd).0 {
        Some(cwd_root) => Ok(cwd_root),
        None => Err(Error::InvalidPath {
            path: PathBuf::from(cwd),
            reason: "working directory must be absolute".to_string(),
        }),
    }
}

/// Resolves `path` to canonical absolute form under an explicit style.
///
/// `cwd` supplies the working directory for relative inputs (and the drive
/// for separator-leading Windows inputs); it must be absolute in the same
/// style. Absolute inputs never consult it.
///
/// This is the style-parameterized core behind [`full_path`]; it is exposed
/// so both flavors can be exercised anywhere.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if the path is empty, if a relative input
/// collapses to no segments at all (`.`, `usr/..`, and friends name no
/// target; the bare working directory would be a lie), or if a relative
/// input has no working directory to resolve against.
///
/// # Examples
///
/// ```
/// use envprobe::{resolve_with, PathStyle};
///
/// let full = resolve_with("/usr/lib/..", None, PathStyle::Posix).unwrap();
/// assert_eq!(full, "/usr");
///
/// let full = resolve_with("usr", Some("/home/me"), PathStyle::Posix).unwrap();
/// assert_eq!(full, "/home/me/usr");
///
/// let full = resolve_with("/usr/lib", Some("C:\\"), PathStyle::Windows).unwrap();
/// assert_eq!(full, "C:\\usr\\lib");
/// ```
pub fn resolve_with(path: &str, cwd: Option<&str>, style: PathStyle) -> Result<String> {
    if path.is_empty() {
        return Err(Error::InvalidPath {
            path: PathBuf::new(),
            reason: "path is empty".to_string(),
        });
    }

    let (root, rest) = style.split_root(path);
    if let Some(root) = root {
        let mut segments = Vec::new();
        let mut carried = 0;
        fold_segments(rest, style, &mut segments, &mut carried);
        // `carried` counts pops above the root; they are absorbed there.
        let root = anchor_root(root, cwd, style, path)?;
        return Ok(render(root, &segments, style));
    }

    // Relative input: reduce it on its own first.
    let mut relative = Vec::new();
    let mut carried = 0;
    fold_segments(rest, style, &mut relative, &mut carried);
    if relative.is_empty() && carried == 0 {
        return Err(Error::InvalidPath {
            path: PathBuf::from(path),
            reason: "path collapses to no segments".to_string(),
        });
    }

    let cwd = cwd.ok_or_else(|| Error::InvalidPath {
        path: PathBuf::from(path),
        reason: "relative path requires a working directory".to_string(),
    })?;
    let (cwd_root, cwd_rest) = style.split_root(cwd);
    let Some(cwd_root) = cwd_root else {
        return Err(Error::InvalidPath {
            path: PathBuf::from(cwd),
            reason: "working directory must be absolute".to_string(),
        });
    };

    let mut segments = Vec::new();
    let mut cwd_carried = 0;
    fold_segments(cwd_rest, style, &mut segments, &mut cwd_carried);
    for _ in 0..carried {
        // Pops left over from the relative part climb out of the working
        // directory and are absorbed at its root.
        let _ = segments.pop();
    }
    segments.append(&mut relative);
    Ok(render(cwd_root, &segments, style))
}

fn path_to_str(path: &Path) -> Result<&str> {
    path.to_str().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "path contains invalid UTF-8".to_string(),
    })
}

/// Whether resolution will have to look at the working directory.
fn needs_working_dir(text: &str, style: PathStyle) -> bool {
    !text.is_empty()
        && matches!(
            style.split_root(text),
            (None, _) | (Some(Root::CurrentDrive), _)
        )
}

/// Resolves `path` to canonical absolute form, lexically.
///
/// Relative inputs are resolved against the process working directory,
/// which is only queried when actually needed. The result is purely
/// lexical: no existence check, no symlink resolution, no case folding.
///
/// # Errors
///
/// Returns an error if the path is empty or collapses to no segments, if it
/// is not valid UTF-8, or if the working directory is required but cannot
/// be determined.
///
/// # Examples
///
/// ```
/// # #[cfg(unix)] {
/// use std::path::PathBuf;
///
/// let full = envprobe::full_path("/usr/lib/..").unwrap();
/// assert_eq!(full, PathBuf::from("/usr"));
/// # }
/// ```
pub fn full_path(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    let style = PathStyle::native();
    let text = path_to_str(path)?;
    if needs_working_dir(text, style) {
        let cwd = env::current_dir()?;
        let cwd_text = path_to_str(&cwd)?;
        resolve_with(text, Some(cwd_text), style).map(PathBuf::from)
    } else {
        resolve_with(text, None, style).map(PathBuf::from)
    }
}

/// Resolves `path` against an explicit working directory, lexically.
///
/// Same contract as [`full_path`], with the working directory supplied by
/// the caller instead of read from the process.
///
/// # Errors
///
/// Returns an error under the same conditions as [`full_path`], or if the
/// supplied working directory is not absolute.
///
/// # Examples
///
/// ```
/// # #[cfg(unix)] {
/// use std::path::PathBuf;
///
/// let full = envprobe::full_path_in("usr", "/home/me").unwrap();
/// assert_eq!(full, PathBuf::from("/home/me/usr"));
/// # }
/// ```
pub fn full_path_in(path: impl AsRef<Path>, cwd: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    let cwd = cwd.as_ref();
    let style = PathStyle::native();
    let text = path_to_str(path)?;
    let cwd_text = path_to_str(cwd)?;
    resolve_with(text, Some(cwd_text), style).map(PathBuf::from)
}

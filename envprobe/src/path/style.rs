//! Path style conventions.
//!
//! The lexical engine never asks the host OS how paths are spelled; it is
//! parameterized by a [`PathStyle`] value instead, so both flavors stay
//! testable on any platform. [`PathStyle::native`] selects the host flavor.

/// Separator and root conventions for one platform family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathStyle {
    /// `/`-separated paths with a single `/` root.
    Posix,
    /// `\`-separated paths with drive-letter roots; `/` is accepted on
    /// input and rewritten to `\` on output.
    Windows,
}

/// The root token of an absolute path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Root {
    /// The POSIX root `/`.
    Slash,
    /// A Windows drive root such as `C:\`. The letter keeps its input case.
    Drive(char),
    /// A Windows path starting with a bare separator; the drive is taken
    /// from the working directory during resolution.
    CurrentDrive,
}

impl Root {
    /// Renders the root, always ending in the style's separator.
    pub(crate) fn render(self) -> String {
        match self {
            Self::Slash => "/".to_string(),
            Self::Drive(letter) => format!("{letter}:\\"),
            // The resolver anchors this to a drive before rendering; the
            // bare separator is the drive-less spelling Windows itself uses.
            Self::CurrentDrive => "\\".to_string(),
        }
    }
}

impl PathStyle {
    /// The style of the platform this library was compiled for.
    ///
    /// # Examples
    ///
    /// ```
    /// use envprobe::PathStyle;
    ///
    /// assert_eq!(PathStyle::native() == PathStyle::Windows, cfg!(windows));
    /// ```
    #[must_use]
    pub fn native() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// The separator this style writes on output.
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            Self::Posix => '/',
            Self::Windows => '\\',
        }
    }

    /// Whether `c` separates segments on input.
    #[must_use]
    pub fn is_separator(self, c: char) -> bool {
        match self {
            Self::Posix => c == '/',
            Self::Windows => c == '/' || c == '\\',
        }
    }

    /// POSIX keeps empty segments produced by duplicate separators as
    /// literal empty directory names; Windows drops them.
    pub(crate) fn keeps_empty_segments(self) -> bool {
        matches!(self, Self::Posix)
    }

    /// Windows reads a run of four or more dots as `.`; POSIX treats any
    /// run of three or more dots as an ordinary file name.
    pub(crate) fn collapses_long_dot_runs(self) -> bool {
        matches!(self, Self::Windows)
    }

    /// Splits `path` into its root token (if absolute) and the remainder.
    ///
    /// Exactly one leading separator is consumed, so a POSIX `//name`
    /// prefix leaves `/name` in the remainder and survives as an empty
    /// first segment.
    pub(crate) fn split_root(self, path: &str) -> (Option<Root>, &str) {
        match self {
            Self::Posix => match path.strip_prefix('/') {
                Some(rest) => (Some(Root::Slash), rest),
                None => (None, path),
            },
            Self::Windows => {
                let bytes = path.as_bytes();
                if bytes.len() >= 3
                    && bytes[0].is_ascii_alphabetic()
                    && bytes[1] == b':'
                    && (bytes[2] == b'/' || bytes[2] == b'\\')
                {
                    (Some(Root::Drive(bytes[0] as char)), &path[3..])
                } else if matches!(bytes.first(), Some(b'/' | b'\\')) {
                    (Some(Root::CurrentDrive), &path[1..])
                } else {
                    (None, path)
                }
            }
        }
    }
}

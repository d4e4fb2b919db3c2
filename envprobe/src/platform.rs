//! Host platform detection.
//!
//! Every platform-dependent convention in the library (path separators, the
//! PATH delimiter, environment-variable removal rules, which executable
//! discovery strategies apply) hangs off the [`Platform`] value detected
//! once from the compilation target, rather than off scattered conditionals.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::path::PathStyle;

/// The operating-system family the process is running on.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Linux and Android.
    Linux,
    /// macOS and iOS.
    MacOS,
    /// Windows.
    Windows,
    /// FreeBSD.
    FreeBSD,
    /// DragonFly BSD.
    DragonFly,
    /// NetBSD.
    NetBSD,
    /// OpenBSD.
    OpenBSD,
    /// Solaris and illumos.
    Solaris,
    /// Haiku.
    Haiku,
    /// An unrecognized Unix-like target.
    Unknown,
}

impl Platform {
    /// Detects the platform of the running process.
    ///
    /// # Examples
    ///
    /// ```
    /// use envprobe::Platform;
    ///
    /// let platform = Platform::current();
    /// assert_eq!(platform.is_windows(), cfg!(windows));
    /// ```
    #[must_use]
    pub fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else if cfg!(any(target_os = "linux", target_os = "android")) {
            Self::Linux
        } else if cfg!(any(target_os = "macos", target_os = "ios")) {
            Self::MacOS
        } else if cfg!(target_os = "freebsd") {
            Self::FreeBSD
        } else if cfg!(target_os = "dragonfly") {
            Self::DragonFly
        } else if cfg!(target_os = "netbsd") {
            Self::NetBSD
        } else if cfg!(target_os = "openbsd") {
            Self::OpenBSD
        } else if cfg!(any(target_os = "solaris", target_os = "illumos")) {
            Self::Solaris
        } else if cfg!(target_os = "haiku") {
            Self::Haiku
        } else {
            Self::Unknown
        }
    }

    /// Returns true for Windows.
    #[must_use]
    pub fn is_windows(self) -> bool {
        matches!(self, Self::Windows)
    }

    /// Returns true for any Unix-like platform (everything except Windows).
    #[must_use]
    pub fn is_unix(self) -> bool {
        !self.is_windows()
    }

    /// Returns true for the BSD family.
    #[must_use]
    pub fn is_bsd(self) -> bool {
        matches!(
            self,
            Self::FreeBSD | Self::DragonFly | Self::NetBSD | Self::OpenBSD
        )
    }

    /// The path style (separator and root conventions) of this platform.
    #[must_use]
    pub fn path_style(self) -> PathStyle {
        if self.is_windows() {
            PathStyle::Windows
        } else {
            PathStyle::Posix
        }
    }

    /// The delimiter separating entries in this platform's PATH variable.
    ///
    /// # Examples
    ///
    /// ```
    /// use envprobe::Platform;
    ///
    /// assert_eq!(Platform::Linux.path_delimiter(), ':');
    /// assert_eq!(Platform::Windows.path_delimiter(), ';');
    /// ```
    #[must_use]
    pub fn path_delimiter(self) -> char {
        if self.is_windows() {
            ';'
        } else {
            ':'
        }
    }

    /// Whether setting an environment variable to the empty string removes it.
    ///
    /// The Windows CRT treats an empty value as a removal request; Unix
    /// platforms store the empty string as a real value.
    #[must_use]
    pub fn env_empty_removes(self) -> bool {
        self.is_windows()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Linux => "linux",
            Self::MacOS => "macos",
            Self::Windows => "windows",
            Self::FreeBSD => "freebsd",
            Self::DragonFly => "dragonfly",
            Self::NetBSD => "netbsd",
            Self::OpenBSD => "openbsd",
            Self::Solaris => "solaris",
            Self::Haiku => "haiku",
            Self::Unknown => "unknown",
        };
        write!(f, "{name}")
    }
}

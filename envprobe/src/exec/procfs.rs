//! Executable discovery through procfs self-links.

use std::fs;
use std::path::PathBuf;

use super::ExeStrategy;
use crate::error::{Error, Result};
use crate::path::real_path;

/// Reads a kernel-maintained symlink that names the running executable.
///
/// Most kernels hand back an already-resolved path; NetBSD's procfs does
/// not, so its link is marked for an extra real-path pass.
pub(super) struct SelfLink {
    link: &'static str,
    resolve: bool,
}

impl SelfLink {
    /// Linux (and Android): fully resolved by the kernel.
    pub(super) const LINUX: Self = Self {
        link: "/proc/self/exe",
        resolve: false,
    };

    /// NetBSD: the link target may itself contain symlinks.
    pub(super) const NETBSD: Self = Self {
        link: "/proc/curproc/exe",
        resolve: true,
    };

    /// Solaris and illumos.
    pub(super) const SOLARIS: Self = Self {
        link: "/proc/self/path/a.out",
        resolve: false,
    };

    /// The BSD-style spelling, used as a DragonFly fallback and in the
    /// generic chain.
    pub(super) const CURPROC_FILE: Self = Self {
        link: "/proc/curproc/file",
        resolve: false,
    };
}

impl ExeStrategy for SelfLink {
    fn name(&self) -> &'static str {
        self.link
    }

    fn resolve(&self) -> Result<PathBuf> {
        let target = fs::read_link(self.link)?;
        if target.as_os_str().is_empty() {
            return Err(Error::NotDetermined {
                what: "executable path",
            });
        }
        if self.resolve {
            real_path(&target)
        } else {
            Ok(target)
        }
    }
}

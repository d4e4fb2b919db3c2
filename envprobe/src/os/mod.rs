//! Operating-system identity: name, version, and product string.
//!
//! Three independent queries with three levels of polish:
//!
//! - [`os_name`] is the short kernel/family token (`Linux`, `Darwin`,
//!   `Windows`).
//! - [`os_version`] is a numeric-leading version string with build tags
//!   trimmed (`5.15.0`, `10.0.19045`).
//! - [`os_product_name`] is the human-facing product string
//!   (`Debian GNU/Linux 12 (bookworm)`, `macOS 14.1.1`, `Windows 10 Pro`),
//!   composed from the platform's descriptor source with `name + version`
//!   as the universal fallback.
//!
//! The queries fail independently; a missing descriptor file never breaks
//! the plain name or version.
//!
//! Product names come from user-editable descriptor files and registry
//! values. Treat them as display strings, never as input to security or
//! compatibility decisions.

use crate::error::Result;

mod release;

#[cfg(unix)]
mod unix;

#[cfg(windows)]
mod windows;

/// Returns the short OS name.
///
/// `Windows` on Windows; the `uname` sysname elsewhere (`Linux`, `Darwin`,
/// `FreeBSD`, ...).
///
/// # Errors
///
/// Returns `NotDetermined` if the OS query fails.
///
/// # Examples
///
/// ```
/// let name = envprobe::os_name().unwrap();
/// assert!(!name.is_empty());
/// ```
pub fn os_name() -> Result<String> {
    imp::os_name()
}

/// Returns the OS version string.
///
/// On Unix this is the `uname` release with any build-tag suffix trimmed
/// at the first `-` after the numeric prefix (`5.15.0-od3` reports as
/// `5.15.0`). On Windows it is read from the registry as
/// `major.minor.build`.
///
/// # Errors
///
/// Returns `NotDetermined` if the OS query fails or reports nothing.
pub fn os_version() -> Result<String> {
    imp::os_version()
}

/// Returns the human-facing OS product name.
///
/// Sources, per platform: `PRETTY_NAME` from os-release files (Linux and
/// friends), the CoreServices version plists (macOS), the first line of
/// `/etc/release` (Solaris family), the registry `ProductName` (Windows).
/// When the descriptor source yields nothing, falls back to
/// [`os_name`]` + " " + `[`os_version`], or the bare name if the version
/// is also undeterminable.
///
/// # Errors
///
/// Returns `NotDetermined` only if every source including the fallback
/// fails.
pub fn os_product_name() -> Result<String> {
    if let Some(product) = imp::product_from_descriptor() {
        return Ok(product);
    }
    let name = os_name()?;
    Ok(match os_version() {
        Ok(version) => format!("{name} {version}"),
        Err(_) => name,
    })
}

#[cfg(unix)]
mod imp {
    use std::fs;

    use super::release;
    use super::unix::uname;
    use crate::error::{Error, Result};

    pub fn os_name() -> Result<String> {
        let info = uname()?;
        if info.sysname.is_empty() {
            return Err(Error::NotDetermined { what: "OS name" });
        }
        Ok(info.sysname)
    }

    pub fn os_version() -> Result<String> {
        let info = uname()?;
        if info.release.is_empty() {
            return Err(Error::NotDetermined { what: "OS version" });
        }
        Ok(release::trim_release_suffix(&info.release).to_string())
    }

    #[cfg(any(target_os = "macos", target_os = "ios"))]
    pub fn product_from_descriptor() -> Option<String> {
        let text = fs::read_to_string("/System/Library/CoreServices/ServerVersion.plist")
            .or_else(|_| fs::read_to_string("/System/Library/CoreServices/SystemVersion.plist"))
            .ok()?;
        let name = release::plist_string_value(&text, "ProductName")?;
        Some(match release::plist_string_value(&text, "ProductVersion") {
            Some(version) => format!("{name} {version}"),
            None => name,
        })
    }

    #[cfg(any(target_os = "solaris", target_os = "illumos"))]
    pub fn product_from_descriptor() -> Option<String> {
        let text = fs::read_to_string("/etc/release").ok()?;
        release::product_from_release_file(&text)
    }

    #[cfg(not(any(
        target_os = "macos",
        target_os = "ios",
        target_os = "solaris",
        target_os = "illumos"
    )))]
    pub fn product_from_descriptor() -> Option<String> {
        let text = fs::read_to_string("/etc/os-release")
            .or_else(|_| fs::read_to_string("/usr/lib/os-release"))
            .ok()?;
        release::pretty_name_from_os_release(&text)
    }
}

#[cfg(windows)]
mod imp {
    use super::windows;
    use crate::error::{Error, Result};

    pub fn os_name() -> Result<String> {
        Ok("Windows".to_string())
    }

    pub fn os_version() -> Result<String> {
        windows::version().ok_or(Error::NotDetermined { what: "OS version" })
    }

    pub fn product_from_descriptor() -> Option<String> {
        windows::product_name()
    }
}

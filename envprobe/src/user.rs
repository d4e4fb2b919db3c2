//! Home directory and username lookup.
//!
//! On Unix the password database is authoritative and environment variables
//! (`HOME`, `USER`, `LOGNAME`) are fallbacks; on Windows the environment
//! (`USERPROFILE`, `HOMEDRIVE`/`HOMEPATH`) and `GetUserNameW` are consulted.
//! Either lookup fails outright rather than inventing a value.

use std::path::PathBuf;

use crate::error::Result;

/// Returns the current user's home directory.
///
/// Unix: the password-database entry for the process uid, then `$HOME`.
/// Windows: `%USERPROFILE%`, then `%HOMEDRIVE%%HOMEPATH%`.
///
/// # Errors
///
/// Returns `NotDetermined` if no source yields a non-empty directory.
///
/// # Examples
///
/// ```no_run
/// let home = envprobe::home_dir().unwrap();
/// assert!(home.is_absolute());
/// ```
pub fn home_dir() -> Result<PathBuf> {
    imp::home_dir()
}

/// Returns the current user's login name.
///
/// Unix: the password-database entry for the process uid, then `$USER`,
/// then `$LOGNAME`. Windows: `GetUserNameW`, then `%USERNAME%`.
///
/// # Errors
///
/// Returns `NotDetermined` if no source yields a non-empty name.
pub fn username() -> Result<String> {
    imp::username()
}

#[cfg(unix)]
mod imp {
    use std::ffi::CStr;
    use std::mem;
    use std::path::PathBuf;

    use crate::env::vars::get_env;
    use crate::error::{Error, Result};

    struct PasswdEntry {
        name: Option<String>,
        dir: Option<String>,
    }

    // Copies a NUL-terminated passwd field. The pointer must come from a
    // getpwuid_r call whose buffer is still alive.
    unsafe fn field_string(field: *const libc::c_char) -> Option<String> {
        if field.is_null() {
            return None;
        }
        let text = CStr::from_ptr(field).to_str().ok()?;
        (!text.is_empty()).then(|| text.to_string())
    }

    /// Looks up the password-database entry for the process uid.
    ///
    /// The buffer starts at the size `sysconf` suggests and doubles on
    /// `ERANGE`, bounded so a misbehaving NSS backend cannot spin us.
    fn passwd_entry() -> Option<PasswdEntry> {
        let mut capacity = match unsafe { libc::sysconf(libc::_SC_GETPW_R_SIZE_MAX) } {
            n if n > 0 => n as usize,
            _ => 1024,
        };
        let uid = unsafe { libc::getuid() };

        for _ in 0..5 {
            let mut buf = vec![0u8; capacity];
            let mut pwd: libc::passwd = unsafe { mem::zeroed() };
            let mut result: *mut libc::passwd = std::ptr::null_mut();

            // SAFETY: pwd, buf, and result are valid for the duration of
            // the call, and buf is not freed until the fields are copied.
            let rc = unsafe {
                libc::getpwuid_r(
                    uid,
                    &mut pwd,
                    buf.as_mut_ptr().cast::<libc::c_char>(),
                    buf.len(),
                    &mut result,
                )
            };
            if rc == libc::ERANGE {
                capacity *= 2;
                continue;
            }
            if rc != 0 || result.is_null() {
                return None;
            }
            // SAFETY: the fields point into buf, which is still alive.
            return Some(unsafe {
                PasswdEntry {
                    name: field_string(pwd.pw_name),
                    dir: field_string(pwd.pw_dir),
                }
            });
        }
        None
    }

    pub fn home_dir() -> Result<PathBuf> {
        passwd_entry()
            .and_then(|entry| entry.dir)
            .or_else(|| get_env("HOME").filter(|value| !value.is_empty()))
            .map(PathBuf::from)
            .ok_or(Error::NotDetermined {
                what: "home directory",
            })
    }

    pub fn username() -> Result<String> {
        passwd_entry()
            .and_then(|entry| entry.name)
            .or_else(|| get_env("USER").filter(|value| !value.is_empty()))
            .or_else(|| get_env("LOGNAME").filter(|value| !value.is_empty()))
            .ok_or(Error::NotDetermined { what: "username" })
    }
}

#[cfg(windows)]
mod imp {
    use std::path::PathBuf;

    use windows_sys::Win32::System::WindowsProgramming::GetUserNameW;

    use crate::env::vars::get_env;
    use crate::error::{Error, Result};

    // UNLEN from lmcons.h
    const MAX_USERNAME: usize = 256;

    pub fn home_dir() -> Result<PathBuf> {
        if let Some(profile) = get_env("USERPROFILE").filter(|value| !value.is_empty()) {
            return Ok(PathBuf::from(profile));
        }

        let drive = get_env("HOMEDRIVE").unwrap_or_default();
        if drive.is_empty() {
            return Err(Error::NotDetermined {
                what: "home directory",
            });
        }
        let path = get_env("HOMEPATH").filter(|value| !value.is_empty());
        Ok(PathBuf::from(match path {
            Some(path) => format!("{drive}{path}"),
            None => format!("{drive}\\"),
        }))
    }

    pub fn username() -> Result<String> {
        let mut buf = [0u16; MAX_USERNAME + 1];
        let mut size = buf.len() as u32;
        // SAFETY: buf is writable for `size` UTF-16 units.
        let ok = unsafe { GetUserNameW(buf.as_mut_ptr(), &mut size) };
        if ok != 0 && size > 1 {
            // size counts the trailing NUL
            return Ok(String::from_utf16_lossy(&buf[..size as usize - 1]));
        }

        get_env("USERNAME")
            .filter(|value| !value.is_empty())
            .ok_or(Error::NotDetermined { what: "username" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_dir_is_absolute() {
        let home = home_dir().unwrap();
        assert!(home.is_absolute());
        assert!(!home.as_os_str().is_empty());
    }

    #[test]
    fn test_username_not_empty() {
        let name = username().unwrap();
        assert!(!name.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_home_dir_exists() {
        // The password database names a real directory on any sane system.
        let home = home_dir().unwrap();
        assert!(home.is_dir());
    }
}

//! `uname` access for Unix-family platforms.

use std::ffi::CStr;
use std::mem;

use crate::error::{Error, Result};

/// The fields of `utsname` this library cares about.
pub(crate) struct Uname {
    /// Kernel name, e.g. `Linux` or `Darwin`.
    pub sysname: String,
    /// Kernel release, e.g. `6.1.0-13-amd64`.
    pub release: String,
}

/// Calls `uname(2)` and copies out the name fields.
///
/// # Errors
///
/// Returns `NotDetermined` if the call fails. Only a negative return is a
/// failure; Solaris returns a positive value on success.
pub(crate) fn uname() -> Result<Uname> {
    let mut buf: libc::utsname = unsafe { mem::zeroed() };
    // SAFETY: buf is a valid utsname out-parameter.
    if unsafe { libc::uname(&mut buf) } < 0 {
        return Err(Error::NotDetermined { what: "OS name" });
    }
    Ok(Uname {
        sysname: field_string(&buf.sysname),
        release: field_string(&buf.release),
    })
}

fn field_string(field: &[libc::c_char]) -> String {
    // SAFETY: utsname fields are NUL-terminated within their arrays.
    unsafe { CStr::from_ptr(field.as_ptr()) }
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uname_reports_kernel() {
        let info = uname().unwrap();
        assert!(!info.sysname.is_empty());
        assert!(!info.release.is_empty());

        #[cfg(target_os = "linux")]
        assert_eq!(info.sysname, "Linux");
        #[cfg(target_os = "macos")]
        assert_eq!(info.sysname, "Darwin");
    }
}

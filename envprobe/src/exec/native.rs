//! Native OS queries for the executable path.
//!
//! One strategy per platform API, each with a bounded buffer-growth loop:
//! past the cap the strategy fails instead of spinning.

#[cfg(any(target_os = "macos", target_os = "ios"))]
pub(super) use apple::DyldPath;

#[cfg(any(target_os = "freebsd", target_os = "dragonfly"))]
pub(super) use bsd::SysctlPathname;

#[cfg(windows)]
pub(super) use windows::ModuleFileName;

#[cfg(target_os = "haiku")]
pub(super) use haiku::AppImage;

#[cfg(any(target_os = "macos", target_os = "ios"))]
mod apple {
    use std::ffi::{CStr, OsStr};
    use std::os::unix::ffi::OsStrExt;
    use std::path::PathBuf;

    use crate::error::{Error, Result};
    use crate::exec::ExeStrategy;
    use crate::path::real_path;

    extern "C" {
        fn _NSGetExecutablePath(buf: *mut libc::c_char, bufsize: *mut u32) -> libc::c_int;
    }

    /// `_NSGetExecutablePath`, retried once at the size the first call
    /// reports. The path dyld hands back may contain symlinks and dot
    /// segments, so it is real-pathed before use.
    pub(crate) struct DyldPath;

    impl ExeStrategy for DyldPath {
        fn name(&self) -> &'static str {
            "_NSGetExecutablePath"
        }

        fn resolve(&self) -> Result<PathBuf> {
            let mut capacity: u32 = 1024;
            for _ in 0..2 {
                let mut buf = vec![0u8; capacity as usize];
                let mut size = capacity;
                // SAFETY: buf is writable for `size` bytes.
                let rc = unsafe { _NSGetExecutablePath(buf.as_mut_ptr().cast(), &mut size) };
                if rc != 0 {
                    // size now holds the required capacity
                    capacity = size;
                    continue;
                }
                // SAFETY: on success the buffer holds a NUL-terminated path.
                let text = unsafe { CStr::from_ptr(buf.as_ptr().cast()) };
                if text.to_bytes().is_empty() {
                    break;
                }
                return real_path(PathBuf::from(OsStr::from_bytes(text.to_bytes())));
            }
            Err(Error::NotDetermined {
                what: "executable path",
            })
        }
    }
}

#[cfg(any(target_os = "freebsd", target_os = "dragonfly"))]
mod bsd {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;
    use std::path::PathBuf;

    use crate::error::{Error, Result};
    use crate::exec::ExeStrategy;

    /// `sysctl(KERN_PROC_PATHNAME, -1)` with a doubling buffer.
    pub(crate) struct SysctlPathname;

    const MAX_CAPACITY: usize = 64 * 1024;

    impl ExeStrategy for SysctlPathname {
        fn name(&self) -> &'static str {
            "kern.proc.pathname"
        }

        fn resolve(&self) -> Result<PathBuf> {
            let mib = [
                libc::CTL_KERN,
                libc::KERN_PROC,
                libc::KERN_PROC_PATHNAME,
                -1,
            ];
            let mut capacity = 1024usize;
            while capacity <= MAX_CAPACITY {
                let mut buf = vec![0u8; capacity];
                let mut len = buf.len();
                // SAFETY: buf is writable for `len` bytes and mib has 4 entries.
                let rc = unsafe {
                    libc::sysctl(
                        mib.as_ptr(),
                        4,
                        buf.as_mut_ptr().cast(),
                        &mut len,
                        std::ptr::null(),
                        0,
                    )
                };
                if rc == 0 {
                    // len counts the trailing NUL
                    if len <= 1 {
                        break;
                    }
                    buf.truncate(len - 1);
                    return Ok(PathBuf::from(OsString::from_vec(buf)));
                }
                let errno = std::io::Error::last_os_error();
                if errno.raw_os_error() == Some(libc::ENOMEM) {
                    capacity *= 2;
                    continue;
                }
                return Err(errno.into());
            }
            Err(Error::NotDetermined {
                what: "executable path",
            })
        }
    }
}

#[cfg(windows)]
mod windows {
    use std::ffi::OsString;
    use std::os::windows::ffi::OsStringExt;
    use std::path::PathBuf;

    use windows_sys::Win32::System::LibraryLoader::GetModuleFileNameW;

    use crate::error::{Error, Result};
    use crate::exec::ExeStrategy;

    /// `GetModuleFileNameW(null)` with a doubling UTF-16 buffer.
    ///
    /// The API reports truncation by filling the buffer exactly, so a
    /// result shorter than the buffer is the only accepted success.
    pub(crate) struct ModuleFileName;

    // The extended-path maximum in UTF-16 units
    const MAX_CAPACITY: usize = 32_768;

    impl ExeStrategy for ModuleFileName {
        fn name(&self) -> &'static str {
            "GetModuleFileNameW"
        }

        fn resolve(&self) -> Result<PathBuf> {
            let mut capacity = 260usize;
            while capacity <= MAX_CAPACITY {
                let mut buf = vec![0u16; capacity];
                // SAFETY: buf is writable for its length in UTF-16 units.
                let len = unsafe {
                    GetModuleFileNameW(std::ptr::null_mut(), buf.as_mut_ptr(), buf.len() as u32)
                } as usize;
                if len == 0 {
                    return Err(std::io::Error::last_os_error().into());
                }
                if len < buf.len() {
                    return Ok(PathBuf::from(OsString::from_wide(&buf[..len])));
                }
                capacity *= 2;
            }
            Err(Error::NotDetermined {
                what: "executable path",
            })
        }
    }
}

#[cfg(target_os = "haiku")]
mod haiku {
    use std::ffi::{CStr, OsStr};
    use std::mem;
    use std::os::unix::ffi::OsStrExt;
    use std::path::PathBuf;

    use crate::error::{Error, Result};
    use crate::exec::ExeStrategy;

    const B_OK: i32 = 0;
    const B_CURRENT_TEAM: i32 = 0;
    const B_APP_IMAGE: i32 = 1;

    // From kernel/image.h
    #[repr(C)]
    struct ImageInfo {
        id: i32,
        image_type: i32,
        sequence: i32,
        init_order: i32,
        init_routine: *mut libc::c_void,
        term_routine: *mut libc::c_void,
        device: i32,
        node: i64,
        name: [libc::c_char; 1024],
        text: *mut libc::c_void,
        data: *mut libc::c_void,
        text_size: i32,
        data_size: i32,
        api_version: i32,
        abi: i32,
    }

    extern "C" {
        fn get_next_image_info(team: i32, cookie: *mut i32, info: *mut ImageInfo) -> i32;
    }

    /// Walks the loaded-image list for the app image.
    pub(crate) struct AppImage;

    impl ExeStrategy for AppImage {
        fn name(&self) -> &'static str {
            "get_next_image_info"
        }

        fn resolve(&self) -> Result<PathBuf> {
            let mut cookie: i32 = 0;
            loop {
                let mut info: ImageInfo = unsafe { mem::zeroed() };
                // SAFETY: cookie and info are valid out-parameters.
                if unsafe { get_next_image_info(B_CURRENT_TEAM, &mut cookie, &mut info) } != B_OK {
                    break;
                }
                if info.image_type != B_APP_IMAGE {
                    continue;
                }
                // SAFETY: the kernel NUL-terminates the image name.
                let text = unsafe { CStr::from_ptr(info.name.as_ptr()) };
                if text.to_bytes().is_empty() {
                    break;
                }
                return Ok(PathBuf::from(OsStr::from_bytes(text.to_bytes())));
            }
            Err(Error::NotDetermined {
                what: "executable path",
            })
        }
    }
}

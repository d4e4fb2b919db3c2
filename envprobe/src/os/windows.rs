//! Registry-backed OS identity for Windows.
//!
//! Version and product data live under
//! `HKLM\SOFTWARE\Microsoft\Windows NT\CurrentVersion`. `RegGetValueW`
//! reads them without an explicit open/close pair.

use std::mem;

use windows_sys::Win32::Foundation::ERROR_SUCCESS;
use windows_sys::Win32::System::Registry::{
    RegGetValueW, HKEY_LOCAL_MACHINE, RRF_RT_REG_DWORD, RRF_RT_REG_SZ,
};

const CURRENT_VERSION_KEY: &str = r"SOFTWARE\Microsoft\Windows NT\CurrentVersion";

fn wide(text: &str) -> Vec<u16> {
    text.encode_utf16().chain(std::iter::once(0)).collect()
}

fn read_string(value: &str) -> Option<String> {
    let subkey = wide(CURRENT_VERSION_KEY);
    let name = wide(value);

    let mut byte_len: u32 = 0;
    // SAFETY: a null data pointer asks for the required size in bytes.
    let rc = unsafe {
        RegGetValueW(
            HKEY_LOCAL_MACHINE,
            subkey.as_ptr(),
            name.as_ptr(),
            RRF_RT_REG_SZ,
            std::ptr::null_mut(),
            std::ptr::null_mut(),
            &mut byte_len,
        )
    };
    if rc != ERROR_SUCCESS || byte_len == 0 {
        return None;
    }

    let mut buf = vec![0u16; byte_len as usize / 2 + 1];
    let mut written = (buf.len() * 2) as u32;
    // SAFETY: buf is writable for `written` bytes.
    let rc = unsafe {
        RegGetValueW(
            HKEY_LOCAL_MACHINE,
            subkey.as_ptr(),
            name.as_ptr(),
            RRF_RT_REG_SZ,
            std::ptr::null_mut(),
            buf.as_mut_ptr().cast(),
            &mut written,
        )
    };
    if rc != ERROR_SUCCESS {
        return None;
    }

    // written counts bytes including the trailing NUL
    let len = (written as usize / 2).saturating_sub(1);
    let text = String::from_utf16_lossy(&buf[..len]);
    (!text.is_empty()).then_some(text)
}

fn read_dword(value: &str) -> Option<u32> {
    let subkey = wide(CURRENT_VERSION_KEY);
    let name = wide(value);

    let mut data: u32 = 0;
    let mut size = mem::size_of::<u32>() as u32;
    // SAFETY: data is a valid DWORD out-parameter of `size` bytes.
    let rc = unsafe {
        RegGetValueW(
            HKEY_LOCAL_MACHINE,
            subkey.as_ptr(),
            name.as_ptr(),
            RRF_RT_REG_DWORD,
            std::ptr::null_mut(),
            (&mut data as *mut u32).cast(),
            &mut size,
        )
    };
    (rc == ERROR_SUCCESS).then_some(data)
}

/// The OS version from the registry.
///
/// Windows 10 and later carry explicit major/minor DWORDs; older systems
/// only have the composite `CurrentVersion` string.
pub(crate) fn version() -> Option<String> {
    let build = read_string("CurrentBuildNumber");

    if let Some(major) = read_dword("CurrentMajorVersionNumber") {
        let minor = read_dword("CurrentMinorVersionNumber").unwrap_or(0);
        return Some(match build {
            Some(build) => format!("{major}.{minor}.{build}"),
            None => format!("{major}.{minor}"),
        });
    }

    let legacy = read_string("CurrentVersion")?;
    Some(match build {
        Some(build) => format!("{legacy}.{build}"),
        None => legacy,
    })
}

/// The marketing product name from the registry, e.g. `Windows 10 Pro`.
pub(crate) fn product_name() -> Option<String> {
    read_string("ProductName")
}

//! Executable discovery from the process's own argv[0].
//!
//! The weakest mechanism in the set, used where the kernel offers nothing
//! better (OpenBSD, unrecognized Unixes). argv[0] is whatever the parent
//! process passed to exec, so every candidate is existence-checked and
//! real-pathed before being believed; no confirmed candidate means an
//! absent result, never a guess.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use super::ExeStrategy;
use crate::env::paths::find_in_path;
use crate::error::{Error, Result};
use crate::path::real_path;

pub(super) struct Argv0;

impl ExeStrategy for Argv0 {
    fn name(&self) -> &'static str {
        "argv[0]"
    }

    fn resolve(&self) -> Result<PathBuf> {
        let argv0 = std::env::args_os().next().ok_or(Error::NotDetermined {
            what: "executable path",
        })?;
        resolve_argv0(&argv0)
    }
}

/// Turns an argv[0] value into a confirmed executable path.
///
/// An absolute or explicitly relative value (`/`- or `.`-leading) is
/// real-pathed directly; a bare name goes through the PATH search. Either
/// way the result names an existing file or the whole derivation fails.
fn resolve_argv0(argv0: &OsStr) -> Result<PathBuf> {
    use std::os::unix::ffi::OsStrExt;

    let bytes = argv0.as_bytes();
    match bytes.first() {
        None => Err(Error::NotDetermined {
            what: "executable path",
        }),
        Some(b'/') | Some(b'.') => real_path(Path::new(argv0)),
        Some(_) => {
            let name = argv0.to_str().ok_or(Error::NotDetermined {
                what: "executable path",
            })?;
            let found = find_in_path(name).ok_or(Error::NotDetermined {
                what: "executable path",
            })?;
            real_path(found)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_absolute_argv0_is_real_pathed() {
        let dir = tempfile::tempdir().unwrap();
        let exe = dir.path().join("tool");
        std::fs::write(&exe, b"#!/bin/sh\n").unwrap();

        let resolved = resolve_argv0(exe.as_os_str()).unwrap();
        assert_eq!(resolved, std::fs::canonicalize(&exe).unwrap());
    }

    #[test]
    fn test_absolute_argv0_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone");
        assert!(resolve_argv0(missing.as_os_str()).is_err());
    }

    #[test]
    #[serial]
    fn test_bare_argv0_searches_path_list() {
        let saved = std::env::var("PATH").ok();

        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bare-tool"), b"#!/bin/sh\n").unwrap();
        std::env::set_var("PATH", dir.path());

        let resolved = resolve_argv0(OsStr::new("bare-tool")).unwrap();
        assert_eq!(
            resolved,
            std::fs::canonicalize(dir.path().join("bare-tool")).unwrap()
        );
        assert!(resolve_argv0(OsStr::new("bare-missing")).is_err());

        match saved {
            Some(val) => std::env::set_var("PATH", val),
            None => std::env::remove_var("PATH"),
        }
    }

    #[test]
    fn test_empty_argv0_fails() {
        assert!(resolve_argv0(OsStr::new("")).is_err());
    }
}

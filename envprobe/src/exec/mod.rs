//! Discovery of the running executable's path.
//!
//! Every OS has its own way to answer "what binary am I": a procfs link, a
//! sysctl, a loader API, or nothing better than argv[0]. Each mechanism is
//! an [`ExeStrategy`]; the platform value selects an ordered chain of them
//! once per process, and [`executable_path`] walks that chain until one
//! succeeds. No strategy ever returns a guess: a candidate that cannot be
//! confirmed makes the strategy fail and the walk move on.

use std::path::PathBuf;
use std::sync::OnceLock;

use crate::error::{Error, Result};
use crate::path::parent_dir;
use crate::platform::Platform;

#[cfg(unix)]
mod argv;
mod native;
#[cfg(unix)]
mod procfs;

/// A single mechanism for locating the running executable.
trait ExeStrategy: Send + Sync {
    /// Short mechanism name for debug traces.
    fn name(&self) -> &'static str;

    /// Attempts to produce the executable path.
    fn resolve(&self) -> Result<PathBuf>;
}

type Chain = Vec<Box<dyn ExeStrategy>>;

fn chain() -> &'static Chain {
    static CHAIN: OnceLock<Chain> = OnceLock::new();
    CHAIN.get_or_init(|| build_chain(Platform::current()))
}

/// Assembles the strategy chain for a platform.
///
/// Arms only exist on targets where their mechanisms compile; at runtime
/// the detected platform always hits its own arm.
fn build_chain(platform: Platform) -> Chain {
    match platform {
        #[cfg(windows)]
        Platform::Windows => vec![Box::new(native::ModuleFileName)],

        #[cfg(any(target_os = "macos", target_os = "ios"))]
        Platform::MacOS => vec![Box::new(native::DyldPath)],

        #[cfg(any(target_os = "freebsd", target_os = "dragonfly"))]
        Platform::FreeBSD => vec![Box::new(native::SysctlPathname)],

        #[cfg(any(target_os = "freebsd", target_os = "dragonfly"))]
        Platform::DragonFly => vec![
            Box::new(native::SysctlPathname),
            Box::new(procfs::SelfLink::CURPROC_FILE),
        ],

        #[cfg(target_os = "haiku")]
        Platform::Haiku => vec![Box::new(native::AppImage)],

        #[cfg(unix)]
        Platform::Linux => vec![Box::new(procfs::SelfLink::LINUX)],

        #[cfg(unix)]
        Platform::NetBSD => vec![Box::new(procfs::SelfLink::NETBSD)],

        #[cfg(unix)]
        Platform::Solaris => vec![Box::new(procfs::SelfLink::SOLARIS)],

        #[cfg(unix)]
        Platform::OpenBSD => vec![Box::new(argv::Argv0)],

        // Unrecognized Unix: try every known self-link, then argv[0].
        #[cfg(unix)]
        _ => vec![
            Box::new(procfs::SelfLink::CURPROC_FILE),
            Box::new(procfs::SelfLink::LINUX),
            Box::new(procfs::SelfLink::NETBSD),
            Box::new(procfs::SelfLink::SOLARIS),
            Box::new(argv::Argv0),
        ],

        #[cfg(windows)]
        _ => vec![Box::new(native::ModuleFileName)],
    }
}

/// Returns the absolute path of the running executable.
///
/// The platform's strategies are tried in order and the first confirmed
/// answer wins. Each attempt is traced at debug level.
///
/// # Errors
///
/// Returns the last strategy's error if none succeeds; the result is never
/// a partial or guessed path.
///
/// # Examples
///
/// ```
/// let exe = envprobe::executable_path().unwrap();
/// assert!(exe.is_absolute());
/// ```
pub fn executable_path() -> Result<PathBuf> {
    let mut last_error = Error::NotDetermined {
        what: "executable path",
    };
    for strategy in chain() {
        match strategy.resolve() {
            Ok(path) => {
                log::debug!("executable path via {}: {}", strategy.name(), path.display());
                return Ok(path);
            }
            Err(error) => {
                log::debug!("{} failed: {error}", strategy.name());
                last_error = error;
            }
        }
    }
    Err(last_error)
}

/// Returns the directory containing the running executable.
///
/// The lexical parent of [`executable_path`]; no extra filesystem work.
///
/// # Errors
///
/// Fails when the executable path itself cannot be determined.
pub fn executable_dir() -> Result<PathBuf> {
    let exe = executable_path()?;
    parent_dir(&exe)
}

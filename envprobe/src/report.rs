//! A one-shot snapshot of everything the library can determine.

use std::path::PathBuf;

use serde::Serialize;

use crate::env::cwd::cwd;
use crate::env::paths::env_paths;
use crate::exec::{executable_dir, executable_path};
use crate::os::{os_name, os_product_name, os_version};
use crate::platform::Platform;
use crate::user::{home_dir, username};
use crate::version::version;

/// A snapshot of every query the library offers.
///
/// Each field holds the answer or `None` where the query came back absent;
/// collecting never fails as a whole. Serializes with `null` for absent
/// fields, so the JSON shape is stable across platforms.
///
/// # Examples
///
/// ```
/// use envprobe::EnvReport;
///
/// let report = EnvReport::collect();
/// assert_eq!(report.version, envprobe::version());
/// assert!(report.cwd.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvReport {
    /// Library version.
    pub version: &'static str,
    /// Detected platform family.
    pub platform: Platform,
    /// Absolute path of the running executable.
    pub executable_path: Option<PathBuf>,
    /// Directory containing the running executable.
    pub executable_dir: Option<PathBuf>,
    /// Current working directory.
    pub cwd: Option<PathBuf>,
    /// Current user's home directory.
    pub home_dir: Option<PathBuf>,
    /// Current user's login name.
    pub username: Option<String>,
    /// Short OS name.
    pub os_name: Option<String>,
    /// OS version string.
    pub os_version: Option<String>,
    /// Human-facing OS product name.
    pub os_product_name: Option<String>,
    /// Parsed `PATH` entries; `None` when the variable is unset.
    pub env_paths: Option<Vec<PathBuf>>,
}

impl EnvReport {
    /// Runs every query and records the answers.
    ///
    /// Failing queries record as `None`; the reasons are only visible when
    /// calling the individual functions.
    #[must_use]
    pub fn collect() -> Self {
        Self {
            version: version(),
            platform: Platform::current(),
            executable_path: executable_path().ok(),
            executable_dir: executable_dir().ok(),
            cwd: cwd().ok(),
            home_dir: home_dir().ok(),
            username: username().ok(),
            os_name: os_name().ok(),
            os_version: os_version().ok(),
            os_product_name: os_product_name().ok(),
            env_paths: env_paths(),
        }
    }
}

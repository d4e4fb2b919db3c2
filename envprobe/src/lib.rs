#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # envprobe
//!
//! A library for introspecting the process environment: the running
//! executable's location, working directory, user identity, OS identity,
//! environment variables, and the PATH search list, with uniform behavior
//! across Windows, Linux, macOS, the BSDs, Solaris, and Haiku.
//!
//! ## Core Operations
//!
//! - [`executable_path`] and [`executable_dir`]: where the running binary
//!   lives, via the best mechanism each OS offers
//! - [`full_path`]: lexical path resolution (`.`/`..` folding) without
//!   touching the filesystem; [`real_path`]: the filesystem-backed
//!   counterpart
//! - [`env_paths`], [`split_path_list`], [`find_in_path`]: the PATH codec
//! - [`get_env`], [`set_env`], [`cwd`], [`set_cwd`]: live process state
//! - [`home_dir`], [`username`], [`os_name`], [`os_version`],
//!   [`os_product_name`]: identity queries
//! - [`EnvReport`]: all of the above in one serializable snapshot
//!
//! Every query either answers or says why it cannot; nothing returns a
//! guessed or placeholder value.
//!
//! ## Examples
//!
//! ```
//! # #[cfg(unix)] {
//! use std::path::PathBuf;
//!
//! // Lexical resolution: no filesystem involved
//! let resolved = envprobe::full_path("/usr/local/../bin/tool").unwrap();
//! assert_eq!(resolved, PathBuf::from("/usr/bin/tool"));
//! # }
//!
//! // The executable path is determined, not guessed
//! let exe = envprobe::executable_path().unwrap();
//! assert!(exe.is_absolute());
//! ```

pub mod env;
pub mod error;
pub mod exec;
pub mod logging;
pub mod os;
pub mod path;
pub mod platform;
pub mod report;
pub mod user;
pub mod version;

// Re-export key operations at crate root for convenience
pub use env::{
    cwd, env_paths, find_in_path, find_in_path_dirs, get_env, join_env_paths, join_path_list,
    parse_env_paths, set_cwd, set_env, split_path_list,
};
pub use error::{Error, Result};
pub use exec::{executable_dir, executable_path};
pub use logging::{init_logger, LogLevel, Logger};
pub use os::{os_name, os_product_name, os_version};
pub use path::{
    file_exists, full_path, full_path_in, parent_dir, parent_dir_with, path_exists, real_path,
    resolve_with, PathStyle,
};
pub use platform::Platform;
pub use report::EnvReport;
pub use user::{home_dir, username};
pub use version::{version, version_as_int};

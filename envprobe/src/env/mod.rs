//! Process environment access: variables, the working directory, and the
//! PATH list.
//!
//! # Key Concepts
//!
//! ## Live state
//!
//! Nothing in this module caches: [`get_env`], [`set_env`], [`cwd`], and
//! [`set_cwd`] talk to the process state on every call, so changes made by
//! other code in the process are always observed.
//!
//! ## Absence vs emptiness
//!
//! An unset variable and a variable set to the empty string are different
//! states and stay different here: [`get_env`] returns `None` for the
//! former and `Some("")` for the latter, and [`env_paths`] returns `None`
//! for an unset `PATH` but `Some(vec![])` for an empty one.
//!
//! ## The PATH codec
//!
//! [`split_path_list`] and [`join_path_list`] convert between a delimited
//! string and a list of entries, dropping zero-length segments on the way
//! in. [`find_in_path`] walks the parsed list looking for a regular file.
//!
//! # Examples
//!
//! ```
//! use std::path::PathBuf;
//!
//! let entries = envprobe::split_path_list("/usr/bin:/bin", ':');
//! assert_eq!(entries, vec![PathBuf::from("/usr/bin"), PathBuf::from("/bin")]);
//! ```

pub mod cwd;
pub mod paths;
pub mod vars;

// Re-export key operations
pub use cwd::{cwd, set_cwd};
pub use paths::{
    env_paths, find_in_path, find_in_path_dirs, join_env_paths, join_path_list, parse_env_paths,
    split_path_list,
};
pub use vars::{get_env, set_env};

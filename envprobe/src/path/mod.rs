//! Path handling: lexical resolution, parent extraction, and real paths.
//!
//! # Key Concepts
//!
//! ## Lexical resolution
//!
//! [`full_path`] converts a path to canonical absolute form by string
//! scanning alone: `.` and `..` segments are folded away, relative inputs
//! are anchored at the working directory, and the output never carries a
//! trailing separator (a bare root excepted). The filesystem is not
//! consulted, so the result may name something that does not exist.
//!
//! The engine is parameterized by [`PathStyle`], which captures how a
//! platform family spells separators and roots; [`resolve_with`] exposes
//! it directly so both flavors can be exercised on any host.
//!
//! ## Real paths
//!
//! [`real_path`] is the filesystem-backed counterpart: the path must
//! exist, symlinks are followed, and the OS decides the canonical answer.
//! [`file_exists`] and [`path_exists`] are the matching predicates.
//!
//! ## Parent extraction
//!
//! [`parent_dir`] chops a path at its last separator without resolving
//! anything: `/usr/lib` → `/usr`, `usr` → `.`, a root stays itself.
//!
//! # Examples
//!
//! ```
//! # #[cfg(unix)] {
//! use std::path::PathBuf;
//!
//! let full = envprobe::full_path("/usr/./lib/..").unwrap();
//! assert_eq!(full, PathBuf::from("/usr"));
//!
//! let parent = envprobe::parent_dir(&full).unwrap();
//! assert_eq!(parent, PathBuf::from("/"));
//! # }
//! ```

pub mod directory;
pub mod normalize;
pub mod real;
mod style;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key operations
pub use directory::{parent_dir, parent_dir_with};
pub use normalize::{full_path, full_path_in, resolve_with};
pub use real::{file_exists, path_exists, real_path};
pub use style::PathStyle;

//! Reading and writing process environment variables.
//!
//! These helpers always hit the live process table; nothing is cached or
//! mirrored, so a value set here is immediately visible to every other
//! reader in the process (and vice versa).
//!
//! The std setters panic on malformed names and values, so [`set_env`]
//! validates its inputs first and reports violations as ordinary errors.

use std::env;

use crate::error::{Error, Result};
use crate::platform::Platform;

// Names the std accessors are documented to panic on.
fn name_violation(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        Some("must be non-empty")
    } else if name.contains('=') {
        Some("must not contain '='")
    } else if name.contains('\0') {
        Some("must not contain NUL")
    } else {
        None
    }
}

/// Reads an environment variable.
///
/// Returns `None` when the variable is unset, when `name` is not a name the
/// process table can hold (empty, or containing `=` or NUL), or when the
/// value is not valid UTF-8. A set-but-empty variable yields
/// `Some(String::new())`.
///
/// # Examples
///
/// ```
/// assert_eq!(envprobe::get_env(""), None);
/// assert_eq!(envprobe::get_env("ENVPROBE_NO_SUCH_VAR"), None);
/// ```
#[must_use]
pub fn get_env(name: &str) -> Option<String> {
    if name_violation(name).is_some() {
        return None;
    }
    env::var(name).ok()
}

/// Writes or removes an environment variable.
///
/// `Some(value)` stores the value; `None` removes the variable. On the
/// Windows family an empty string value is also treated as removal, matching
/// the C runtime convention there; elsewhere the empty string is stored as a
/// real value.
///
/// # Errors
///
/// Returns `InvalidArgument` when `name` is empty or contains `=` or NUL,
/// or when `value` contains NUL. The process table is not touched in any
/// error case.
///
/// # Examples
///
/// ```
/// envprobe::set_env("ENVPROBE_DOCTEST_VAR", Some("1")).unwrap();
/// assert_eq!(envprobe::get_env("ENVPROBE_DOCTEST_VAR").as_deref(), Some("1"));
///
/// envprobe::set_env("ENVPROBE_DOCTEST_VAR", None).unwrap();
/// assert_eq!(envprobe::get_env("ENVPROBE_DOCTEST_VAR"), None);
/// ```
pub fn set_env(name: &str, value: Option<&str>) -> Result<()> {
    if let Some(reason) = name_violation(name) {
        return Err(Error::InvalidArgument {
            what: "variable name",
            reason: reason.to_string(),
        });
    }
    if let Some(value) = value {
        if value.contains('\0') {
            return Err(Error::InvalidArgument {
                what: "variable value",
                reason: "must not contain NUL".to_string(),
            });
        }
    }

    match value {
        None => env::remove_var(name),
        Some("") if Platform::current().env_empty_removes() => env::remove_var(name),
        Some(value) => env::set_var(name, value),
    }
    Ok(())
}

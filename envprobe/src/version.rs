//! Crate version constants.
//!
//! The version is exposed both as the usual string and as a single integer
//! (`major * 10000 + minor * 100 + patch`) for callers that want a cheap
//! numeric comparison across releases.

/// Parses a decimal version component at compile time.
const fn parse_component(s: &str) -> u32 {
    let bytes = s.as_bytes();
    let mut value = 0u32;
    let mut i = 0;
    while i < bytes.len() {
        assert!(bytes[i].is_ascii_digit(), "version component must be numeric");
        value = value * 10 + (bytes[i] - b'0') as u32;
        i += 1;
    }
    value
}

const MAJOR: u32 = parse_component(env!("CARGO_PKG_VERSION_MAJOR"));
const MINOR: u32 = parse_component(env!("CARGO_PKG_VERSION_MINOR"));
const PATCH: u32 = parse_component(env!("CARGO_PKG_VERSION_PATCH"));

/// Returns the library version string.
///
/// # Examples
///
/// ```
/// assert_eq!(envprobe::version(), env!("CARGO_PKG_VERSION"));
/// ```
#[must_use]
pub const fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Returns the library version encoded as a single integer.
///
/// The encoding is `major * 10000 + minor * 100 + patch`, so `0.1.0`
/// encodes as `100` and `1.2.3` would encode as `10203`.
///
/// # Examples
///
/// ```
/// assert_eq!(envprobe::version_as_int(), 100);
/// ```
#[must_use]
pub const fn version_as_int() -> u32 {
    MAJOR * 10_000 + MINOR * 100 + PATCH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_matches_package_metadata() {
        assert_eq!(version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_version_int_encodes_components() {
        let mut parts = version().split('.');
        let major: u32 = parts.next().unwrap().parse().unwrap();
        let minor: u32 = parts.next().unwrap().parse().unwrap();
        let patch: u32 = parts.next().unwrap().parse().unwrap();
        assert_eq!(version_as_int(), major * 10_000 + minor * 100 + patch);
    }

    #[test]
    fn test_parse_component() {
        assert_eq!(parse_component("0"), 0);
        assert_eq!(parse_component("17"), 17);
        assert_eq!(parse_component("204"), 204);
    }
}

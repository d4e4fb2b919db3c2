//! Text parsers for OS descriptor files.
//!
//! Everything here is pure string work so it can be unit tested on any
//! host; the platform modules feed these parsers with file contents.

// Each target compiles only its own descriptor path, but all parsers stay
// built so the tests cover them on every host.
#![allow(dead_code)]

/// Trims a build-tag suffix off a kernel release string.
///
/// The numeric prefix (digits and dots) is kept; if a `-` immediately
/// follows it, the rest is dropped: `5.15.0-od3` becomes `5.15.0`. A
/// release that does not start numerically is passed through untouched.
pub(crate) fn trim_release_suffix(release: &str) -> &str {
    let numeric_len = release
        .bytes()
        .take_while(|b| b.is_ascii_digit() || *b == b'.')
        .count();
    if numeric_len > 0 && release.as_bytes().get(numeric_len) == Some(&b'-') {
        &release[..numeric_len]
    } else {
        release
    }
}

/// Extracts `PRETTY_NAME` from os-release file contents.
///
/// The value's surrounding double quotes are stripped if present.
pub(crate) fn pretty_name_from_os_release(text: &str) -> Option<String> {
    for line in text.lines() {
        let Some(value) = line.strip_prefix("PRETTY_NAME=") else {
            continue;
        };
        let value = value.trim();
        let value = value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .unwrap_or(value);
        if value.is_empty() {
            return None;
        }
        return Some(value.to_string());
    }
    None
}

/// Extracts the product name from `/etc/release` contents (Solaris family).
///
/// The first line is stripped of leading whitespace, then cut at the first
/// character outside `[A-Za-z0-9. ]`, dropping decorations like
/// `(powered by illumos)`.
pub(crate) fn product_from_release_file(text: &str) -> Option<String> {
    let line = text.lines().next()?.trim_start();
    let keep = line
        .bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'.' || *b == b' ')
        .count();
    let name = line[..keep].trim_end();
    (!name.is_empty()).then(|| name.to_string())
}

/// Pulls a `<string>` value for `key` out of plist XML.
///
/// This is a deliberate non-parser: version plists are machine-written
/// with a fixed shape, so scanning for `<key>NAME</key>` followed by the
/// next `<string>` element is enough and avoids an XML dependency.
pub(crate) fn plist_string_value(text: &str, key: &str) -> Option<String> {
    let marker = format!("<key>{key}</key>");
    let after_key = &text[text.find(&marker)? + marker.len()..];
    let start = after_key.find("<string>")? + "<string>".len();
    let rest = &after_key[start..];
    let end = rest.find("</string>")?;
    let value = rest[..end].trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_release_suffix() {
        assert_eq!(trim_release_suffix("5.15.0-od3-generic"), "5.15.0");
        assert_eq!(trim_release_suffix("14.1-RELEASE"), "14.1");
        assert_eq!(trim_release_suffix("23.1.0"), "23.1.0");
        assert_eq!(trim_release_suffix("11.4.0.15.0"), "11.4.0.15.0");
    }

    #[test]
    fn test_trim_release_suffix_non_numeric_prefix() {
        // No numeric prefix: passed through even with a dash
        assert_eq!(trim_release_suffix("rolling-release"), "rolling-release");
        assert_eq!(trim_release_suffix(""), "");
    }

    #[test]
    fn test_trim_release_suffix_dash_requires_numeric() {
        assert_eq!(trim_release_suffix("5-generic"), "5");
        assert_eq!(trim_release_suffix("-generic"), "-generic");
    }

    #[test]
    fn test_pretty_name_quoted() {
        let text = "NAME=\"Debian GNU/Linux\"\nPRETTY_NAME=\"Debian GNU/Linux 12 (bookworm)\"\nID=debian\n";
        assert_eq!(
            pretty_name_from_os_release(text).as_deref(),
            Some("Debian GNU/Linux 12 (bookworm)")
        );
    }

    #[test]
    fn test_pretty_name_unquoted() {
        let text = "PRETTY_NAME=Alpine Linux v3.20\n";
        assert_eq!(
            pretty_name_from_os_release(text).as_deref(),
            Some("Alpine Linux v3.20")
        );
    }

    #[test]
    fn test_pretty_name_key_must_match_exactly() {
        // ANSI_COLOR or OTHER_PRETTY_NAME must not match
        let text = "XPRETTY_NAME=\"no\"\nANSI_COLOR=\"1;31\"\n";
        assert_eq!(pretty_name_from_os_release(text), None);
    }

    #[test]
    fn test_pretty_name_missing_or_empty() {
        assert_eq!(pretty_name_from_os_release("ID=debian\n"), None);
        assert_eq!(pretty_name_from_os_release("PRETTY_NAME=\"\"\n"), None);
        assert_eq!(pretty_name_from_os_release(""), None);
    }

    #[test]
    fn test_release_file_solaris() {
        let text = "                             Oracle Solaris 11.4 X86\n  Copyright (c) 1983, 2018, Oracle.\n";
        assert_eq!(
            product_from_release_file(text).as_deref(),
            Some("Oracle Solaris 11.4 X86")
        );
    }

    #[test]
    fn test_release_file_cuts_decoration() {
        let text = "  OpenIndiana Hipster 2024.04 (powered by illumos)\n";
        assert_eq!(
            product_from_release_file(text).as_deref(),
            Some("OpenIndiana Hipster 2024.04")
        );
    }

    #[test]
    fn test_release_file_empty() {
        assert_eq!(product_from_release_file(""), None);
        assert_eq!(product_from_release_file("   \n"), None);
    }

    #[test]
    fn test_plist_scan() {
        let text = r#"<?xml version="1.0" encoding="UTF-8"?>
<plist version="1.0">
<dict>
    <key>ProductBuildVersion</key>
    <string>23B74</string>
    <key>ProductName</key>
    <string>macOS</string>
    <key>ProductVersion</key>
    <string>14.1.1</string>
</dict>
</plist>
"#;
        assert_eq!(plist_string_value(text, "ProductName").as_deref(), Some("macOS"));
        assert_eq!(
            plist_string_value(text, "ProductVersion").as_deref(),
            Some("14.1.1")
        );
        assert_eq!(plist_string_value(text, "ProductUserVisibleVersion"), None);
    }

    #[test]
    fn test_plist_scan_malformed() {
        assert_eq!(plist_string_value("", "ProductName"), None);
        assert_eq!(
            plist_string_value("<key>ProductName</key>", "ProductName"),
            None
        );
        assert_eq!(
            plist_string_value("<key>ProductName</key><string>unterminated", "ProductName"),
            None
        );
    }
}

//! Property-based tests for path handling.
//!
//! Note: The normalize module already has property tests for the POSIX
//! flavor. This module runs the heavier cross-style grid: the same inputs
//! pushed through both styles, plus the interactions between resolution
//! and parent extraction.

use proptest::prelude::*;

use super::directory::parent_dir_with;
use super::normalize::resolve_with;
use super::style::PathStyle;

// Strategy for generating path-like segments
fn segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[a-z0-9_-]{1,12}",
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
        1 => Just("...".to_string()),
    ]
}

fn segments_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(segment_strategy(), 1..10)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Both styles produce a rooted result for rooted input
    #[test]
    fn both_styles_stay_rooted(segments in segments_strategy()) {
        let posix_input = format!("/{}", segments.join("/"));
        let posix = resolve_with(&posix_input, None, PathStyle::Posix).unwrap();
        prop_assert!(posix.starts_with('/'));

        let windows_input = format!("C:\\{}", segments.join("\\"));
        let windows = resolve_with(&windows_input, Some("C:\\"), PathStyle::Windows).unwrap();
        prop_assert!(windows.starts_with("C:\\"));
    }

    // Resolution is idempotent in both styles
    #[test]
    fn both_styles_idempotent(segments in segments_strategy()) {
        let posix_input = format!("/{}", segments.join("/"));
        let once = resolve_with(&posix_input, None, PathStyle::Posix).unwrap();
        let twice = resolve_with(&once, None, PathStyle::Posix).unwrap();
        prop_assert_eq!(&once, &twice);

        let windows_input = format!("C:\\{}", segments.join("\\"));
        let once = resolve_with(&windows_input, Some("C:\\"), PathStyle::Windows).unwrap();
        let twice = resolve_with(&once, Some("C:\\"), PathStyle::Windows).unwrap();
        prop_assert_eq!(&once, &twice);
    }

    // Windows accepts either separator and writes only its own
    #[test]
    fn windows_separator_agnostic_input(segments in segments_strategy()) {
        let with_slash = format!("C:/{}", segments.join("/"));
        let with_backslash = format!("C:\\{}", segments.join("\\"));
        let a = resolve_with(&with_slash, Some("C:\\"), PathStyle::Windows).unwrap();
        let b = resolve_with(&with_backslash, Some("C:\\"), PathStyle::Windows).unwrap();
        prop_assert_eq!(a, b);
    }

    // The parent of a resolved path is a prefix of it (root excepted)
    #[test]
    fn parent_prefixes_resolution(segments in segments_strategy()) {
        let input = format!("/{}", segments.join("/"));
        let resolved = resolve_with(&input, None, PathStyle::Posix).unwrap();
        let parent = parent_dir_with(&resolved, PathStyle::Posix);
        if resolved != "/" {
            prop_assert!(resolved.starts_with(&parent));
        } else {
            prop_assert_eq!(parent, "/");
        }
    }

    // Appending a plain segment and taking the parent round-trips
    #[test]
    fn parent_undoes_append(
        segments in segments_strategy(),
        child in "[a-z0-9_-]{1,12}",
    ) {
        let input = format!("/{}", segments.join("/"));
        let resolved = resolve_with(&input, None, PathStyle::Posix).unwrap();
        let appended = if resolved == "/" {
            format!("/{child}")
        } else {
            format!("{resolved}/{child}")
        };
        prop_assert_eq!(parent_dir_with(&appended, PathStyle::Posix), resolved);
    }

    // Relative resolution equals absolute resolution of the joined text
    #[test]
    fn relative_matches_prejoined(
        cwd_segments in prop::collection::vec("[a-z0-9_-]{1,12}", 1..5),
        rel_segments in segments_strategy(),
    ) {
        let cwd = format!("/{}", cwd_segments.join("/"));
        let relative = rel_segments.join("/");
        let via_cwd = resolve_with(&relative, Some(&cwd), PathStyle::Posix);
        let prejoined = format!("{cwd}/{relative}");
        let direct = resolve_with(&prejoined, None, PathStyle::Posix).unwrap();
        // The two-phase relative path can reject inputs that collapse to
        // nothing; when it answers, it must agree with the joined form.
        if let Ok(resolved) = via_cwd {
            prop_assert_eq!(resolved, direct);
        }
    }
}

//! Property-based tests spanning classification, canonicalization and
//! resolution.

use super::canonicalize::{canonicalize_url, file_url_to_path, path_to_file_url};
use super::drive::fix_drive_letter_and_slashes;
use super::scheme::is_url;
use crate::fs::MockExistenceChecker;
use crate::platform::Platform;
use crate::resolve::ClientPathResolver;
use proptest::prelude::*;

fn component_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_#.-][a-zA-Z0-9 _#.-]{0,9}"
        .prop_filter("dot segments", |s| s != "." && s != "..")
}

fn posix_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(component_strategy(), 1..6)
        .prop_map(|parts| format!("/{}", parts.join("/")))
}

fn windows_path_strategy() -> impl Strategy<Value = String> {
    (
        "[a-zA-Z]",
        prop::collection::vec(component_strategy(), 1..6),
        any::<bool>(),
    )
        .prop_map(|(drive, parts, forward)| {
            let sep = if forward { "/" } else { "\\" };
            format!("{drive}:{sep}{}", parts.join(sep))
        })
}

fn http_url_strategy() -> impl Strategy<Value = String> {
    (
        "[a-z]{1,10}(\\.[a-z]{2,3})?",
        prop::collection::vec("[a-z0-9_-]{1,8}", 0..4),
        any::<bool>(),
    )
        .prop_map(|(host, parts, trailing)| {
            let mut url = format!("http://{host}/{}", parts.join("/"));
            if trailing && !parts.is_empty() {
                url.push('/');
            }
            url
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // A path survives conversion to a file URL and back, in canonical form
    #[test]
    fn posix_file_url_round_trip(path in posix_path_strategy()) {
        let url = path_to_file_url(&path);
        prop_assert_eq!(
            file_url_to_path(&url, Platform::Linux),
            Some(canonicalize_url(&path, Platform::Linux))
        );
    }

    #[test]
    fn windows_file_url_round_trip(path in windows_path_strategy()) {
        let url = path_to_file_url(&path);
        prop_assert_eq!(
            file_url_to_path(&url, Platform::Windows),
            Some(canonicalize_url(&path, Platform::Windows))
        );
    }

    // Drive paths are never URLs, and their canonical form starts lowercase
    #[test]
    fn windows_paths_are_not_urls(path in windows_path_strategy()) {
        prop_assert!(!is_url(&path));
        let canonical = canonicalize_url(&path, Platform::Windows);
        prop_assert!(!canonical.contains('/'));
        prop_assert!(canonical.starts_with(|c: char| c.is_ascii_lowercase()));
    }

    // Canonicalizing a drive path goes no further than fixing it
    #[test]
    fn fix_drive_agrees_with_canonicalize(path in windows_path_strategy()) {
        prop_assert_eq!(
            fix_drive_letter_and_slashes(&path, Platform::Windows),
            canonicalize_url(&path, Platform::Windows)
        );
    }

    #[test]
    fn fix_drive_idempotent(path in windows_path_strategy()) {
        let once = fix_drive_letter_and_slashes(&path, Platform::Windows);
        prop_assert_eq!(fix_drive_letter_and_slashes(&once, Platform::Windows), once);
    }

    // Network URLs stay URLs and lose at most a bare root path
    #[test]
    fn http_urls_stay_urls(url in http_url_strategy()) {
        prop_assert!(is_url(&url));
        let canonical = canonicalize_url(&url, Platform::Windows);
        prop_assert!(is_url(&canonical));
        prop_assert!(url.starts_with(&canonical));
        prop_assert!(canonical.len() + 1 >= url.len());
    }

    // File URLs resolve to their own path whatever the web root
    #[test]
    fn file_urls_resolve_regardless_of_web_root(
        path in posix_path_strategy(),
        web_root in prop_oneof![Just(String::new()), posix_path_strategy()],
    ) {
        let resolver = ClientPathResolver::new(Platform::Linux, MockExistenceChecker::empty());
        let url = path_to_file_url(&path);
        prop_assert_eq!(
            resolver.webkit_url_to_client_path(&web_root, &url),
            canonicalize_url(&path, Platform::Linux)
        );
    }

    // One candidate per path segment, all beneath the web root and ending in the file name
    #[test]
    fn candidates_are_suffixes(
        parts in prop::collection::vec("[a-z0-9_-]{1,8}", 1..6),
        web_root in posix_path_strategy(),
    ) {
        let resolver = ClientPathResolver::new(Platform::Linux, MockExistenceChecker::empty());
        let url = format!("http://site.com/{}", parts.join("/"));
        let candidates = resolver.candidates(&web_root, &url);

        prop_assert_eq!(candidates.len(), parts.len());
        let file_name = format!("/{}", parts[parts.len() - 1]);
        for candidate in &candidates {
            prop_assert!(candidate.starts_with(web_root.as_str()));
            prop_assert!(candidate.ends_with(file_name.as_str()));
        }
        for pair in candidates.windows(2) {
            prop_assert!(pair[0].len() > pair[1].len());
        }
    }
}

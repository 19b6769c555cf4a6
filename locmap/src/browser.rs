//! Browser executable lookup.
//!
//! A fixed, ordered table of install locations per platform. The first entry
//! the existence checker accepts wins.

use crate::fs::ExistenceChecker;
use crate::platform::Platform;

const WINDOWS_CANDIDATES: &[&str] = &[
    "C:\\Program Files\\Google\\Chrome\\Application\\chrome.exe",
    "C:\\Program Files (x86)\\Google\\Chrome\\Application\\chrome.exe",
];

const OSX_CANDIDATES: &[&str] = &["/Applications/Google Chrome.app/Contents/MacOS/Google Chrome"];

const LINUX_CANDIDATES: &[&str] = &["/usr/bin/google-chrome"];

/// The install locations probed on `platform`, in probing order.
///
/// # Examples
///
/// ```
/// use locmap::browser::browser_candidates;
/// use locmap::Platform;
///
/// assert_eq!(browser_candidates(Platform::Windows).len(), 2);
/// assert_eq!(browser_candidates(Platform::Linux), ["/usr/bin/google-chrome"]);
/// ```
#[must_use]
pub fn browser_candidates(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::Windows => WINDOWS_CANDIDATES,
        Platform::Osx => OSX_CANDIDATES,
        Platform::Linux => LINUX_CANDIDATES,
    }
}

/// Return the first browser install location that exists.
///
/// `None` when no candidate exists; that is an ordinary outcome.
///
/// # Examples
///
/// ```
/// use locmap::browser::browser_path;
/// use locmap::fs::MockExistenceChecker;
/// use locmap::Platform;
///
/// let checker = MockExistenceChecker::from_paths(["/usr/bin/google-chrome"]);
/// assert_eq!(
///     browser_path(Platform::Linux, &checker),
///     Some("/usr/bin/google-chrome")
/// );
/// assert_eq!(browser_path(Platform::Osx, &checker), None);
/// ```
pub fn browser_path<C: ExistenceChecker + ?Sized>(
    platform: Platform,
    checker: &C,
) -> Option<&'static str> {
    let found = browser_candidates(platform)
        .iter()
        .copied()
        .find(|candidate| checker.exists(candidate));
    if found.is_none() {
        log::debug!("No browser found among {platform} candidates");
    }
    found
}

//! Mapping remote script URLs to local files.
//!
//! A dev server or bundler often serves a file under a path that does not
//! match its location on disk: `http://localhost:8080/static/app/main.js` may
//! live at `<web root>/app/main.js`. The resolver tries progressively shorter
//! suffixes of the URL path beneath the web root, most specific first, and
//! returns the first one that exists.

use url::Url;

use crate::fs::{ExistenceChecker, SystemExistenceChecker};
use crate::locator::canonicalize::{canonicalize_url, percent_decode, FILE_URL_PREFIX};
use crate::locator::drive::starts_with_drive_letter;
use crate::platform::Platform;

/// Resolves remote script URLs to local paths beneath a web root.
///
/// # Examples
///
/// ```
/// use locmap::fs::MockExistenceChecker;
/// use locmap::{ClientPathResolver, Platform};
///
/// let checker = MockExistenceChecker::from_paths(["/srv/www/b/c.js"]);
/// let resolver = ClientPathResolver::new(Platform::Linux, checker);
///
/// assert_eq!(
///     resolver.webkit_url_to_client_path("/srv/www", "http://site.com/a/b/c.js"),
///     "/srv/www/b/c.js"
/// );
/// assert_eq!(
///     resolver.webkit_url_to_client_path("/srv/www", "http://site.com/missing.js"),
///     ""
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ClientPathResolver<C = SystemExistenceChecker> {
    platform: Platform,
    checker: C,
}

impl ClientPathResolver<SystemExistenceChecker> {
    /// Create a resolver that probes the real filesystem.
    #[must_use]
    pub fn system(platform: Platform) -> Self {
        Self::new(platform, SystemExistenceChecker)
    }
}

impl<C: ExistenceChecker> ClientPathResolver<C> {
    /// Create a resolver with an explicit existence checker.
    pub fn new(platform: Platform, checker: C) -> Self {
        Self { platform, checker }
    }

    /// The platform whose path rules this resolver applies.
    #[must_use]
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// The existence checker used for probing.
    pub fn checker(&self) -> &C {
        &self.checker
    }

    /// Map `url` to a local path, or return an empty string.
    ///
    /// `file:///` URLs are decoded and canonicalized directly, whatever the
    /// web root. Other URLs need a non-empty `web_root` and a path; their
    /// candidate paths are probed in the order given by
    /// [`candidates`](Self::candidates).
    #[must_use]
    pub fn webkit_url_to_client_path(&self, web_root: &str, url: &str) -> String {
        if url.is_empty() {
            return String::new();
        }

        if url.starts_with(FILE_URL_PREFIX) {
            return canonicalize_url(&percent_decode(url), self.platform);
        }

        for candidate in self.candidates(web_root, url) {
            if self.checker.exists(&candidate) {
                log::debug!("Resolved {url} to {candidate}");
                return candidate;
            }
            log::debug!("Candidate {candidate} for {url} does not exist");
        }

        log::debug!("Could not map {url} beneath web root {web_root:?}");
        String::new()
    }

    /// The ordered local paths probed for a network `url`.
    ///
    /// The first candidate joins the whole decoded URL path onto `web_root`;
    /// each following one drops a leading segment, down to the file name.
    /// Candidates are in canonical form. A locator without a scheme
    /// (`/a/b.js`, `//host/a/b.js`) contributes its path the same way. Empty
    /// when `web_root` is empty, the URL does not parse, or its path is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use locmap::{ClientPathResolver, Platform};
    ///
    /// let resolver = ClientPathResolver::system(Platform::Linux);
    /// assert_eq!(
    ///     resolver.candidates("/www", "http://site.com/a/my%20b/c.js"),
    ///     vec!["/www/a/my b/c.js", "/www/my b/c.js", "/www/c.js"]
    /// );
    /// ```
    #[must_use]
    pub fn candidates(&self, web_root: &str, url: &str) -> Vec<String> {
        if web_root.is_empty() || url.is_empty() {
            return Vec::new();
        }

        let Some(segments) = url_path_segments(url) else {
            return Vec::new();
        };

        let sep = self.platform.separator();
        let root = web_root.trim_end_matches(|c: char| self.platform.is_separator(c));

        (0..segments.len())
            .map(|start| {
                let mut candidate = root.to_string();
                for segment in &segments[start..] {
                    candidate.push(sep);
                    candidate.push_str(segment);
                }
                canonicalize_url(&candidate, self.platform)
            })
            .collect()
    }
}

/// Base for locators without a scheme, such as `/a/b.js` or `//host/a/b.js`.
const RELATIVE_LOCATOR_BASE: &str = "http://localhost/";

/// Parse `url`, reading a scheme-less locator as a path on a remote host.
fn parse_locator(url: &str) -> Result<Url, url::ParseError> {
    match Url::parse(url) {
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Url::parse(RELATIVE_LOCATOR_BASE)?.join(url)
        }
        parsed => parsed,
    }
}

/// Decoded, non-empty path segments of `url`, or `None` if it has no path.
///
/// `.` and `..` segments are dropped so candidates stay beneath the web root.
/// A leading drive segment (`/c:/x` in a `file`-like URL) is dropped as well.
fn url_path_segments(url: &str) -> Option<Vec<String>> {
    let parsed = match parse_locator(url) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::debug!("Cannot parse {url} as a URL: {e}");
            return None;
        }
    };

    let decoded = percent_decode(parsed.path());
    let mut segments: Vec<String> = decoded
        .split('/')
        .filter(|s| !s.is_empty() && *s != "." && *s != "..")
        .map(str::to_string)
        .collect();

    if segments
        .first()
        .is_some_and(|first| first.len() == 2 && starts_with_drive_letter(first))
    {
        segments.remove(0);
    }

    if segments.is_empty() {
        None
    } else {
        Some(segments)
    }
}

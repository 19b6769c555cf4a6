//! Locator classification.
//!
//! A locator is either a URL or a local path. The awkward case is a Windows
//! drive path such as `c:/project/code.js`, which a URL parser happily reads
//! as scheme `c`. Classification therefore inspects the scheme explicitly and
//! reports a one-letter scheme as a drive letter.

use url::Url;

/// Scheme names treated as URLs even when they carry no host.
///
/// Besides the web schemes this covers virtual schemes emitted by bundlers and
/// script hosts (`webpack:///src/app.js`, `node:internal/...`).
pub const RECOGNIZED_SCHEMES: &[&str] = &[
    "http",
    "https",
    "file",
    "ws",
    "wss",
    "webpack",
    "webpack-internal",
    "ng",
    "meteor",
    "node",
    "chrome",
    "chrome-extension",
    "about",
    "data",
];

/// What the leading `name:` of a locator turned out to be.
///
/// # Examples
///
/// ```
/// use locmap::locator::scheme::{classify, SchemeKind};
///
/// assert_eq!(classify("c:/project/code.js"), SchemeKind::DriveLetter('c'));
/// assert_eq!(
///     classify("webpack:///webpack/webpackthing"),
///     SchemeKind::Recognized("webpack".to_string())
/// );
/// assert_eq!(classify("/usr/src/app.js"), SchemeKind::Neither);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SchemeKind {
    /// A URL scheme, lowercased.
    Recognized(String),
    /// A single-letter "scheme", which is really a Windows drive letter.
    DriveLetter(char),
    /// No usable scheme: a bare path or a malformed string.
    Neither,
}

impl SchemeKind {
    /// Whether this classification denotes a URL.
    #[must_use]
    pub fn is_url(&self) -> bool {
        matches!(self, Self::Recognized(_))
    }
}

/// Return the syntactic scheme prefix of `input`, if any.
///
/// A scheme is an ASCII letter followed by letters, digits, `+`, `-` or `.`,
/// terminated by `:`.
#[must_use]
pub fn scheme_prefix(input: &str) -> Option<&str> {
    let colon = input.find(':')?;
    let candidate = &input[..colon];
    let mut chars = candidate.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    if chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        Some(candidate)
    } else {
        None
    }
}

/// Classify a locator by its scheme.
///
/// The result is total: every string, including the empty string, maps to
/// exactly one [`SchemeKind`].
#[must_use]
pub fn classify(input: &str) -> SchemeKind {
    let Some(scheme) = scheme_prefix(input) else {
        return SchemeKind::Neither;
    };

    if scheme.len() == 1 {
        // scheme_prefix guarantees an ASCII letter here.
        return scheme
            .chars()
            .next()
            .map_or(SchemeKind::Neither, SchemeKind::DriveLetter);
    }

    let Ok(parsed) = Url::parse(input) else {
        return SchemeKind::Neither;
    };

    let name = parsed.scheme();
    let has_host = parsed.host_str().is_some_and(|h| !h.is_empty());
    if has_host || RECOGNIZED_SCHEMES.contains(&name) {
        SchemeKind::Recognized(name.to_string())
    } else {
        SchemeKind::Neither
    }
}

/// Returns `true` iff `input` is a URL rather than a local path.
///
/// # Examples
///
/// ```
/// use locmap::is_url;
///
/// assert!(is_url("http://localhost:8080/app.js"));
/// assert!(is_url("webpack:///webpack/webpackthing"));
/// assert!(!is_url("c:/project/code.js"));
/// assert!(!is_url("/home/user/code.js"));
/// assert!(!is_url(""));
/// ```
#[must_use]
pub fn is_url(input: &str) -> bool {
    classify(input).is_url()
}

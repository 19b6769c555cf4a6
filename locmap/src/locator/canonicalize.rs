//! Locator canonicalization.
//!
//! Canonicalization maps equivalent locators to one string so they can be
//! compared or used as map keys:
//! - `file:///` URLs become local paths
//! - local paths get native separators and, on Windows, a lowercase drive
//! - network URLs are left alone apart from a bare root path (`http://a/`)
//!
//! Canonicalization is idempotent for every input.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

use crate::locator::drive::{fix_drive_letter, starts_with_drive_letter, to_native_separators};
use crate::locator::scheme::is_url;
use crate::platform::Platform;

/// Prefix of a `file` URL with an empty authority.
pub const FILE_URL_PREFIX: &str = "file:///";

/// Characters escaped when turning a local path into a `file:///` URL.
const FILE_PATH_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Canonicalize a locator (URL or local path).
///
/// # Examples
///
/// ```
/// use locmap::{canonicalize_url, Platform};
///
/// assert_eq!(
///     canonicalize_url("c:/thing/file.js", Platform::Windows),
///     "c:\\thing\\file.js"
/// );
/// assert_eq!(
///     canonicalize_url("file:///Users/me/app.js", Platform::Osx),
///     "/Users/me/app.js"
/// );
/// assert_eq!(
///     canonicalize_url("http://site.com/", Platform::Linux),
///     "http://site.com"
/// );
/// ```
#[must_use]
pub fn canonicalize_url(locator: &str, platform: Platform) -> String {
    if locator.is_empty() {
        return String::new();
    }

    if let Some(rest) = locator.strip_prefix(FILE_URL_PREFIX) {
        return canonicalize_local(&rooted_file_path(rest), platform);
    }

    if is_url(locator) {
        return strip_root_path(locator);
    }

    canonicalize_local(locator, platform)
}

/// The local path carried by a `file:///` URL, before separator fixing.
///
/// The prefix strip eats the root `/` of POSIX paths, so it is put back
/// unless a drive letter provides the root.
fn rooted_file_path(rest: &str) -> String {
    if starts_with_drive_letter(rest) {
        return rest.to_string();
    }
    if let Some(drive_path) = rest.strip_prefix('/') {
        if starts_with_drive_letter(drive_path) {
            return drive_path.to_string();
        }
        return rest.to_string();
    }
    if rest.starts_with('\\') {
        return rest.to_string();
    }
    format!("/{rest}")
}

fn canonicalize_local(path: &str, platform: Platform) -> String {
    let native = to_native_separators(path, platform);
    let native = if platform.has_drive_letters() {
        fix_drive_letter(&native)
    } else {
        native
    };

    // Rewriting backslashes can turn a scheme-like path into a URL shape;
    // give it the URL treatment now so a second pass is a no-op.
    if is_url(&native) {
        strip_root_path(&native)
    } else {
        native
    }
}

/// Drop the path of a hierarchical URL when it is exactly `/`.
///
/// Query and fragment are kept verbatim: `http://a/?q` becomes `http://a?q`,
/// while `http://a/b/` is left untouched.
fn strip_root_path(url: &str) -> String {
    let Some(scheme_end) = url.find("://") else {
        return url.to_string();
    };
    let authority_start = scheme_end + 3;
    let Some(offset) = url[authority_start..].find(|c: char| matches!(c, '/' | '?' | '#')) else {
        return url.to_string();
    };

    let path_start = authority_start + offset;
    if !url[path_start..].starts_with('/') {
        return url.to_string();
    }

    let path_end = url[path_start..]
        .find(|c: char| matches!(c, '?' | '#'))
        .map_or(url.len(), |i| path_start + i);

    if &url[path_start..path_end] == "/" {
        format!("{}{}", &url[..path_start], &url[path_end..])
    } else {
        url.to_string()
    }
}

/// Remove exactly one trailing `/` or `\`.
///
/// # Examples
///
/// ```
/// use locmap::locator::canonicalize::strip_trailing_slash;
///
/// assert_eq!(strip_trailing_slash("http://site.com/"), "http://site.com");
/// assert_eq!(strip_trailing_slash("c:\\dir\\"), "c:\\dir");
/// assert_eq!(strip_trailing_slash("/a//"), "/a/");
/// ```
#[must_use]
pub fn strip_trailing_slash(s: &str) -> &str {
    s.strip_suffix('/')
        .or_else(|| s.strip_suffix('\\'))
        .unwrap_or(s)
}

/// Percent-decode `s`, replacing invalid UTF-8 sequences.
#[must_use]
pub fn percent_decode(s: &str) -> String {
    percent_decode_str(s).decode_utf8_lossy().into_owned()
}

/// Convert a `file:///` URL into a canonical local path.
///
/// Returns `None` if `url` is not a `file:///` URL.
///
/// # Examples
///
/// ```
/// use locmap::locator::canonicalize::file_url_to_path;
/// use locmap::Platform;
///
/// assert_eq!(
///     file_url_to_path("file:///home/me/my%20app.js", Platform::Linux).as_deref(),
///     Some("/home/me/my app.js")
/// );
/// assert_eq!(file_url_to_path("http://site.com/a.js", Platform::Linux), None);
/// ```
#[must_use]
pub fn file_url_to_path(url: &str, platform: Platform) -> Option<String> {
    if !url.starts_with(FILE_URL_PREFIX) {
        return None;
    }
    Some(canonicalize_url(&percent_decode(url), platform))
}

/// Convert a local path into a `file:///` URL with forward slashes.
///
/// # Examples
///
/// ```
/// use locmap::locator::canonicalize::path_to_file_url;
///
/// assert_eq!(path_to_file_url("/home/me/my app.js"), "file:///home/me/my%20app.js");
/// assert_eq!(path_to_file_url("c:\\src\\a.js"), "file:///c:/src/a.js");
/// ```
#[must_use]
pub fn path_to_file_url(path: &str) -> String {
    let forward = path.replace('\\', "/");
    let trimmed = forward.trim_start_matches('/');
    format!(
        "{FILE_URL_PREFIX}{}",
        utf8_percent_encode(trimmed, FILE_PATH_ENCODE_SET)
    )
}

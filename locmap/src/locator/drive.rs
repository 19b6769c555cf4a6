//! Drive-letter and separator fixing.
//!
//! Debug targets on Windows report drive letters in lowercase while editors
//! and the filesystem hand out either case. Lowercasing the drive letter and
//! using native separators makes both sides compare equal.

use crate::locator::canonicalize::FILE_URL_PREFIX;
use crate::locator::scheme::is_url;
use crate::platform::Platform;

/// Whether `s` starts with a drive letter such as `C:`.
#[must_use]
pub fn starts_with_drive_letter(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Replace every `/` and `\` with the platform separator.
pub(crate) fn to_native_separators(s: &str, platform: Platform) -> String {
    let sep = platform.separator();
    s.chars()
        .map(|c| if c == '/' || c == '\\' { sep } else { c })
        .collect()
}

fn lowercase_leading_drive(s: &str) -> String {
    if starts_with_drive_letter(s) {
        // Drive letters are ASCII, so slicing at 1 is a char boundary.
        let mut fixed = s[..1].to_ascii_lowercase();
        fixed.push_str(&s[1..]);
        fixed
    } else {
        s.to_string()
    }
}

/// Lowercase a drive letter at the start of `s` or right after `file:///`.
///
/// # Examples
///
/// ```
/// use locmap::locator::drive::fix_drive_letter;
///
/// assert_eq!(fix_drive_letter("C:/a/b.js"), "c:/a/b.js");
/// assert_eq!(fix_drive_letter("file:///D:/a.js"), "file:///d:/a.js");
/// assert_eq!(fix_drive_letter("/usr/src"), "/usr/src");
/// ```
#[must_use]
pub fn fix_drive_letter(s: &str) -> String {
    match s.strip_prefix(FILE_URL_PREFIX) {
        Some(rest) => format!("{FILE_URL_PREFIX}{}", lowercase_leading_drive(rest)),
        None => lowercase_leading_drive(s),
    }
}

/// Lowercase the drive letter and convert slashes to the platform separator.
///
/// Unlike [`canonicalize_url`](crate::canonicalize_url), a `file:///` prefix
/// is kept as-is and only the path after it is rewritten. Network URLs are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use locmap::{fix_drive_letter_and_slashes, Platform};
///
/// assert_eq!(
///     fix_drive_letter_and_slashes("C:/project/a.js", Platform::Windows),
///     "c:\\project\\a.js"
/// );
/// assert_eq!(
///     fix_drive_letter_and_slashes("file:///C:/project/a.js", Platform::Windows),
///     "file:///c:\\project\\a.js"
/// );
/// ```
#[must_use]
pub fn fix_drive_letter_and_slashes(s: &str, platform: Platform) -> String {
    if s.is_empty() {
        return String::new();
    }

    if let Some(rest) = s.strip_prefix(FILE_URL_PREFIX) {
        let fixed = to_native_separators(&lowercase_leading_drive(rest), platform);
        return format!("{FILE_URL_PREFIX}{fixed}");
    }

    if is_url(s) {
        return s.to_string();
    }

    to_native_separators(&lowercase_leading_drive(s), platform)
}

//! Web root resolution.
//!
//! The web root is the local directory that remote locators are assumed to
//! map beneath. It is configured as an absolute path, a path relative to the
//! working directory, or left empty to mean the working directory itself.
//!
//! All functions here work on strings with an explicit [`Platform`], so the
//! Windows rules apply regardless of the host running the code.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::locator::drive::starts_with_drive_letter;
use crate::platform::Platform;

/// Whether `path` is absolute on `platform`.
///
/// POSIX paths are absolute when they start with `/`. Windows paths are
/// absolute when they start with a drive letter and separator (`c:\`) or with
/// a separator (rooted on the current drive, or UNC).
///
/// # Examples
///
/// ```
/// use locmap::web_root::is_absolute;
/// use locmap::Platform;
///
/// assert!(is_absolute("/srv/www", Platform::Linux));
/// assert!(is_absolute("C:\\www", Platform::Windows));
/// assert!(!is_absolute("C:www", Platform::Windows));
/// assert!(!is_absolute("www", Platform::Linux));
/// ```
#[must_use]
pub fn is_absolute(path: &str, platform: Platform) -> bool {
    match path.chars().next() {
        Some(c) if platform.is_separator(c) => true,
        Some(_) if platform.has_drive_letters() && starts_with_drive_letter(path) => {
            path[2..].chars().next().is_some_and(|c| platform.is_separator(c))
        }
        _ => false,
    }
}

/// Resolve the configured web root against `cwd`.
///
/// - absolute `web_root`: returned unchanged
/// - relative `web_root`: joined onto `cwd`, with `.` and `..` collapsed
/// - empty `web_root`: `cwd`
///
/// # Examples
///
/// ```
/// use locmap::{get_web_root, Platform};
///
/// assert_eq!(get_web_root("/srv/www", "/home/me", Platform::Linux), "/srv/www");
/// assert_eq!(get_web_root("public", "/home/me", Platform::Linux), "/home/me/public");
/// assert_eq!(get_web_root("../site", "/home/me/app", Platform::Linux), "/home/me/site");
/// assert_eq!(get_web_root("", "/home/me", Platform::Linux), "/home/me");
/// assert_eq!(get_web_root("www", "C:\\proj", Platform::Windows), "C:\\proj\\www");
/// ```
#[must_use]
pub fn get_web_root(web_root: &str, cwd: &str, platform: Platform) -> String {
    if web_root.is_empty() {
        return cwd.to_string();
    }
    if is_absolute(web_root, platform) {
        return web_root.to_string();
    }
    join_collapsed(cwd, web_root, platform)
}

/// Join `relative` onto `base`, resolving `.` and `..` in the result.
///
/// `..` never climbs above the root of `base`.
#[must_use]
pub fn join_collapsed(base: &str, relative: &str, platform: Platform) -> String {
    let sep = platform.separator();

    // Split off the root: a drive prefix, a leading separator, or nothing.
    let (root, rest) = split_root(base, platform);

    let mut parts: Vec<&str> = Vec::new();
    let segments = rest
        .split(|c: char| platform.is_separator(c))
        .chain(relative.split(|c: char| platform.is_separator(c)));
    for segment in segments {
        match segment {
            "" | "." => {}
            ".." => {
                if parts.last().is_some_and(|last| *last != "..") {
                    parts.pop();
                } else if root.is_empty() {
                    parts.push("..");
                }
            }
            other => parts.push(other),
        }
    }

    let mut joined = root;
    joined.push_str(&parts.join(sep.to_string().as_str()));
    if joined.is_empty() {
        joined.push('.');
    }
    joined
}

fn split_root(path: &str, platform: Platform) -> (String, &str) {
    let sep = platform.separator();
    if platform.has_drive_letters() && starts_with_drive_letter(path) {
        let after_drive = &path[2..];
        return match after_drive.chars().next() {
            Some(c) if platform.is_separator(c) => {
                (format!("{}{sep}", &path[..2]), &after_drive[1..])
            }
            _ => (path[..2].to_string(), after_drive),
        };
    }
    match path.chars().next() {
        Some(c) if platform.is_separator(c) => (sep.to_string(), &path[c.len_utf8()..]),
        _ => (String::new(), path),
    }
}

/// Expand a leading `~` to the home directory.
///
/// Handles `~` and `~/path`; `~user` syntax is rejected.
///
/// # Errors
///
/// Returns an error if:
/// - The path contains invalid UTF-8
/// - The home directory cannot be determined
/// - The path uses `~user` syntax
///
/// # Examples
///
/// ```
/// use locmap::web_root::expand_home;
/// use std::path::Path;
///
/// let expanded = expand_home(Path::new("~/site")).unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with("site"));
///
/// assert_eq!(expand_home(Path::new("/srv")).unwrap(), Path::new("/srv"));
/// ```
pub fn expand_home(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_str().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Path contains invalid UTF-8".to_string(),
    })?;

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Cannot determine home directory".to_string(),
    })?;

    if path_str == "~" {
        Ok(home)
    } else if path_str.starts_with("~/") || path_str.starts_with("~\\") {
        Ok(home.join(&path_str[2..]))
    } else {
        Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

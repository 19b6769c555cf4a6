//! Filesystem existence probing.
//!
//! Resolution only needs to know whether a candidate path exists. The probe is
//! a trait so the resolver can be driven by an in-memory set in tests, the
//! same way a real filesystem drives it in production.
//!
//! A probe never fails: a missing file, a permission error or a malformed
//! path all read as "does not exist".

use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;

/// Trait for checking whether a local path exists.
///
/// # Examples
///
/// ```
/// use locmap::fs::{ExistenceChecker, MockExistenceChecker};
///
/// let checker = MockExistenceChecker::from_paths(["/srv/app.js"]);
/// assert!(checker.exists("/srv/app.js"));
/// assert!(!checker.exists("/srv/other.js"));
/// ```
pub trait ExistenceChecker {
    /// Returns `true` if `path` exists. Never panics or errors.
    fn exists(&self, path: &str) -> bool;
}

impl<F> ExistenceChecker for F
where
    F: Fn(&str) -> bool,
{
    fn exists(&self, path: &str) -> bool {
        self(path)
    }
}

/// Production checker backed by a filesystem metadata probe.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemExistenceChecker;

impl ExistenceChecker for SystemExistenceChecker {
    fn exists(&self, path: &str) -> bool {
        if path.is_empty() {
            return false;
        }
        match fs::metadata(path) {
            Ok(_) => true,
            Err(e) if e.kind() == ErrorKind::NotFound => false,
            Err(e) => {
                log::debug!("Existence probe for {path} failed: {e}");
                false
            }
        }
    }
}

/// Mock checker for testing with a fixed set of existing paths.
///
/// Paths are compared as exact strings, so tests should insert them in the
/// canonical form the resolver probes.
#[derive(Debug, Clone, Default)]
pub struct MockExistenceChecker {
    existing: HashSet<String>,
}

impl MockExistenceChecker {
    /// Create a mock checker with the specified existing paths.
    #[must_use]
    pub fn new(existing: HashSet<String>) -> Self {
        Self { existing }
    }

    /// Create a mock checker from any iterator of path-like strings.
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(paths.into_iter().map(Into::into).collect())
    }

    /// Create an empty mock checker (nothing exists).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Mark an additional path as existing.
    pub fn insert(&mut self, path: impl Into<String>) {
        self.existing.insert(path.into());
    }
}

impl ExistenceChecker for MockExistenceChecker {
    fn exists(&self, path: &str) -> bool {
        self.existing.contains(path)
    }
}

/// Check whether `path` exists on the real filesystem.
///
/// Any probe failure is reported as `false`.
///
/// # Examples
///
/// ```
/// use locmap::fs::exists_sync;
///
/// assert!(!exists_sync("/definitely/not/here/locmap"));
/// assert!(!exists_sync(""));
/// ```
#[must_use]
pub fn exists_sync(path: &str) -> bool {
    SystemExistenceChecker.exists(path)
}

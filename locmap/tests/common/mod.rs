//! Common test utilities for integration tests.
//!
//! Provides an on-disk web root fixture and an environment variable guard.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use locmap::{canonicalize_url, Platform};
use tempfile::TempDir;

/// A temporary web root populated with script files.
///
/// # Examples
///
/// ```no_run
/// # use common::WebRootFixture;
/// let fixture = WebRootFixture::new()
///     .with_file("lib/util.js")
///     .with_file("app.js");
/// let root = fixture.root();
/// ```
#[allow(dead_code)]
pub struct WebRootFixture {
    dir: TempDir,
}

#[allow(dead_code)]
impl WebRootFixture {
    /// Creates an empty web root in a fresh temporary directory.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Creates `relative` (with `/` separators) and its parent directories.
    pub fn with_file(self, relative: &str) -> Self {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, "// fixture\n").unwrap();
        self
    }

    /// The web root directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// The web root as a string.
    pub fn root(&self) -> String {
        self.path().to_str().unwrap().to_string()
    }

    /// The canonical string form of `relative` beneath the web root.
    pub fn canonical(&self, relative: &str) -> String {
        let path: PathBuf = relative.split('/').fold(self.path().to_path_buf(), |p, s| p.join(s));
        canonicalize_url(path.to_str().unwrap(), Platform::detect())
    }
}

/// RAII guard for setting and restoring an environment variable.
///
/// Tests using it must be marked `#[serial]`.
#[allow(dead_code)]
pub struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    /// Sets `key` to `value` until the guard is dropped.
    pub fn set(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    /// Removes `key` until the guard is dropped.
    pub fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(value) => env::set_var(&self.key, value),
            None => env::remove_var(&self.key),
        }
    }
}

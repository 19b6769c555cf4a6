//! Common test utilities for CLI integration tests.
//!
//! Provides an isolated working directory with helpers for creating web root
//! files and configuration, and a command builder that ignores the caller's
//! `LOCMAP_*` environment.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak host configuration into tests.
const LOCMAP_ENV_VARS: &[&str] = &[
    "LOCMAP_WEB_ROOT",
    "LOCMAP_PLATFORM",
    "LOCMAP_BROWSER_PATH",
    "LOCMAP_LOG_MODE",
];

/// Test environment rooted in a temporary directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            temp_path,
        }
    }

    /// A `locmap` command running inside the test directory with a clean
    /// environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("locmap").expect("Failed to find locmap binary");
        cmd.current_dir(&self.temp_path);
        for var in LOCMAP_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Same as [`TestEnv::command`] with `--platform linux` already set.
    pub fn linux_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("--platform").arg("linux");
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// The temp path as a string.
    pub fn root(&self) -> String {
        self.temp_path.to_str().expect("Non-UTF-8 temp dir").to_string()
    }

    /// Create a file (and its parents) at a `/`-separated relative path.
    pub fn create_file(&self, relative: &str) -> PathBuf {
        let path = self.temp_path.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create test directory");
        }
        fs::write(&path, "// test\n").expect("Failed to write test file");
        path
    }

    /// Write a configuration file into the test directory.
    pub fn write_config(&self, name: &str, contents: &str) {
        fs::write(self.temp_path.join(name), contents).expect("Failed to write config");
    }
}

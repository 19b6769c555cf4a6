//! A configured entry point bundling platform, web root and existence probe.
//!
//! The free functions in [`crate::locator`], [`crate::web_root`] and
//! [`crate::resolve`] take their context as arguments. A [`Reconciler`] holds
//! that context once, typically built from a [`Config`], so callers such as
//! the CLI do not have to thread it through every call.

use std::path::Path;

use crate::browser;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::fs::{ExistenceChecker, SystemExistenceChecker};
use crate::locator::{self, SchemeKind};
use crate::platform::Platform;
use crate::resolve::ClientPathResolver;
use crate::web_root::{expand_home, get_web_root};

/// Reconciles browser-side script locators with local paths.
///
/// # Examples
///
/// ```
/// use locmap::fs::MockExistenceChecker;
/// use locmap::{Platform, Reconciler};
///
/// let checker = MockExistenceChecker::from_paths(["c:\\proj\\www\\app.js"]);
/// let reconciler = Reconciler::new(Platform::Windows, "C:\\proj\\www", checker);
///
/// assert_eq!(reconciler.canonicalize("file:///C:/proj/www/app.js"), "c:\\proj\\www\\app.js");
/// assert_eq!(reconciler.resolve("http://localhost/static/app.js"), "c:\\proj\\www\\app.js");
/// assert!(reconciler.is_url("http://localhost/"));
/// assert!(!reconciler.is_url("c:/proj/www/app.js"));
/// ```
#[derive(Debug, Clone)]
pub struct Reconciler<C = SystemExistenceChecker> {
    web_root: String,
    browser_override: Option<String>,
    resolver: ClientPathResolver<C>,
}

impl Reconciler<SystemExistenceChecker> {
    /// Build a reconciler that probes the real filesystem.
    ///
    /// The platform is taken from `config` or detected from the host. The
    /// web root is `~`-expanded and resolved against `cwd`.
    ///
    /// # Errors
    ///
    /// Returns an error if `cwd` is not valid UTF-8, or if the configured web
    /// root cannot be `~`-expanded.
    pub fn from_config(config: &Config, cwd: &Path) -> Result<Self> {
        Self::from_config_with_checker(config, cwd, SystemExistenceChecker)
    }
}

impl<C: ExistenceChecker> Reconciler<C> {
    /// Create a reconciler with an explicit platform, web root and checker.
    ///
    /// `web_root` is used as given; see [`get_web_root`] for resolving a
    /// relative one.
    pub fn new(platform: Platform, web_root: impl Into<String>, checker: C) -> Self {
        Self {
            web_root: web_root.into(),
            browser_override: None,
            resolver: ClientPathResolver::new(platform, checker),
        }
    }

    /// Like [`Reconciler::from_config`], with a caller-provided checker.
    ///
    /// # Errors
    ///
    /// Returns an error if `cwd` is not valid UTF-8, or if the configured web
    /// root cannot be `~`-expanded.
    pub fn from_config_with_checker(config: &Config, cwd: &Path, checker: C) -> Result<Self> {
        let platform = config.platform.unwrap_or_else(Platform::detect);

        let cwd = cwd.to_str().ok_or_else(|| Error::InvalidPath {
            path: cwd.to_path_buf(),
            reason: "Working directory contains invalid UTF-8".to_string(),
        })?;

        let configured = match config.web_root.as_deref() {
            Some(root) if root.starts_with('~') => {
                let expanded = expand_home(Path::new(root))?;
                expanded
                    .to_str()
                    .ok_or_else(|| Error::InvalidPath {
                        path: expanded.clone(),
                        reason: "Web root contains invalid UTF-8".to_string(),
                    })?
                    .to_string()
            }
            Some(root) => root.to_string(),
            None => String::new(),
        };

        let web_root = get_web_root(&configured, cwd, platform);
        log::debug!("Using web root {web_root} on {platform}");

        Ok(Self {
            web_root,
            browser_override: config.browser_path.clone(),
            resolver: ClientPathResolver::new(platform, checker),
        })
    }

    /// Report `path` as the browser location instead of probing.
    #[must_use]
    pub fn with_browser_path(mut self, path: impl Into<String>) -> Self {
        self.browser_override = Some(path.into());
        self
    }

    /// The platform whose rules this reconciler applies.
    #[must_use]
    pub fn platform(&self) -> Platform {
        self.resolver.platform()
    }

    /// The resolved web root.
    #[must_use]
    pub fn web_root(&self) -> &str {
        &self.web_root
    }

    /// See [`locator::canonicalize_url`].
    #[must_use]
    pub fn canonicalize(&self, locator: &str) -> String {
        locator::canonicalize_url(locator, self.platform())
    }

    /// See [`locator::is_url`].
    #[must_use]
    pub fn is_url(&self, locator: &str) -> bool {
        locator::is_url(locator)
    }

    /// See [`locator::classify`].
    #[must_use]
    pub fn classify(&self, locator: &str) -> SchemeKind {
        locator::classify(locator)
    }

    /// See [`locator::fix_drive_letter_and_slashes`].
    #[must_use]
    pub fn fix_drive_letter_and_slashes(&self, path: &str) -> String {
        locator::fix_drive_letter_and_slashes(path, self.platform())
    }

    /// Map `url` to an existing local path beneath the web root, or `""`.
    #[must_use]
    pub fn resolve(&self, url: &str) -> String {
        self.resolver.webkit_url_to_client_path(&self.web_root, url)
    }

    /// The local paths [`resolve`](Self::resolve) would probe for `url`.
    #[must_use]
    pub fn candidates(&self, url: &str) -> Vec<String> {
        self.resolver.candidates(&self.web_root, url)
    }

    /// The configured browser location, or the first install location found.
    #[must_use]
    pub fn browser_path(&self) -> Option<String> {
        if let Some(ref path) = self.browser_override {
            return Some(path.clone());
        }
        browser::browser_path(self.platform(), self.resolver.checker()).map(str::to_string)
    }
}

//! Configuration schema definitions.
//!
//! This module defines the configuration structure for locmap: where the
//! web root lives, which platform rules to apply, and an optional fixed
//! browser location.

use serde::{Deserialize, Serialize};

use crate::platform::Platform;

/// Complete configuration structure.
///
/// Every field is optional so that partial configurations from several
/// sources can be merged.
///
/// # Examples
///
/// ```
/// use locmap::config::Config;
/// use locmap::Platform;
///
/// let config = Config {
///     web_root: Some("public".to_string()),
///     platform: Some(Platform::Linux),
///     ..Default::default()
/// };
/// assert_eq!(config.web_root.as_deref(), Some("public"));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Local directory that remote script URLs map beneath.
    ///
    /// Relative values are resolved against the working directory; `~` is
    /// expanded to the home directory.
    pub web_root: Option<String>,

    /// Platform whose path rules apply. Detected from the host when unset.
    pub platform: Option<Platform>,

    /// Browser executable to report instead of probing install locations.
    pub browser_path: Option<String>,
}

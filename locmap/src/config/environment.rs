//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `LOCMAP_*` environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::Result;
use crate::platform::Platform;
use std::env;

/// Overrides the configured web root.
pub const ENV_WEB_ROOT: &str = "LOCMAP_WEB_ROOT";

/// Overrides the platform (`windows`, `osx` or `linux`).
pub const ENV_PLATFORM: &str = "LOCMAP_PLATFORM";

/// Overrides the browser executable location.
pub const ENV_BROWSER_PATH: &str = "LOCMAP_BROWSER_PATH";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use locmap::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Empty variables are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if `LOCMAP_PLATFORM` names an unknown platform.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(web_root) = Self::non_empty_var(ENV_WEB_ROOT) {
            config.web_root = Some(web_root);
        }

        if let Some(platform) = Self::non_empty_var(ENV_PLATFORM) {
            config.platform = Some(Platform::parse(&platform)?);
        }

        if let Some(browser) = Self::non_empty_var(ENV_BROWSER_PATH) {
            config.browser_path = Some(browser);
        }

        Ok(())
    }

    fn non_empty_var(name: &str) -> Option<String> {
        env::var(name).ok().filter(|v| !v.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var(ENV_WEB_ROOT);
        env::remove_var(ENV_PLATFORM);
        env::remove_var(ENV_BROWSER_PATH);
    }

    #[test]
    #[serial]
    fn test_no_overrides() {
        clear_env();
        let mut config = Config {
            web_root: Some("from-file".to_string()),
            ..Default::default()
        };
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config.web_root.as_deref(), Some("from-file"));
        assert!(config.platform.is_none());
    }

    #[test]
    #[serial]
    fn test_overrides_applied() {
        clear_env();
        env::set_var(ENV_WEB_ROOT, "/srv/www");
        env::set_var(ENV_PLATFORM, "Windows");
        env::set_var(ENV_BROWSER_PATH, "/opt/chrome");

        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        clear_env();

        assert_eq!(config.web_root.as_deref(), Some("/srv/www"));
        assert_eq!(config.platform, Some(Platform::Windows));
        assert_eq!(config.browser_path.as_deref(), Some("/opt/chrome"));
    }

    #[test]
    #[serial]
    fn test_empty_values_ignored() {
        clear_env();
        env::set_var(ENV_WEB_ROOT, "  ");

        let mut config = Config {
            web_root: Some("kept".to_string()),
            ..Default::default()
        };
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        clear_env();

        assert_eq!(config.web_root.as_deref(), Some("kept"));
    }

    #[test]
    #[serial]
    fn test_invalid_platform_rejected() {
        clear_env();
        env::set_var(ENV_PLATFORM, "amiga");

        let mut config = Config::default();
        let result = EnvironmentConfig::apply_overrides(&mut config);
        clear_env();

        assert!(matches!(result, Err(Error::UnknownPlatform { .. })));
    }
}

//! Utility functions for CLI operations.
//!
//! Configuration loading and reconciler construction shared by the
//! commands.

use crate::error::CliError;
use locmap::{Config, ConfigBuilder, Platform, Reconciler};
use std::env;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,

    /// Platform override from `--platform`.
    pub platform: Option<Platform>,

    /// Web root override from `--web-root`.
    pub web_root: Option<String>,
}

impl GlobalOptions {
    /// The command-line flags as a configuration layer.
    fn as_overrides(&self) -> Config {
        Config {
            web_root: self.web_root.clone(),
            platform: self.platform,
            browser_path: None,
        }
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Project configuration files
/// 4. Built-in defaults (lowest priority)
///
/// A blank `--web-root` is rejected as an invalid argument before any
/// configuration is read.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    if global.web_root.as_deref().is_some_and(|root| root.trim().is_empty()) {
        return Err(CliError::InvalidArguments(
            "--web-root must not be empty".to_string(),
        ));
    }

    ConfigBuilder::new()
        .with_config(global.as_overrides())
        .build()
        .map_err(CliError::from)
}

/// The platform in effect: `--platform`, then configuration, then the host.
pub fn effective_platform(config: &Config) -> Platform {
    config.platform.unwrap_or_else(Platform::detect)
}

/// Build a reconciler from configuration and the working directory.
pub fn build_reconciler(global: &GlobalOptions) -> Result<Reconciler, CliError> {
    let config = load_configuration(global)?;
    let cwd = env::current_dir()?;
    Reconciler::from_config(&config, &cwd).map_err(CliError::from)
}

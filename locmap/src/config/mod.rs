//! Configuration system for locmap.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML project files (`locmap.yaml` and `locmap.local.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`LOCMAP_*`)
//! 3. Private project config (`locmap.local.yaml`)
//! 4. Project config (`locmap.yaml`)
//! 5. Built-in defaults
//!
//! Project files are discovered by walking up from the working directory,
//! stopping at the first directory that contains either file.
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use locmap::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use locmap::config::{Config, ConfigBuilder};
//! use locmap::Platform;
//!
//! let custom = Config {
//!     platform: Some(Platform::Windows),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.platform, Some(Platform::Windows));
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::Config;
pub use validator::ConfigValidator;

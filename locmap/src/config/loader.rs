//! Configuration file discovery and loading.
//!
//! Project configuration lives in `locmap.yaml`, with an optional
//! uncommitted `locmap.local.yaml` next to it that takes precedence.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the shared project configuration.
pub const PROJECT_CONFIG_FILE: &str = "locmap.yaml";

/// File name of the private, higher-precedence project configuration.
pub const LOCAL_CONFIG_FILE: &str = "locmap.local.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from project files.
///
/// # Examples
///
/// ```no_run
/// use locmap::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::discover_project_configs(Path::new(".")).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover project configurations by walking up from `start_dir`.
    ///
    /// Stops at the first directory containing either `locmap.yaml` or
    /// `locmap.local.yaml`. Results are sorted from lowest to highest
    /// precedence.
    ///
    /// # Errors
    ///
    /// Returns an error if any discovered file cannot be read or parsed.
    pub fn discover_project_configs(start_dir: &Path) -> Result<Vec<ConfigSource>> {
        let mut configs = Vec::new();
        let mut current = start_dir.to_path_buf();

        loop {
            let mut found_any = false;

            let project = current.join(PROJECT_CONFIG_FILE);
            if project.exists() {
                let config = Self::load_file(&project)?;
                configs.push(ConfigSource {
                    path: project,
                    precedence: 1,
                    config,
                });
                found_any = true;
            }

            let local = current.join(LOCAL_CONFIG_FILE);
            if local.exists() {
                let config = Self::load_file(&local)?;
                configs.push(ConfigSource {
                    path: local,
                    precedence: 2,
                    config,
                });
                found_any = true;
            }

            if found_any || !current.pop() {
                break;
            }
        }

        configs.sort_by_key(|s| s.precedence);
        Ok(configs)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load_file(Path::new("/nonexistent/path/locmap.yaml"));
        assert!(matches!(result, Err(Error::InvalidPath { .. })));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.yaml");
        fs::write(&config_path, "invalid: yaml: syntax:").unwrap();

        let result = ConfigLoader::load_file(&config_path);
        assert!(matches!(result, Err(Error::Validation { .. })));
    }

    #[test]
    fn test_load_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(PROJECT_CONFIG_FILE);
        fs::write(&config_path, "web_root: public\nplatform: linux\n").unwrap();

        let config = ConfigLoader::load_file(&config_path).unwrap();
        assert_eq!(config.web_root.as_deref(), Some("public"));
        assert_eq!(config.platform, Some(Platform::Linux));
    }

    #[test]
    fn test_discover_no_configs() {
        let temp_dir = TempDir::new().unwrap();
        let configs = ConfigLoader::discover_project_configs(temp_dir.path()).unwrap();
        assert!(configs.is_empty());
    }

    #[test]
    fn test_discover_both_files_sorted() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(LOCAL_CONFIG_FILE), "web_root: local\n").unwrap();
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILE), "web_root: shared\n").unwrap();

        let configs = ConfigLoader::discover_project_configs(temp_dir.path()).unwrap();
        assert_eq!(configs.len(), 2);
        assert_eq!(configs[0].config.web_root.as_deref(), Some("shared"));
        assert_eq!(configs[1].config.web_root.as_deref(), Some("local"));
        assert!(configs[0].precedence < configs[1].precedence);
    }

    #[test]
    fn test_discover_stops_at_first_config() {
        let temp_dir = TempDir::new().unwrap();
        let child = temp_dir.path().join("child");
        fs::create_dir(&child).unwrap();

        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILE), "web_root: parent\n").unwrap();

        let configs = ConfigLoader::discover_project_configs(&child).unwrap();
        assert_eq!(configs.len(), 1);
        assert_eq!(configs[0].config.web_root.as_deref(), Some("parent"));
        assert_eq!(configs[0].path, temp_dir.path().join(PROJECT_CONFIG_FILE));
    }
}

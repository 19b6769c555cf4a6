//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates merged configuration.
///
/// # Examples
///
/// ```
/// use locmap::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let blank = Config { web_root: Some("  ".to_string()), ..Default::default() };
/// assert!(ConfigValidator::validate(&blank).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a string field is present but blank, or
    /// if the web root uses unsupported `~user` syntax.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref web_root) = config.web_root {
            Self::validate_non_blank("web_root", web_root)?;
            if web_root.starts_with('~')
                && web_root != "~"
                && !web_root.starts_with("~/")
                && !web_root.starts_with("~\\")
            {
                return Err(Error::Validation {
                    field: "web_root".into(),
                    message: "~user syntax is not supported; use ~ or ~/path".into(),
                });
            }
        }

        if let Some(ref browser) = config.browser_path {
            Self::validate_non_blank("browser_path", browser)?;
        }

        Ok(())
    }

    fn validate_non_blank(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "must not be blank".into(),
            });
        }
        Ok(())
    }
}

//! Error types for the locmap library.
//!
//! The locator core never fails: an unresolvable locator is an empty string
//! or `false`. Errors exist only for the ambient layers around it, such as
//! configuration loading and validation, using `thiserror`.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a locmap error.
///
/// # Examples
///
/// ```
/// use locmap::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/srv/www".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the locmap library.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A platform name was not recognized.
    #[error("unknown platform '{name}' (expected windows, osx or linux)")]
    UnknownPlatform {
        /// The name that failed to parse.
        name: String,
    },
}

impl Error {
    /// Check if the error came from configuration parsing or validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use locmap::Error;
    ///
    /// let err = Error::Validation {
    ///     field: "web_root".to_string(),
    ///     message: "must not be blank".to_string(),
    /// };
    /// assert!(err.is_configuration());
    /// ```
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Configuration(_) | Self::Validation { .. } | Self::UnknownPlatform { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_path_error() {
        let err = Error::InvalidPath {
            path: PathBuf::from("/invalid/path"),
            reason: "does not exist".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid path"));
        let normalized = display.replace(std::path::MAIN_SEPARATOR, "/");
        assert!(normalized.contains("/invalid/path"));
        assert!(display.contains("does not exist"));
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "web_root".to_string(),
            message: "must not be blank".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("web_root"));
        assert!(display.contains("must not be blank"));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_unknown_platform_error() {
        let err = Error::UnknownPlatform {
            name: "plan9".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("plan9"));
        assert!(display.contains("expected windows, osx or linux"));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_err = serde_yaml::from_str::<u32>("not: [a number").unwrap_err();
        let err: Error = yaml_err.into();
        assert!(format!("{err}").contains("configuration error"));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        let display = format!("{err}");
        assert!(display.contains("I/O error"));
        assert!(!err.is_configuration());
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<String> {
            Err(Error::UnknownPlatform {
                name: "beos".to_string(),
            })
        }

        assert!(returns_result().is_err());
    }
}

//! Host platform detection.
//!
//! Every string algorithm in this crate takes a [`Platform`] argument instead
//! of consulting the host directly, so Windows behavior can be exercised on
//! any machine. Callers detect the platform once and pass it along.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Operating system family that determines separator and drive-letter rules.
///
/// # Examples
///
/// ```
/// use locmap::Platform;
///
/// assert_eq!(Platform::from_identifier("win32"), Platform::Windows);
/// assert_eq!(Platform::from_identifier("darwin"), Platform::Osx);
/// assert_eq!(Platform::from_identifier("freebsd"), Platform::Linux);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Microsoft Windows: `\` separators and drive letters.
    Windows,
    /// macOS.
    Osx,
    /// Linux and every unrecognized system.
    Linux,
}

impl Platform {
    /// Map a host OS identifier to a platform.
    ///
    /// Both Node-style (`win32`, `darwin`) and Rust-style (`windows`, `macos`)
    /// identifiers are recognized. Anything else is [`Platform::Linux`].
    #[must_use]
    pub fn from_identifier(identifier: &str) -> Self {
        match identifier.trim().to_ascii_lowercase().as_str() {
            "win32" | "windows" => Self::Windows,
            "darwin" | "macos" => Self::Osx,
            _ => Self::Linux,
        }
    }

    /// Detect the platform of the running process.
    ///
    /// This reads `std::env::consts::OS`; callers should compute it once and
    /// keep the value rather than calling this repeatedly.
    #[must_use]
    pub fn detect() -> Self {
        Self::from_identifier(std::env::consts::OS)
    }

    /// Strictly parse a platform name as written in configuration.
    ///
    /// Unlike [`Platform::from_identifier`], unknown names are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownPlatform`] if the name is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use locmap::Platform;
    ///
    /// assert_eq!(Platform::parse("OSX").unwrap(), Platform::Osx);
    /// assert!(Platform::parse("freebsd").is_err());
    /// ```
    pub fn parse(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "windows" | "win32" => Ok(Self::Windows),
            "osx" | "macos" | "darwin" => Ok(Self::Osx),
            "linux" => Ok(Self::Linux),
            _ => Err(Error::UnknownPlatform {
                name: name.to_string(),
            }),
        }
    }

    /// The native path separator.
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            Self::Windows => '\\',
            Self::Osx | Self::Linux => '/',
        }
    }

    /// Whether `c` separates path components on this platform.
    ///
    /// Windows accepts both slashes; POSIX systems only accept `/`.
    #[must_use]
    pub const fn is_separator(self, c: char) -> bool {
        match self {
            Self::Windows => c == '\\' || c == '/',
            Self::Osx | Self::Linux => c == '/',
        }
    }

    /// Whether paths on this platform may start with a drive letter.
    #[must_use]
    pub const fn has_drive_letters(self) -> bool {
        matches!(self, Self::Windows)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => write!(f, "windows"),
            Self::Osx => write!(f, "osx"),
            Self::Linux => write!(f, "linux"),
        }
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

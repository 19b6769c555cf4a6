#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # locmap
//!
//! Reconciles the script locators a debug target reports (`http://`,
//! `webpack:///`, `file:///` URLs) with paths on the local disk.
//!
//! ## Core Operations
//!
//! - [`is_url`] and [`classify`]: tell URLs apart from local paths, including
//!   Windows drive paths such as `c:/code.js`
//! - [`canonicalize_url`]: map equivalent locators to one comparable string
//! - [`fix_drive_letter_and_slashes`]: normalize a path while keeping any
//!   `file:///` prefix
//! - [`get_web_root`]: resolve a configured web root against a directory
//! - [`ClientPathResolver`]: map a remote URL to an existing file beneath the
//!   web root
//! - [`Reconciler`]: all of the above bundled with a [`Config`]
//!
//! Every path algorithm takes an explicit [`Platform`], so Windows rules can
//! be applied (and tested) on any host.
//!
//! ## Examples
//!
//! ```
//! use locmap::{canonicalize_url, is_url, Platform};
//!
//! assert!(is_url("http://localhost:8080/app.js"));
//! assert!(!is_url("c:/project/app.js"));
//!
//! assert_eq!(
//!     canonicalize_url("file:///C:/project/app.js", Platform::Windows),
//!     "c:\\project\\app.js"
//! );
//! ```

pub mod browser;
pub mod config;
pub mod error;
pub mod fs;
pub mod locator;
pub mod logging;
pub mod platform;
pub mod reconciler;
pub mod resolve;
pub mod web_root;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use fs::{ExistenceChecker, MockExistenceChecker, SystemExistenceChecker};
pub use locator::{canonicalize_url, classify, fix_drive_letter_and_slashes, is_url, SchemeKind};
pub use logging::{init_logger, LogLevel, Logger};
pub use platform::Platform;
pub use reconciler::Reconciler;
pub use resolve::ClientPathResolver;
pub use web_root::get_web_root;

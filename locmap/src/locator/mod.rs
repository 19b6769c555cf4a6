//! Locator classification and canonicalization.
//!
//! A *locator* is any string a debug target uses to name a script: a
//! `file:///` URL, a network or bundler URL (`http://`, `webpack:///`), or a
//! bare local path.
//!
//! # Classification
//!
//! [`classify`] inspects the scheme of a locator and reports one of
//! [`SchemeKind::Recognized`], [`SchemeKind::DriveLetter`] or
//! [`SchemeKind::Neither`]. Only the first counts as a URL, so
//! `c:/project/code.js` is a path even though a URL parser accepts it.
//!
//! # Canonicalization
//!
//! [`canonicalize_url`] maps equivalent locators to the same string:
//!
//! ```
//! use locmap::locator::canonicalize_url;
//! use locmap::Platform;
//!
//! let a = canonicalize_url("file:///C:/proj/app.js", Platform::Windows);
//! let b = canonicalize_url("c:\\proj\\app.js", Platform::Windows);
//! assert_eq!(a, b);
//! ```
//!
//! [`fix_drive_letter_and_slashes`] is the narrower variant that keeps a
//! `file:///` prefix in place.

pub mod canonicalize;
pub mod drive;
pub mod scheme;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use canonicalize::{
    canonicalize_url, file_url_to_path, path_to_file_url, strip_trailing_slash, FILE_URL_PREFIX,
};
pub use drive::{fix_drive_letter, fix_drive_letter_and_slashes};
pub use scheme::{classify, is_url, SchemeKind};

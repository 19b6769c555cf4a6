//! CLI command implementations.
//!
//! - `canonicalize`: print canonical forms of locators
//! - `is_url`: report whether a locator is a URL
//! - `classify`: show scheme classification
//! - `fix_drive`: fix drive letter case and separators
//! - `web_root`: print the resolved web root
//! - `resolve`: map a script URL to a local file
//! - `browser_path`: locate the browser executable
//! - `completions`: generate shell completion scripts

pub mod browser_path;
pub mod canonicalize;
pub mod classify;
pub mod completions;
pub mod fix_drive;
pub mod is_url;
pub mod resolve;
pub mod web_root;

pub use browser_path::BrowserPathCommand;
pub use canonicalize::CanonicalizeCommand;
pub use classify::ClassifyCommand;
pub use completions::CompletionsCommand;
pub use fix_drive::FixDriveCommand;
pub use is_url::IsUrlCommand;
pub use resolve::ResolveCommand;
pub use web_root::WebRootCommand;

//! Library exports for locmap-cli.
//!
//! The binary is a thin wrapper over these modules, which also lets the
//! command structure be inspected by tooling (completions, man pages).

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;

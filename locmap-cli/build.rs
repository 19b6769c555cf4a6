//! Build script for locmap-cli.
//!
//! Generates the man page at build time using clap_mangen and places it in
//! OUT_DIR for inclusion in release builds.
//!
//! The command structure is declared here rather than imported, since build
//! scripts cannot depend on the crate being built. Keep it in step with
//! src/cli.rs.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

fn build_cli() -> Command {
    Command::new("locmap")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reconcile debugger script URLs with local paths")
        .long_about(
            "Classify, canonicalize and resolve the script locators reported by a \
             debug target against a local web root",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("platform")
                .long("platform")
                .help("Apply the path rules of this platform (windows, osx, linux)")
                .value_name("PLATFORM")
                .global(true),
        )
        .arg(
            Arg::new("web-root")
                .long("web-root")
                .help("Override the configured web root")
                .value_name("PATH")
                .global(true),
        )
        .subcommands(vec![
            Command::new("canonicalize")
                .about("Print the canonical form of each locator")
                .long_about("Map equivalent URLs and paths to one comparable string"),
            Command::new("is-url")
                .about("Report whether a locator is a URL")
                .long_about("Print true for URLs and false for local paths, including drive paths"),
            Command::new("classify")
                .about("Show how a locator's scheme is classified")
                .long_about("Report a recognized URL scheme, a drive letter, or neither"),
            Command::new("fix-drive")
                .about("Lowercase drive letters and normalize separators")
                .long_about("Fix drive letter case and slashes, keeping any file:/// prefix"),
            Command::new("web-root")
                .about("Print the resolved web root")
                .long_about("Resolve the configured web root against the working directory"),
            Command::new("resolve")
                .about("Map a script URL to a local file")
                .long_about(
                    "Probe progressively shorter URL path suffixes beneath the web root \
                     and print the first that exists",
                ),
            Command::new("browser-path")
                .about("Print the browser executable location")
                .long_about("Print the configured browser or the first known install location found"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> io::Result<()> {
    let out_dir = env::var("OUT_DIR").map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    let man_dir = PathBuf::from(out_dir).join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("locmap.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}

//! Command to show how a locator's scheme is classified.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use locmap::{classify, SchemeKind};
use serde::Serialize;

/// Show whether a locator carries a URL scheme, a drive letter, or neither.
#[derive(Args)]
pub struct ClassifyCommand {
    /// URL or path to classify
    #[arg(value_name = "LOCATOR")]
    pub locator: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct Classification<'a> {
    locator: &'a str,
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    scheme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    drive: Option<char>,
    is_url: bool,
}

impl<'a> Classification<'a> {
    fn new(locator: &'a str, kind: &SchemeKind) -> Self {
        let (name, scheme, drive) = match kind {
            SchemeKind::Recognized(scheme) => ("url", Some(scheme.clone()), None),
            SchemeKind::DriveLetter(letter) => ("drive-letter", None, Some(*letter)),
            SchemeKind::Neither => ("path", None, None),
        };
        Self {
            locator,
            kind: name,
            scheme,
            drive,
            is_url: kind.is_url(),
        }
    }
}

impl ClassifyCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let kind = classify(&self.locator);
        let classification = Classification::new(&self.locator, &kind);

        if self.json {
            let json = serde_json::to_string_pretty(&classification)?;
            println!("{json}");
            return Ok(());
        }

        match (classification.scheme, classification.drive) {
            (Some(scheme), _) => println!("{}\t{scheme}", classification.kind),
            (None, Some(drive)) => println!("{}\t{drive}", classification.kind),
            (None, None) => println!("{}", classification.kind),
        }
        Ok(())
    }
}

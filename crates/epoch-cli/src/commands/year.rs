use anyhow::Context;
use epoch_core::{format_year, parse_year};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::YearCommands;

#[derive(Debug, Serialize)]
struct YearResponse {
    year: i64,
    label: String,
    era: &'static str,
}

impl YearResponse {
    fn new(year: i64) -> Self {
        Self {
            year,
            label: format_year(year),
            era: if year < 0 { "BCE" } else { "CE" },
        }
    }
}

/// Handle `epoch year`.
pub fn handle(action: &YearCommands, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = match action {
        YearCommands::Format { year } => YearResponse::new(*year),
        YearCommands::Parse { label } => {
            YearResponse::new(parse_year(label).with_context(|| format!("cannot parse '{label}'"))?)
        }
    };
    crate::output::output(&response, flags.format)
}

use epoch_config::EpochConfig;
use epoch_map::{FormFields, MemoryFields, RangeCheck, RangeValidator, YearField};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{EditedField, RangeCheckArgs, RangeCommands};

#[derive(Debug, Serialize)]
struct RangeCheckResponse {
    check: RangeCheck,
    start: String,
    end: String,
    alerts: Vec<String>,
}

/// Handle `epoch range`.
pub fn handle(
    action: &RangeCommands,
    config: &EpochConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        RangeCommands::Check(args) => {
            let response = check(args, &RangeValidator::from(&config.years));
            crate::output::output(&response, flags.format)
        }
    }
}

fn check(args: &RangeCheckArgs, validator: &RangeValidator) -> RangeCheckResponse {
    let mut fields = MemoryFields::new(args.start.as_str(), args.end.as_str());
    let field = match args.edited {
        EditedField::Start => YearField::Start,
        EditedField::End => YearField::End,
    };
    let check = validator.on_change(&mut fields, field);

    RangeCheckResponse {
        check,
        start: fields.get(YearField::Start),
        end: fields.get(YearField::End),
        alerts: fields.alerts().to_vec(),
    }
}

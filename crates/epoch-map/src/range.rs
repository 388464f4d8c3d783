//! Keeps `startYear <= endYear` when the user edits either field.
//!
//! Validation is reactive: it runs on a field-change event, and an invalid
//! edit is reverted to the field's default label after alerting the user.
//! Nothing re-checks the pair at click time.

use epoch_config::YearsConfig;
use epoch_core::parse_year;
use serde::Serialize;

use crate::surface::{FormFields, YearField};

pub const START_AFTER_END: &str = "Start year cannot be later than end year";
pub const END_BEFORE_START: &str = "End year cannot be earlier than start year";

/// What a field-change check did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "result", content = "field", rename_all = "snake_case")]
pub enum RangeCheck {
    Accepted,
    /// The edit put the bounds out of order; the field was reset.
    OutOfOrder(YearField),
    /// The edited label does not parse; the field was reset.
    InvalidFormat(YearField),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeValidator {
    default_start: String,
    default_end: String,
}

impl Default for RangeValidator {
    fn default() -> Self {
        Self::from(&YearsConfig::default())
    }
}

impl From<&YearsConfig> for RangeValidator {
    fn from(config: &YearsConfig) -> Self {
        Self {
            default_start: config.default_start.clone(),
            default_end: config.default_end.clone(),
        }
    }
}

impl RangeValidator {
    /// Label a field is reset to after an invalid edit.
    #[must_use]
    pub fn default_label(&self, field: YearField) -> &str {
        match field {
            YearField::Start => &self.default_start,
            YearField::End => &self.default_end,
        }
    }

    /// Handle a change event on `field`.
    pub fn on_change<F: FormFields>(&self, fields: &mut F, field: YearField) -> RangeCheck {
        let edited = match parse_year(&fields.get(field)) {
            Ok(year) => year,
            Err(err) => {
                let outcome = RangeCheck::InvalidFormat(field);
                return self.revert(fields, field, &err.to_string(), outcome);
            }
        };

        // With the other bound unreadable there is nothing to compare against.
        let Ok(other) = parse_year(&fields.get(field.other())) else {
            tracing::debug!(field = field.element_id(), "other year field unreadable");
            return RangeCheck::Accepted;
        };

        match field {
            YearField::Start if edited > other => {
                self.revert(fields, field, START_AFTER_END, RangeCheck::OutOfOrder(field))
            }
            YearField::End if edited < other => {
                self.revert(fields, field, END_BEFORE_START, RangeCheck::OutOfOrder(field))
            }
            _ => RangeCheck::Accepted,
        }
    }

    pub fn on_start_change<F: FormFields>(&self, fields: &mut F) -> RangeCheck {
        self.on_change(fields, YearField::Start)
    }

    pub fn on_end_change<F: FormFields>(&self, fields: &mut F) -> RangeCheck {
        self.on_change(fields, YearField::End)
    }

    fn revert<F: FormFields>(
        &self,
        fields: &mut F,
        field: YearField,
        message: &str,
        outcome: RangeCheck,
    ) -> RangeCheck {
        tracing::debug!(field = field.element_id(), message, "reverting year field");
        fields.alert(message);
        fields.set(field, self.default_label(field));
        outcome
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::memory::MemoryFields;

    #[rstest]
    #[case("500 CE", "100 CE")]
    #[case("1 CE", "1 BCE")]
    #[case("2024 CE", "3000 BCE")]
    fn start_later_than_end_resets_start(#[case] start: &str, #[case] end: &str) {
        let validator = RangeValidator::default();
        let mut fields = MemoryFields::new(start, end);

        let check = validator.on_start_change(&mut fields);

        assert_eq!(check, RangeCheck::OutOfOrder(YearField::Start));
        assert_eq!(fields.alerts(), &[START_AFTER_END.to_string()]);
        assert_eq!(fields.get(YearField::Start), "3000 BCE");
        assert_eq!(fields.get(YearField::End), end);
    }

    #[rstest]
    #[case("100 CE", "50 CE")]
    #[case("44 BCE", "100 BCE")]
    fn end_earlier_than_start_resets_end(#[case] start: &str, #[case] end: &str) {
        let validator = RangeValidator::default();
        let mut fields = MemoryFields::new(start, end);

        let check = validator.on_end_change(&mut fields);

        assert_eq!(check, RangeCheck::OutOfOrder(YearField::End));
        assert_eq!(fields.alerts(), &[END_BEFORE_START.to_string()]);
        assert_eq!(fields.get(YearField::End), "2024 CE");
        assert_eq!(fields.get(YearField::Start), start);
    }

    #[rstest]
    #[case("100 BCE", "100 BCE")]
    #[case("3000 BCE", "2024 CE")]
    #[case("0 CE", "0 BCE")]
    fn ordered_bounds_are_accepted_from_either_side(#[case] start: &str, #[case] end: &str) {
        let validator = RangeValidator::default();
        let mut fields = MemoryFields::new(start, end);

        assert_eq!(validator.on_start_change(&mut fields), RangeCheck::Accepted);
        assert_eq!(validator.on_end_change(&mut fields), RangeCheck::Accepted);
        assert!(fields.alerts().is_empty());
        assert_eq!(fields.get(YearField::Start), start);
    }

    #[test]
    fn unparseable_edit_alerts_and_resets() {
        let validator = RangeValidator::default();
        let mut fields = MemoryFields::new("3000 BCE", "yesterday");

        let check = validator.on_end_change(&mut fields);

        assert_eq!(check, RangeCheck::InvalidFormat(YearField::End));
        assert_eq!(fields.alerts(), &["Invalid year format: yesterday".to_string()]);
        assert_eq!(fields.get(YearField::End), "2024 CE");
    }

    #[test]
    fn unreadable_other_field_accepts_edit() {
        let validator = RangeValidator::default();
        let mut fields = MemoryFields::new("500 CE", "");

        assert_eq!(validator.on_start_change(&mut fields), RangeCheck::Accepted);
        assert_eq!(fields.get(YearField::Start), "500 CE");
    }

    #[test]
    fn defaults_follow_config() {
        let validator = RangeValidator::from(&YearsConfig {
            default_start: "753 BCE".into(),
            default_end: "476 CE".into(),
        });
        let mut fields = MemoryFields::new("600 CE", "500 CE");

        validator.on_start_change(&mut fields);
        assert_eq!(fields.get(YearField::Start), "753 BCE");
    }
}

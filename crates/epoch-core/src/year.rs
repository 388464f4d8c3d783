//! Year labels.
//!
//! Years are signed integers internally: negative values are BCE, zero and
//! positive values are CE. Labels are the human-readable form shown in the
//! year fields and sent to the backend as-is (`"3000 BCE"`, `"2024 CE"`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

const BCE: &str = "BCE";
const CE: &str = "CE";

/// Format a signed year as a label.
///
/// Total: every `i64` has a label, including `i64::MIN`.
#[must_use]
pub fn format_year(year: i64) -> String {
    if year < 0 {
        format!("{} {BCE}", year.unsigned_abs())
    } else {
        format!("{year} {CE}")
    }
}

/// Parse a year label into a signed year.
///
/// A label containing `BCE` is negated; otherwise a `CE` suffix (if any) is
/// stripped and the number is taken as-is. The text left after stripping
/// must be ASCII digits, surrounding whitespace aside.
///
/// # Errors
///
/// Returns [`CoreError::InvalidYearFormat`] for empty, signed, non-numeric,
/// or out-of-range labels.
pub fn parse_year(label: &str) -> Result<i64, CoreError> {
    let invalid = || CoreError::InvalidYearFormat {
        label: label.to_string(),
    };

    if label.contains(BCE) {
        let magnitude = parse_magnitude(&label.replacen(BCE, "", 1)).ok_or_else(invalid)?;
        0i64.checked_sub_unsigned(magnitude).ok_or_else(invalid)
    } else {
        let magnitude = parse_magnitude(&label.replacen(CE, "", 1)).ok_or_else(invalid)?;
        i64::try_from(magnitude).map_err(|_| invalid())
    }
}

fn parse_magnitude(text: &str) -> Option<u64> {
    let digits = text.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// A signed year whose `Display` / `FromStr` use the label form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Year(pub i64);

impl Year {
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    #[must_use]
    pub const fn is_bce(self) -> bool {
        self.0 < 0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_year(self.0))
    }
}

impl FromStr for Year {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_year(s).map(Self)
    }
}

impl From<i64> for Year {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

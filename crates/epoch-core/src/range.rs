//! Time ranges.

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::CoreError;
use crate::year::{Year, parse_year};

/// An inclusive `[start, end]` span of years with `start <= end`.
///
/// The widget enforces the ordering reactively when a field is edited; this
/// type is the checked form used wherever both bounds are known together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeRange {
    start: Year,
    end: Year,
}

impl TimeRange {
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidRange`] when `start` is later than `end`.
    pub fn new(start: i64, end: i64) -> Result<Self, CoreError> {
        if start > end {
            return Err(CoreError::InvalidRange { start, end });
        }
        Ok(Self {
            start: Year(start),
            end: Year(end),
        })
    }

    /// Build a range from two year labels.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidYearFormat`] if either label does not
    /// parse, or [`CoreError::InvalidRange`] if the bounds are out of order.
    pub fn from_labels(start: &str, end: &str) -> Result<Self, CoreError> {
        Self::new(parse_year(start)?, parse_year(end)?)
    }

    #[must_use]
    pub const fn start(&self) -> Year {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> Year {
        self.end
    }

    #[must_use]
    pub const fn contains(&self, year: i64) -> bool {
        self.start.0 <= year && year <= self.end.0
    }
}

impl<'de> Deserialize<'de> for TimeRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Bounds {
            start: Year,
            end: Year,
        }

        let bounds = Bounds::deserialize(deserializer)?;
        Self::new(bounds.start.value(), bounds.end.value()).map_err(serde::de::Error::custom)
    }
}

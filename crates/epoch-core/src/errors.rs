//! Cross-cutting error types for Epoch.
//!
//! Transport and configuration errors live in their own crates
//! (`ClientError`, `ConfigError`). The CLI converges everything through
//! `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Epoch crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A year label is not `"<digits> BCE"` or `"<digits> CE"`.
    #[error("Invalid year format: {label}")]
    InvalidYearFormat { label: String },

    /// A time range whose start is later than its end.
    #[error("Invalid time range: start {start} is later than end {end}")]
    InvalidRange { start: i64, end: i64 },
}

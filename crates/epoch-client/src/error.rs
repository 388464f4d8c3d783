//! Client error types.

use thiserror::Error;

/// Errors that can occur when fetching articles from the backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error (connection refused, timeout, TLS, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Response body, if any.
        message: String,
    },

    /// Response body is not a JSON array of articles.
    #[error("parse error: {0}")]
    Parse(String),

    /// The backend returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds the backend asked us to wait.
        retry_after_secs: u64,
    },
}

impl ClientError {
    /// HTTP status behind this error, when the backend answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::RateLimited { .. } => Some(429),
            Self::Http(_) | Self::Parse(_) => None,
        }
    }
}

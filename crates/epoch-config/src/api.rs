//! Article backend endpoint configuration.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    String::from("http://127.0.0.1:5000")
}

fn default_articles_path() -> String {
    String::from("/api/articles")
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    String::from("epoch/0.1")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Scheme, host and port of the backend serving articles.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_articles_path")]
    pub articles_path: String,

    /// Per-request timeout. Zero is rejected by validation.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            articles_path: default_articles_path(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// Full endpoint URL without a query string.
    #[must_use]
    pub fn articles_endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.articles_path.trim_start_matches('/')
        )
    }
}

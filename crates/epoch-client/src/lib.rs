//! # epoch-client
//!
//! HTTP client for the article endpoint the map widget queries on every
//! click:
//!
//! ```text
//! GET {base_url}/api/articles?lat=..&lng=..&startYear=<label>&endYear=<label>
//! ```
//!
//! Year bounds travel as their labels (`"100 BCE"`), URL-encoded, and the
//! backend decodes them. The response is a JSON array of articles; `[]` is a
//! valid answer.
//!
//! [`ArticleSource`] is the seam the widget depends on. [`ArticleClient`]
//! implements it over `reqwest`; tests supply their own sources.

mod error;
mod http;

pub use error::ClientError;

use std::future::Future;
use std::time::Duration;

use epoch_config::ApiConfig;
use epoch_core::{Article, GeoPoint};

use crate::http::check_response;

/// One article lookup: the clicked point plus the raw year labels.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleQuery {
    pub point: GeoPoint,
    pub start_label: String,
    pub end_label: String,
}

impl ArticleQuery {
    #[must_use]
    pub fn new(point: GeoPoint, start_label: impl Into<String>, end_label: impl Into<String>) -> Self {
        Self {
            point,
            start_label: start_label.into(),
            end_label: end_label.into(),
        }
    }

    /// Query string without the leading `?`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        format!(
            "lat={}&lng={}&startYear={}&endYear={}",
            self.point.lat,
            self.point.lng,
            urlencoding::encode(&self.start_label),
            urlencoding::encode(&self.end_label),
        )
    }
}

/// Anything that can answer an article query.
pub trait ArticleSource {
    /// Fetch the articles near `query.point` for the labelled year window.
    fn fetch(
        &self,
        query: &ArticleQuery,
    ) -> impl Future<Output = Result<Vec<Article>, ClientError>> + Send;
}

/// `reqwest`-backed client for the article endpoint.
#[derive(Debug, Clone)]
pub struct ArticleClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ArticleClient {
    /// Build a client from the `[api]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be built (e.g. TLS backend initialization fails).
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            endpoint: config.articles_endpoint(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Full request URL for `query`.
    #[must_use]
    pub fn articles_url(&self, query: &ArticleQuery) -> String {
        format!("{}?{}", self.endpoint, query.to_query_string())
    }

    /// Issue one GET and decode the article list.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the backend answers
    /// with a non-success status, or the body is not an article array.
    pub async fn fetch_articles(&self, query: &ArticleQuery) -> Result<Vec<Article>, ClientError> {
        let url = self.articles_url(query);
        tracing::debug!(%url, "requesting articles");

        let resp = check_response(self.http.get(&url).send().await?).await?;
        let body = resp.text().await?;
        let articles: Vec<Article> =
            serde_json::from_str(&body).map_err(|e| ClientError::Parse(e.to_string()))?;

        tracing::debug!(count = articles.len(), "articles received");
        Ok(articles)
    }
}

impl ArticleSource for ArticleClient {
    async fn fetch(&self, query: &ArticleQuery) -> Result<Vec<Article>, ClientError> {
        self.fetch_articles(query).await
    }
}

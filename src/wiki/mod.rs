//! Wikipedia HTTP client: REST page summaries and the legacy parse API.

mod helpers;
mod lang;
pub mod types;

pub use lang::Language;

use std::time::Duration;

use helpers::{parse_url, site_base, summary_url};
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use types::{ParseResponse, SummaryResponse};

pub const DEFAULT_BASE_URL: &str = "https://{lang}.wikipedia.org";

#[derive(Debug, thiserror::Error)]
pub enum WikiError {
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP status {0}")]
    Status(StatusCode),

    #[error("invalid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{info}")]
    Api { code: String, info: String },

    #[error("missing field `{0}` in response")]
    MissingField(&'static str),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl WikiError {
    /// The response arrived but its body could not be interpreted.
    pub fn is_parse_failure(&self) -> bool {
        matches!(self, WikiError::Decode(_) | WikiError::MissingField(_))
    }
}

/// Source of page content for a search.
/// Implemented by `WikiClient` for production; mock implementations used in tests.
pub trait ArticleSource {
    /// The page summary `extract`, or `None` when the page has none.
    async fn summary(&self, topic: &str, language: Language) -> Result<Option<String>, WikiError>;

    /// Rendered HTML of the whole page.
    async fn article_html(&self, topic: &str, language: Language) -> Result<String, WikiError>;
}

/// Build the shared HTTP client. Without a timeout, reqwest waits indefinitely.
pub fn http_client(timeout: Option<Duration>) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

/// Client for one Wikipedia deployment; the language picks the edition.
///
/// `base_url` is a template whose `{lang}` placeholder is replaced by the
/// language code, e.g. `https://{lang}.wikipedia.org`.
#[derive(Clone)]
pub struct WikiClient {
    http: Client,
    base_url: String,
}

impl WikiClient {
    pub fn with_base_url(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.to_string(),
        }
    }

    async fn get_text(&self, url: &str) -> Result<String, WikiError> {
        let response = self
            .http
            .get(url)
            .header("User-Agent", crate::USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, url, "Wikipedia request failed");
            return Err(WikiError::Status(status));
        }

        Ok(response.text().await?)
    }
}

impl ArticleSource for WikiClient {
    async fn summary(&self, topic: &str, language: Language) -> Result<Option<String>, WikiError> {
        let base = site_base(&self.base_url, language);
        let url = summary_url(&base, topic);

        let body = self.get_text(&url).await?;
        let summary: SummaryResponse = serde_json::from_str(&body)?;

        debug!(
            title = summary.title.as_deref().unwrap_or(topic),
            has_extract = summary.extract.is_some(),
            "summary fetched"
        );
        Ok(summary.extract)
    }

    async fn article_html(&self, topic: &str, language: Language) -> Result<String, WikiError> {
        let base = site_base(&self.base_url, language);
        let url = parse_url(&base, topic)?;

        let body = self.get_text(url.as_str()).await?;
        let parsed: ParseResponse = serde_json::from_str(&body)?;

        if let Some(err) = parsed.error {
            let code = err.code.unwrap_or_default();
            warn!(%code, "parse API returned an error");
            return Err(WikiError::Api {
                code,
                info: err.info.unwrap_or_else(|| "Unknown error".to_string()),
            });
        }

        let page = parsed.parse.ok_or(WikiError::MissingField("parse"))?;
        let html = page.text.ok_or(WikiError::MissingField("parse.text"))?;
        debug!(
            title = page.title.as_deref().unwrap_or(topic),
            bytes = html.len(),
            "article fetched"
        );
        Ok(html)
    }
}

use tracing::{debug, info};

use super::errors::{article_error_text, summary_error_text};
use super::{Mode, Outcome, Query};
use crate::extract::extract_text;
use crate::labels::{NO_SUMMARY, Status};
use crate::wiki::{ArticleSource, Language};

/// Run one search. Every failure ends up as text in the outcome.
pub async fn run(source: &impl ArticleSource, query: &Query) -> Outcome {
    info!(
        topic = query.topic(),
        lang = query.language.code(),
        mode = ?query.mode,
        "search"
    );

    let outcome = match query.mode {
        Mode::Summary => fetch_summary(source, query.topic(), query.language).await,
        Mode::Full => fetch_full_article(source, query.topic(), query.language).await,
    };

    debug!(status = ?outcome.status, chars = outcome.text.len(), "search complete");
    outcome
}

pub async fn fetch_summary(source: &impl ArticleSource, topic: &str, language: Language) -> Outcome {
    match source.summary(topic, language).await {
        Ok(extract) => Outcome {
            text: extract.unwrap_or_else(|| NO_SUMMARY.to_string()),
            status: Status::SummaryRetrieved,
        },
        Err(e) => Outcome::failed(summary_error_text(&e)),
    }
}

pub async fn fetch_full_article(
    source: &impl ArticleSource,
    topic: &str,
    language: Language,
) -> Outcome {
    match source.article_html(topic, language).await {
        Ok(html) => Outcome {
            text: extract_text(&html),
            status: Status::FullArticleRetrieved,
        },
        Err(e) => Outcome::failed(article_error_text(&e)),
    }
}

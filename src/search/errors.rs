use tracing::warn;

use crate::wiki::WikiError;

pub(super) fn summary_error_text(e: &WikiError) -> String {
    warn!(error = %e, "summary fetch failed");
    format!("Error fetching summary: {e}")
}

pub(super) fn article_error_text(e: &WikiError) -> String {
    match e {
        WikiError::Api { code, info } => {
            warn!(%code, "article lookup rejected by the API");
            format!("Error: {info}")
        }
        e if e.is_parse_failure() => {
            warn!(error = %e, "article response could not be parsed");
            format!("Error parsing response: {e}")
        }
        e => {
            warn!(error = %e, "article fetch failed");
            format!("Error fetching article: {e}")
        }
    }
}

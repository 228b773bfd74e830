use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

use super::Language;

/// Characters left as-is in a page title path segment (RFC 3986 unreserved).
/// `/` is encoded so titles like `AC/DC` stay a single segment.
const TITLE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

pub(super) fn encode_title(topic: &str) -> String {
    utf8_percent_encode(topic, TITLE_ENCODE_SET).to_string()
}

/// Expand a base URL template such as `https://{lang}.wikipedia.org`.
pub(super) fn site_base(template: &str, language: Language) -> String {
    template
        .replace("{lang}", language.code())
        .trim_end_matches('/')
        .to_string()
}

pub(super) fn summary_url(base: &str, topic: &str) -> String {
    format!("{base}/api/rest_v1/page/summary/{}", encode_title(topic))
}

pub(super) fn parse_url(base: &str, topic: &str) -> Result<Url, url::ParseError> {
    Url::parse_with_params(
        &format!("{base}/w/api.php"),
        [
            ("action", "parse"),
            ("page", topic),
            ("format", "json"),
            ("prop", "text"),
            ("formatversion", "2"),
        ],
    )
}

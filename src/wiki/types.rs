use serde::Deserialize;

/// Body of `/api/rest_v1/page/summary/{title}`; only the fields we show.
#[derive(Debug, Deserialize)]
pub struct SummaryResponse {
    pub title: Option<String>,
    pub extract: Option<String>,
}

/// Body of `/w/api.php?action=parse&formatversion=2`.
#[derive(Debug, Deserialize)]
pub struct ParseResponse {
    pub parse: Option<ParsedPage>,
    pub error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
pub struct ParsedPage {
    pub title: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub code: Option<String>,
    pub info: Option<String>,
}

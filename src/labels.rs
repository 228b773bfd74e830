//! Static bilingual (English | Ukrainian) UI strings.

pub const TITLE: &str = "Wikipedia Search | Пошук у Вікіпедії";
pub const LANGUAGE: &str = "Language | Мова:";
pub const SEARCH_TERM: &str = "Search term | Пошуковий запит:";
pub const FULL_ARTICLE: &str = "Show Full Article | Показати повну статтю";
pub const SEARCH_BUTTON: &str = "Search | Пошук";
pub const RESULTS: &str = "Results | Результати:";

pub const INPUT_REQUIRED_TITLE: &str = "Input Required | Потрібне введення";
pub const INPUT_REQUIRED_MESSAGE: &str =
    "Please enter a search term.\nБудь ласка, введіть пошуковий запит.";

/// Prefix for faults that escape the search itself.
pub const UNEXPECTED_ERROR: &str = "Error | Помилка";

pub const NO_SUMMARY: &str = "No summary available.";

/// Value of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Ready,
    Searching,
    SummaryRetrieved,
    FullArticleRetrieved,
    Error,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Ready => "Ready | Готово",
            Status::Searching => "Searching... | Пошук...",
            Status::SummaryRetrieved => "Summary retrieved | Отримано короткий зміст",
            Status::FullArticleRetrieved => "Full article retrieved | Отримано повну статтю",
            Status::Error => "Error occurred | Виникла помилка",
        }
    }

    pub fn is_error(self) -> bool {
        self == Status::Error
    }
}

//! Search orchestration: topic validation, mode dispatch, and mapping of fetch
//! results to the text and status shown to the user.

pub(crate) mod engine;
mod errors;

pub use engine::run;

use crate::labels::{self, Status};
use crate::wiki::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Summary,
    Full,
}

impl Mode {
    pub fn from_full_article(full: bool) -> Self {
        if full { Mode::Full } else { Mode::Summary }
    }
}

/// A blank topic was submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{}: {}", labels::INPUT_REQUIRED_TITLE, labels::INPUT_REQUIRED_MESSAGE)]
pub struct InputRequired;

/// One submitted search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    topic: String,
    pub language: Language,
    pub mode: Mode,
}

impl Query {
    /// Trims the topic; a blank topic never reaches the network.
    pub fn new(topic: &str, language: Language, mode: Mode) -> Result<Self, InputRequired> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(InputRequired);
        }
        Ok(Self {
            topic: topic.to_string(),
            language,
            mode,
        })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }
}

/// What the result pane and status line show after a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub text: String,
    pub status: Status,
}

impl Outcome {
    pub fn failed(text: String) -> Self {
        Self {
            text,
            status: Status::Error,
        }
    }

    /// A fault outside the search itself, such as a panicked search task.
    pub fn unexpected(detail: &impl std::fmt::Display) -> Self {
        Self::failed(format!("{}: {detail}", labels::UNEXPECTED_ERROR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_trims_topic() {
        let query = Query::new("  Kyiv \n", Language::Ukrainian, Mode::Full).unwrap();
        assert_eq!(query.topic(), "Kyiv");
        assert_eq!(query.language, Language::Ukrainian);
        assert_eq!(query.mode, Mode::Full);
    }

    #[test]
    fn blank_topic_is_rejected() {
        assert_eq!(Query::new("", Language::English, Mode::Summary), Err(InputRequired));
        assert_eq!(
            Query::new(" \t\n", Language::English, Mode::Summary),
            Err(InputRequired)
        );
    }

    #[test]
    fn input_required_message_is_bilingual() {
        let msg = InputRequired.to_string();
        assert!(msg.contains("Please enter a search term."));
        assert!(msg.contains("Будь ласка, введіть пошуковий запит."));
    }

    #[test]
    fn mode_follows_checkbox() {
        assert_eq!(Mode::from_full_article(true), Mode::Full);
        assert_eq!(Mode::from_full_article(false), Mode::Summary);
    }

    #[test]
    fn unexpected_outcome_is_error() {
        let outcome = Outcome::unexpected(&"task panicked");
        assert_eq!(outcome.text, "Error | Помилка: task panicked");
        assert_eq!(outcome.status, Status::Error);
    }
}

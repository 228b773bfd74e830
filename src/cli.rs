use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::search::{self, Mode, Query};
use crate::wiki::{ArticleSource, DEFAULT_BASE_URL, Language};

/// Look up Wikipedia articles in English or Ukrainian.
///
/// With a topic, prints the result and exits; without one, opens the search form.
#[derive(Debug, Parser)]
#[command(name = "wikisearch", version, about)]
pub struct Cli {
    /// Topic to look up; several words are joined with spaces
    #[arg(value_name = "TOPIC")]
    topic: Vec<String>,

    /// Wikipedia edition to search
    #[arg(short, long, value_enum, default_value_t = Language::English)]
    lang: Language,

    /// Fetch the whole article as plain text instead of the summary
    #[arg(short, long)]
    full: bool,

    /// Site URL template; `{lang}` is replaced by the language code
    #[arg(long, value_name = "TEMPLATE", default_value = DEFAULT_BASE_URL)]
    wiki_url: String,

    /// Give up on a request after this many seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Write logs to this file while the search form is open
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `None` opens the search form.
    pub topic: Option<String>,
    pub language: Language,
    pub mode: Mode,
    pub base_url: String,
    pub timeout: Option<Duration>,
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn into_config(self) -> Config {
        let topic = if self.topic.is_empty() {
            None
        } else {
            Some(self.topic.join(" "))
        };
        Config {
            topic,
            language: self.lang,
            mode: Mode::from_full_article(self.full),
            base_url: self.wiki_url,
            timeout: self.timeout.map(Duration::from_secs),
            log_file: self.log_file,
        }
    }
}

/// Exit code for a blank topic.
pub const EXIT_INPUT_REQUIRED: u8 = 2;

/// Run a single search and print it: result text to `out`, status to `err`.
///
/// Returns the process exit code.
pub async fn run_once(
    source: &impl ArticleSource,
    topic: &str,
    config: &Config,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<u8> {
    let query = match Query::new(topic, config.language, config.mode) {
        Ok(query) => query,
        Err(e) => {
            writeln!(err, "{e}")?;
            return Ok(EXIT_INPUT_REQUIRED);
        }
    };

    let outcome = search::run(source, &query).await;
    writeln!(out, "{}", outcome.text)?;
    writeln!(err, "{}", outcome.status.label())?;

    Ok(if outcome.status.is_error() { 1 } else { 0 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::{self, Status};
    use crate::wiki::WikiError;

    fn parse(args: &[&str]) -> Config {
        Cli::try_parse_from(args.iter().copied())
            .unwrap()
            .into_config()
    }

    #[test]
    fn defaults_open_form_in_english_summary_mode() {
        let config = parse(&["wikisearch"]);
        assert_eq!(config.topic, None);
        assert_eq!(config.language, Language::English);
        assert_eq!(config.mode, Mode::Summary);
        assert_eq!(config.base_url, "https://{lang}.wikipedia.org");
        assert_eq!(config.timeout, None);
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn parses_all_flags_and_joins_topic_words() {
        let config = parse(&[
            "wikisearch",
            "-l",
            "uk",
            "--full",
            "--timeout",
            "15",
            "--wiki-url",
            "http://localhost:8080/{lang}",
            "--log-file",
            "/tmp/wikisearch.log",
            "Taras",
            "Shevchenko",
        ]);
        assert_eq!(config.topic.as_deref(), Some("Taras Shevchenko"));
        assert_eq!(config.language, Language::Ukrainian);
        assert_eq!(config.mode, Mode::Full);
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.base_url, "http://localhost:8080/{lang}");
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/wikisearch.log")));
    }

    #[test]
    fn rejects_unknown_language() {
        assert!(Cli::try_parse_from(["wikisearch", "--lang", "de", "Berlin"]).is_err());
    }

    struct Fixed(Result<Option<&'static str>, fn() -> WikiError>);

    impl ArticleSource for Fixed {
        async fn summary(&self, _: &str, _: Language) -> Result<Option<String>, WikiError> {
            match &self.0 {
                Ok(s) => Ok(s.map(String::from)),
                Err(make) => Err(make()),
            }
        }

        async fn article_html(&self, _: &str, _: Language) -> Result<String, WikiError> {
            Err(WikiError::MissingField("parse"))
        }
    }

    async fn run(source: &Fixed, topic: &str) -> (u8, String, String) {
        let config = parse(&["wikisearch"]);
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let code = run_once(source, topic, &config, &mut out, &mut err)
            .await
            .unwrap();
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[tokio::test]
    async fn success_prints_text_and_status() {
        let (code, out, err) = run(&Fixed(Ok(Some("Kyiv is a city."))), "Kyiv").await;
        assert_eq!(code, 0);
        assert_eq!(out, "Kyiv is a city.\n");
        assert_eq!(err, format!("{}\n", Status::SummaryRetrieved.label()));
    }

    #[tokio::test]
    async fn error_outcome_exits_with_one() {
        let source = Fixed(Err(|| WikiError::MissingField("extract")));
        let (code, out, err) = run(&source, "Kyiv").await;
        assert_eq!(code, 1);
        assert!(out.starts_with("Error fetching summary:"));
        assert_eq!(err, "Error occurred | Виникла помилка\n");
    }

    #[tokio::test]
    async fn blank_topic_exits_with_two_and_no_lookup() {
        let source = Fixed(Err(|| panic!("blank topic must not reach the source")));
        let (code, out, err) = run(&source, "   ").await;
        assert_eq!(code, EXIT_INPUT_REQUIRED);
        assert!(out.is_empty());
        assert!(err.contains(labels::INPUT_REQUIRED_MESSAGE));
    }
}

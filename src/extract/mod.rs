//! Plain-text extraction from the article markup returned by the parse API.

mod tokenizer;

use tokenizer::{Token, tokenize};

/// Text directly inside these tags is dropped: footnote markers, inline
/// spans (edit links, headline anchors), tables and embedded style/script.
const SKIPPED_TAGS: [&str; 5] = ["sup", "span", "table", "style", "script"];

/// Runs starting with these are footnote/edit markers (`[1]`, `[edit]`) or
/// stray path fragments.
const SKIPPED_PREFIXES: [char; 2] = ['[', '/'];

/// Convert article HTML into newline-separated text runs.
///
/// Only the most recently opened tag decides whether a run is kept; there is
/// no tag stack, so `<sup><a>1</a></sup>` keeps `1`. An end tag clears that
/// context, and a tag that is never closed keeps it until the next start tag.
pub fn extract_text(html: &str) -> String {
    let mut current_tag: Option<String> = None;
    let mut lines: Vec<String> = Vec::new();

    for token in tokenize(html) {
        match token {
            Token::StartTag(name) => current_tag = Some(name),
            Token::EndTag(_) => current_tag = None,
            Token::Text(text) => {
                if current_tag
                    .as_deref()
                    .is_some_and(|tag| SKIPPED_TAGS.contains(&tag))
                {
                    continue;
                }
                let line = text.trim();
                if line.is_empty() || line.starts_with(SKIPPED_PREFIXES) {
                    continue;
                }
                lines.push(line.to_string());
            }
        }
    }

    lines.join("\n")
}

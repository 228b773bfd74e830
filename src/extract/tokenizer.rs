use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, TagKind, Token as HtmlToken, TokenSink, TokenSinkResult, Tokenizer,
    TokenizerOpts,
};

#[derive(Debug, PartialEq, Eq)]
pub(super) enum Token {
    StartTag(String),
    EndTag(String),
    Text(String),
}

/// Flattens html5ever's token stream into tags and entity-decoded text runs.
///
/// Adjacent character tokens are merged into one run. Comments and doctypes
/// produce no token but still end the current run. A tag left unterminated at
/// the end of input is discarded.
pub(super) fn tokenize(html: &str) -> Vec<Token> {
    let mut queue = BufferQueue::new();
    queue.push_back(StrTendril::from_slice(html));

    let mut tokenizer = Tokenizer::new(Collector::default(), TokenizerOpts::default());
    let _ = tokenizer.feed(&mut queue);
    tokenizer.end();
    tokenizer.sink.tokens
}

#[derive(Default)]
struct Collector {
    tokens: Vec<Token>,
    text: String,
}

impl Collector {
    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            self.tokens.push(Token::Text(std::mem::take(&mut self.text)));
        }
    }
}

impl TokenSink for Collector {
    type Handle = ();

    fn process_token(&mut self, token: HtmlToken, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            HtmlToken::CharacterTokens(chars) => self.text.push_str(&chars),
            HtmlToken::NullCharacterToken | HtmlToken::ParseError(_) => {}
            HtmlToken::TagToken(tag) => {
                self.flush_text();
                let name = tag.name.to_string();
                match tag.kind {
                    TagKind::EndTag => self.tokens.push(Token::EndTag(name)),
                    TagKind::StartTag if tag.self_closing => {
                        self.tokens.push(Token::StartTag(name.clone()));
                        self.tokens.push(Token::EndTag(name));
                    }
                    TagKind::StartTag => {
                        // Style and script bodies are raw text up to their end tag.
                        let raw = match name.as_str() {
                            "script" => Some(RawKind::ScriptData),
                            "style" => Some(RawKind::Rawtext),
                            _ => None,
                        };
                        self.tokens.push(Token::StartTag(name));
                        if let Some(kind) = raw {
                            return TokenSinkResult::RawData(kind);
                        }
                    }
                }
            }
            HtmlToken::CommentToken(_) | HtmlToken::DoctypeToken(_) | HtmlToken::EOFToken => {
                self.flush_text();
            }
        }
        TokenSinkResult::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Token {
        Token::Text(s.into())
    }

    #[test]
    fn splits_tags_and_text() {
        assert_eq!(
            tokenize("<p>Hello</p>"),
            vec![
                Token::StartTag("p".into()),
                text("Hello"),
                Token::EndTag("p".into()),
            ]
        );
    }

    #[test]
    fn lowercases_tag_names_and_ignores_attributes() {
        assert_eq!(
            tokenize(r#"<DIV class="mw-parser-output" id=x>"#),
            vec![Token::StartTag("div".into())]
        );
    }

    #[test]
    fn quoted_attribute_may_contain_angle_bracket() {
        assert_eq!(
            tokenize(r#"<a title="a > b">x</a>"#),
            vec![
                Token::StartTag("a".into()),
                text("x"),
                Token::EndTag("a".into()),
            ]
        );
    }

    #[test]
    fn self_closing_tag_opens_and_closes() {
        assert_eq!(
            tokenize("<br/>"),
            vec![Token::StartTag("br".into()), Token::EndTag("br".into())]
        );
    }

    #[test]
    fn comment_splits_text_runs() {
        assert_eq!(tokenize("one<!-- note -->two"), vec![text("one"), text("two")]);
    }

    #[test]
    fn doctype_is_skipped() {
        assert_eq!(tokenize("<!DOCTYPE html>hi"), vec![text("hi")]);
    }

    #[test]
    fn literal_less_than_stays_in_text() {
        assert_eq!(tokenize("a < b"), vec![text("a < b")]);
    }

    #[test]
    fn script_content_is_raw_text() {
        assert_eq!(
            tokenize("<script>if (a<b) { s = '<p>'; }</SCRIPT>"),
            vec![
                Token::StartTag("script".into()),
                text("if (a<b) { s = '<p>'; }"),
                Token::EndTag("script".into()),
            ]
        );
    }

    #[test]
    fn unterminated_tag_is_discarded() {
        assert_eq!(tokenize("ok<div class=\"x"), vec![text("ok")]);
        assert_eq!(tokenize("ok</div"), vec![text("ok")]);
    }

    #[test]
    fn bogus_end_tag_is_skipped() {
        assert_eq!(tokenize("a</ >b"), vec![text("a"), text("b")]);
        assert_eq!(tokenize("a</3>b"), vec![text("a"), text("b")]);
    }

    #[test]
    fn character_references_are_merged_into_one_run() {
        assert_eq!(tokenize("Tom &amp; Jerry"), vec![text("Tom & Jerry")]);
        assert_eq!(tokenize("Caf&eacute; &lbrack;1&rbrack;"), vec![text("Café [1]")]);
    }

    #[test]
    fn invalid_numeric_references_become_replacement_char() {
        assert_eq!(tokenize("a&#0;b&#xD800;c"), vec![text("a\u{FFFD}b\u{FFFD}c")]);
    }
}

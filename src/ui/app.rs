use crate::labels::Status;
use crate::search::{Mode, Outcome, Query};
use crate::wiki::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Language,
    Topic,
    FullArticle,
    SearchButton,
    Results,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Language,
        Focus::Topic,
        Focus::FullArticle,
        Focus::SearchButton,
        Focus::Results,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// State of the search form.
pub struct App {
    pub should_quit: bool,
    pub focus: Focus,
    pub language: Language,
    pub full_article: bool,

    // Topic input
    pub topic: String,
    pub cursor: usize, // char index into `topic`

    // Result pane
    pub result: String,
    pub status: Status,
    pub scroll: u16,
    pub result_lines: u16,  // wrapped line count, updated during render
    pub result_height: u16, // visible rows, updated during render

    pub show_input_warning: bool,
}

impl App {
    pub fn new(language: Language, mode: Mode) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Topic,
            language,
            full_article: mode == Mode::Full,
            topic: String::new(),
            cursor: 0,
            result: String::new(),
            status: Status::Ready,
            scroll: 0,
            result_lines: 0,
            result_height: 0,
            show_input_warning: false,
        }
    }

    /// Validate the form. A blank topic raises the warning instead of a query.
    pub fn submit(&mut self) -> Option<Query> {
        let mode = Mode::from_full_article(self.full_article);
        match Query::new(&self.topic, self.language, mode) {
            Ok(query) => {
                self.status = Status::Searching;
                Some(query)
            }
            Err(_) => {
                self.show_input_warning = true;
                None
            }
        }
    }

    /// Replace the result pane with the outcome of the last search.
    pub fn finish(&mut self, outcome: Outcome) {
        self.result = outcome.text;
        self.status = outcome.status;
        self.scroll = 0;
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.next();
    }

    pub fn toggle_full_article(&mut self) {
        self.full_article = !self.full_article;
    }

    // Topic editing (cursor is a char index, not a byte index)

    pub fn insert_char(&mut self, c: char) {
        let at = byte_index(&self.topic, self.cursor);
        self.topic.insert(at, c);
        self.cursor += 1;
    }

    pub fn delete_before_cursor(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = byte_index(&self.topic, self.cursor);
        self.topic.remove(at);
    }

    pub fn delete_at_cursor(&mut self) {
        if self.cursor < self.topic.chars().count() {
            let at = byte_index(&self.topic, self.cursor);
            self.topic.remove(at);
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.topic.chars().count());
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.topic.chars().count();
    }

    // Result scrolling

    fn max_scroll(&self) -> u16 {
        self.result_lines.saturating_sub(self.result_height)
    }

    pub fn scroll_down(&mut self, rows: u16) {
        self.scroll = self.scroll.saturating_add(rows).min(self.max_scroll());
    }

    pub fn scroll_up(&mut self, rows: u16) {
        self.scroll = self.scroll.saturating_sub(rows);
    }

    pub fn scroll_to_end(&mut self) {
        self.scroll = self.max_scroll();
    }

    pub fn page(&self) -> u16 {
        self.result_height.saturating_sub(1).max(1)
    }
}

fn byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

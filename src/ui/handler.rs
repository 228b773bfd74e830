use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Focus};
use crate::search::Query;

/// Apply one key press. Returns the query to run when the form was submitted.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Option<Query> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return None;
    }

    // The warning is modal: any key dismisses it.
    if app.show_input_warning {
        app.show_input_warning = false;
        return None;
    }

    match key.code {
        KeyCode::Esc => {
            app.should_quit = true;
            None
        }
        KeyCode::Tab => {
            app.focus = app.focus.next();
            None
        }
        KeyCode::BackTab => {
            app.focus = app.focus.prev();
            None
        }
        KeyCode::Enter => app.submit(),
        _ => match app.focus {
            Focus::Topic => {
                handle_topic_key(app, key);
                None
            }
            Focus::Language => {
                if matches!(key.code, KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')) {
                    app.toggle_language();
                }
                None
            }
            Focus::FullArticle => {
                if key.code == KeyCode::Char(' ') {
                    app.toggle_full_article();
                }
                None
            }
            Focus::SearchButton if key.code == KeyCode::Char(' ') => app.submit(),
            Focus::SearchButton => None,
            Focus::Results => {
                handle_results_key(app, key);
                None
            }
        },
    }
}

fn handle_topic_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => app.insert_char(c),
        KeyCode::Backspace => app.delete_before_cursor(),
        KeyCode::Delete => app.delete_at_cursor(),
        KeyCode::Left => app.cursor_left(),
        KeyCode::Right => app.cursor_right(),
        KeyCode::Home => app.cursor_home(),
        KeyCode::End => app.cursor_end(),
        _ => {}
    }
}

fn handle_results_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_down(1),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_up(1),
        KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_down(app.page()),
        KeyCode::PageUp => app.scroll_up(app.page()),
        KeyCode::Home | KeyCode::Char('g') => app.scroll = 0,
        KeyCode::End | KeyCode::Char('G') => app.scroll_to_end(),
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

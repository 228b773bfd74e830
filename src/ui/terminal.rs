use std::io::{self, Stderr};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

// Drawn on stderr so stdout stays free for redirection.
pub type Tui = Terminal<CrosstermBackend<Stderr>>;

pub fn init() -> io::Result<Tui> {
    enable_raw_mode()?;
    execute!(io::stderr(), EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(io::stderr()))
}

pub fn restore() -> io::Result<()> {
    execute!(io::stderr(), LeaveAlternateScreen)?;
    disable_raw_mode()
}

/// Restore the terminal before the default hook prints a panic from the UI thread.
///
/// Panics inside spawned search tasks are caught by their join handle and
/// reported in the result pane, so the screen must stay intact for them.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        if std::thread::current().name() == Some("main") {
            let _ = restore();
        }
        original_hook(panic_info);
    }));
}

//! Full-screen search form.

mod app;
mod handler;
mod render;
mod terminal;

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use tokio::task::JoinError;
use tracing::{error, info};

use crate::cli::Config;
use crate::search::{self, Outcome, Query};
use crate::wiki::WikiClient;
use app::App;
use terminal::Tui;

pub async fn run(client: WikiClient, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    terminal::install_panic_hook();
    let mut tui = terminal::init()?;
    info!("terminal form started");

    let mut app = App::new(config.language, config.mode);
    let result = event_loop(&mut tui, &mut app, &client).await;

    terminal::restore()?;
    info!("terminal form closed");
    result
}

async fn event_loop(
    tui: &mut Tui,
    app: &mut App,
    client: &WikiClient,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut events = EventStream::new();

    while !app.should_quit {
        tui.draw(|frame| render::render(app, frame))?;

        let Some(event) = events.next().await else {
            break;
        };
        let Event::Key(key) = event? else {
            // Resize and other events just trigger a redraw.
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        if let Some(query) = handler::handle_key(app, key) {
            // Show the Searching status before blocking on the network.
            tui.draw(|frame| render::render(app, frame))?;
            let outcome = match search_task(client.clone(), query).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    error!("search task failed: {e}");
                    // The panic message went to the terminal; repaint everything.
                    tui.clear()?;
                    Outcome::unexpected(&e)
                }
            };
            app.finish(outcome);
        }
    }
    Ok(())
}

/// Run one search on its own task so a panic comes back as a `JoinError`.
async fn search_task(client: WikiClient, query: Query) -> Result<Outcome, JoinError> {
    tokio::spawn(async move { search::run(&client, &query).await }).await
}

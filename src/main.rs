mod cli;
mod extract;
mod labels;
mod search;
mod ui;
mod wiki;

pub const USER_AGENT: &str = concat!("wikisearch/", env!("CARGO_PKG_VERSION"), " (terminal client)");

use std::fs::File;
use std::process::ExitCode;
use std::sync::Mutex;

use clap::Parser;
use cli::{Cli, Config};
use tracing::info;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use wiki::WikiClient;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = Cli::parse().into_config();
    init_tracing(&config)?;

    let http = wiki::http_client(config.timeout)?;
    let client = WikiClient::with_base_url(http, &config.base_url);

    match config.topic.as_deref() {
        Some(topic) => {
            info!(lang = config.language.code(), "one-shot search");
            let code = cli::run_once(
                &client,
                topic,
                &config,
                &mut std::io::stdout(),
                &mut std::io::stderr(),
            )
            .await?;
            Ok(ExitCode::from(code))
        }
        None => {
            ui::run(client, &config).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Logs go to stderr for one-shot runs. The search form owns the screen, so
/// there they go to `--log-file` or nowhere.
fn init_tracing(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let (writer, ansi) = match (&config.topic, &config.log_file) {
        (Some(_), _) => (BoxMakeWriter::new(std::io::stderr), true),
        (None, Some(path)) => (BoxMakeWriter::new(Mutex::new(File::create(path)?)), false),
        (None, None) => (BoxMakeWriter::new(std::io::sink), false),
    };

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wikisearch=info".parse()?),
        )
        .init();
    Ok(())
}

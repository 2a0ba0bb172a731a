// topicdesk - terminal client for a shared topic list
//
// Architecture:
// - API (reqwest): thin JSON wrapper plus the four topic endpoints
// - Topics: local list, reconciled from request outcomes
// - Session: current user, persisted as JSON under the data dir
// - TUI (ratatui): list screen with spawned requests feeding back over mpsc
// - CLI (clap): scripting subcommands and config management

mod api;
mod cli;
mod config;
mod events;
mod logging;
mod session;
mod startup;
mod storage;
mod topics;
mod tui;

use anyhow::{Context, Result};
use api::{HttpClient, HttpTopicsApi};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use logging::{LogBuffer, LogSink};
use session::{SessionStore, StubIdentity};
use std::sync::Arc;
use storage::Storage;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config commands run before any other setup
    if let Some(command) = &cli.command {
        if cli::handle_config_command(command) {
            return Ok(());
        }
    }

    Config::ensure_config_exists();
    let config = Config::from_env();

    let use_tui = cli.command.is_none() && config.enable_tui;

    // The TUI owns the terminal, so its logs go to the in-memory buffer
    let log_buffer = LogBuffer::new();
    let sink = if use_tui {
        LogSink::Buffer
    } else {
        LogSink::Stderr
    };
    let _file_guard = logging::init(&config.logging, sink, &log_buffer)?;

    let storage = Storage::new(&config.data_dir)
        .with_context(|| format!("Failed to open data dir {}", config.data_dir.display()))?;
    let mut session = SessionStore::open(storage);

    // `session` inspects the stored state as-is
    let identity = StubIdentity::from_config(&config.identity);
    let inspecting_session = matches!(cli.command, Some(Commands::Session { .. }));
    if !inspecting_session {
        startup::auto_login(&mut session, &identity, config.identity.auto_login)?;
    }

    let api = Arc::new(HttpTopicsApi::new(HttpClient::new(&config.api_url)?));

    match cli.command {
        Some(Commands::Topics { action }) => {
            exit_on_error(cli::run_topics(api, &session, action, &mut std::io::stdout()).await)
        }
        Some(Commands::Session { action }) => {
            exit_on_error(cli::run_session(&mut session, action, &mut std::io::stdout()))
        }
        Some(Commands::Config { .. }) => Ok(()),
        None if use_tui => {
            startup::log_startup(&config, &session);
            let app = tui::app::App::new(session, Box::new(identity), log_buffer, &config);
            tui::run_tui(app, api).await
        }
        None => run_headless(&config, &session, api).await,
    }
}

/// Fetch once and print the list
async fn run_headless(
    config: &Config,
    session: &SessionStore,
    api: Arc<HttpTopicsApi>,
) -> Result<()> {
    startup::print_startup(config, session);

    if !session.is_signed_in() {
        eprintln!("Not signed in. Enable identity.auto_login or run the TUI to sign in.");
        std::process::exit(1);
    }

    exit_on_error(
        cli::run_topics(
            api,
            session,
            cli::TopicsCommand::List,
            &mut std::io::stdout(),
        )
        .await,
    )
}

/// Report a subcommand failure and exit 1
fn exit_on_error(result: Result<()>) -> Result<()> {
    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
    Ok(())
}

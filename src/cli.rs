// CLI module - command-line argument parsing and handlers
//
// With no subcommand the TUI runs. Subcommands cover scripting:
// - topics list|add|rename|delete: one request against the backend
// - session show|logout: inspect or clear the stored user
// - config --show|--reset|--edit|--update|--path: manage the config file

use crate::api::TopicsApi;
use crate::config::{Config, VERSION};
use crate::session::SessionStore;
use crate::topics::{Topic, TopicController};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::process::Command;
use std::sync::Arc;

/// topicdesk - terminal client for a shared topic list
#[derive(Parser)]
#[command(name = "topicdesk")]
#[command(version = VERSION)]
#[command(about = "Terminal client for a shared topic list", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List or change topics without the TUI
    Topics {
        #[command(subcommand)]
        action: TopicsCommand,
    },

    /// Show or clear the stored session
    Session {
        #[command(subcommand)]
        action: SessionCommand,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(long)]
        edit: bool,

        /// Rewrite config with the current template (preserves user values)
        #[arg(long)]
        update: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum TopicsCommand {
    /// Print all topics as `<id>\t<title>`
    List,
    /// Create a topic
    Add { title: String },
    /// Change a topic's title
    Rename { id: String, title: String },
    /// Delete a topic
    Delete { id: String },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    /// Print the signed-in user
    Show,
    /// Sign out
    Logout,
}

// ─────────────────────────────────────────────────────────────────────────────
// Topics
// ─────────────────────────────────────────────────────────────────────────────

/// Run one topics subcommand, writing results to `out`
///
/// Request failures are already logged by the controller; they surface here
/// as an error so the process exits non-zero.
pub async fn run_topics<A: TopicsApi>(
    api: Arc<A>,
    session: &SessionStore,
    action: TopicsCommand,
    out: &mut impl Write,
) -> Result<()> {
    if !session.is_signed_in() {
        bail!("Not signed in. Set identity.auto_login or sign in from the TUI.");
    }

    let mut controller = TopicController::new(api);

    match &action {
        TopicsCommand::List => {
            controller.fetch_topics().await;
        }
        TopicsCommand::Add { title } => {
            controller.add_topic(title).await?;
        }
        TopicsCommand::Rename { id, title } => {
            controller.edit_topic(id, title).await;
        }
        TopicsCommand::Delete { id } => {
            controller.delete_topic(id).await;
        }
    }

    if let Some(failed) = controller.list().last_failure() {
        bail!("Failed to {}", failed.describe());
    }

    match action {
        TopicsCommand::List => print_topics(out, controller.topics())?,
        TopicsCommand::Add { .. } => {
            if let Some(topic) = controller.topics().last() {
                writeln!(out, "{}\t{}", topic.id, topic.title)?;
            }
        }
        TopicsCommand::Rename { id, title } => writeln!(out, "Renamed {} to {:?}", id, title)?,
        TopicsCommand::Delete { id } => writeln!(out, "Deleted {}", id)?,
    }

    Ok(())
}

pub fn print_topics(out: &mut impl Write, topics: &[Topic]) -> Result<()> {
    for topic in topics {
        writeln!(out, "{}\t{}", topic.id, topic.title)?;
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Session
// ─────────────────────────────────────────────────────────────────────────────

pub fn run_session(
    session: &mut SessionStore,
    action: SessionCommand,
    out: &mut impl Write,
) -> Result<()> {
    match action {
        SessionCommand::Show => match session.current_user() {
            Some(user) => writeln!(out, "{} <{}> (id {})", user.user_name, user.email, user.id)?,
            None => writeln!(out, "Not signed in")?,
        },
        SessionCommand::Logout => {
            session.logout().context("Failed to clear session")?;
            writeln!(out, "Signed out")?;
        }
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Config
// ─────────────────────────────────────────────────────────────────────────────

/// Handle `config` before any other setup. Returns true if handled.
pub fn handle_config_command(command: &Commands) -> bool {
    let Commands::Config {
        show,
        reset,
        edit,
        update,
        path,
    } = command
    else {
        return false;
    };

    if *path {
        handle_config_path();
    } else if *show {
        handle_config_show();
    } else if *reset {
        handle_config_reset();
    } else if *edit {
        handle_config_edit();
    } else if *update {
        handle_config_update();
    } else {
        println!("Usage: topicdesk config [--show|--reset|--edit|--update|--path]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --reset   Reset config file to defaults");
        println!("  --edit    Open config file in $EDITOR");
        println!("  --update  Rewrite config with the current template");
        println!("  --path    Show config file path");
    }
    true
}

fn require_config_path() -> std::path::PathBuf {
    match Config::config_path() {
        Some(path) => path,
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_path() {
    println!("{}", require_config_path().display());
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());
    println!();
    println!("# TUI: {}", if config.enable_tui { "on" } else { "off" });

    let path = require_config_path();
    if path.exists() {
        println!("# Source: {}", path.display());
    } else {
        println!("# Source: defaults (no config file)");
    }
}

fn handle_config_reset() {
    let path = require_config_path();

    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        let _ = std::io::stderr().flush();

        let mut input = String::new();
        if std::io::stdin().read_line(&mut input).is_err()
            || !input.trim().eq_ignore_ascii_case("y")
        {
            println!("Aborted.");
            return;
        }
    }

    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            std::process::exit(1);
        }
    }

    if let Err(e) = std::fs::write(&path, Config::default().to_toml()) {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config reset to defaults: {}", path.display());
}

fn handle_config_edit() {
    let path = require_config_path();

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
    }

    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    println!("Opening {} with {}", path.display(), editor);

    match Command::new(&editor).arg(&path).status() {
        Ok(s) if s.success() => {}
        Ok(s) => {
            eprintln!("Editor exited with status: {}", s);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to launch editor '{}': {}", editor, e);
            eprintln!("Set $EDITOR environment variable to your preferred editor");
            std::process::exit(1);
        }
    }
}

fn handle_config_update() {
    let path = require_config_path();

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
        return;
    }

    let updated = Config::updated_file_contents();

    let backup_path = path.with_extension("toml.bak");
    match std::fs::copy(&path, &backup_path) {
        Ok(_) => println!("Backup created: {}", backup_path.display()),
        Err(e) => eprintln!("Warning: Could not create backup: {}", e),
    }

    if let Err(e) = std::fs::write(&path, updated) {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config updated: {}", path.display());
}

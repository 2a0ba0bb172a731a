//! Configuration for the topic client
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/topicdesk/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod identity;
mod logging;
mod serialization;


pub use identity::{FileIdentity, IdentityConfig};
pub use logging::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Backend origin used when nothing else is configured
pub const DEFAULT_API_URL: &str = "https://express-be-topics.vercel.app";

pub const DEFAULT_THEME: &str = "auto";

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("topicdesk"))
        .unwrap_or_else(|| PathBuf::from("./.topicdesk"))
}

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Config {
    /// Origin of the topics backend
    pub api_url: String,

    /// Where the session store lives
    pub data_dir: PathBuf,

    /// Whether to run the TUI (headless prints the list and exits)
    pub enable_tui: bool,

    /// Theme name: "auto", "dracula", "nord"
    pub theme: String,

    /// Stub login identity
    pub identity: IdentityConfig,

    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            data_dir: default_data_dir(),
            enable_tui: true,
            theme: DEFAULT_THEME.to_string(),
            identity: IdentityConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub api_url: Option<String>,
    pub data_dir: Option<String>,
    pub theme: Option<String>,

    /// Optional [identity] section
    pub identity: Option<FileIdentity>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Config file path: ~/.config/topicdesk/config.toml
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("topicdesk").join("config.toml"))
    }

    /// Write the default template if no config file exists yet
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// Exits the process if the file exists but cannot be read or parsed:
    /// running on silent defaults would point the client at the wrong backend.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                    eprintln!("║  CONFIG ERROR - Failed to parse configuration file          ║");
                    eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  To reset, run `topicdesk config --reset`.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                eprintln!("║  CONFIG ERROR - Cannot read configuration file              ║");
                eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env > file > defaults
    pub fn from_env() -> Self {
        Self::from_sources(Self::load_file_config(), |key| std::env::var(key).ok())
    }

    /// Current template filled from the config file alone, for `config --update`
    pub fn updated_file_contents() -> String {
        Self::file_contents(Self::load_file_config())
    }

    /// Template filled from `file`; environment overrides stay out of it
    pub(crate) fn file_contents(file: FileConfig) -> String {
        Self::from_sources(file, |_| None).to_toml()
    }

    /// Merge a parsed file with an environment lookup
    pub(crate) fn from_sources(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = env("TOPICDESK_API_URL")
            .or(file.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let data_dir = env("TOPICDESK_DATA_DIR")
            .or(file.data_dir)
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);

        // TUI toggle: env only (runtime flag)
        let enable_tui = env("TOPICDESK_NO_TUI")
            .map(|v| v != "1" && v.to_lowercase() != "true")
            .unwrap_or(true);

        let theme = env("TOPICDESK_THEME")
            .or(file.theme)
            .unwrap_or_else(|| DEFAULT_THEME.to_string());

        Self {
            api_url,
            data_dir,
            enable_tui,
            theme,
            identity: IdentityConfig::from_file(file.identity),
            logging: LoggingConfig::from_file(file.logging),
        }
    }
}

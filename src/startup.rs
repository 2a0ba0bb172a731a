// Startup module - banner and boot summary
//
// Headless runs print the banner to stderr (stdout carries the topic list).
// The TUI gets the same summary as lines in its log panel.

use crate::config::{Config, VERSION};
use crate::session::{IdentityProvider, SessionStore};
use anyhow::Result;

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
}

/// One line of the boot summary
struct StatusLine {
    label: &'static str,
    ok: bool,
    detail: String,
}

fn status_lines(config: &Config, session: &SessionStore) -> Vec<StatusLine> {
    let config_file = Config::config_path().filter(|p| p.exists());

    vec![
        StatusLine {
            label: "config",
            ok: config_file.is_some(),
            detail: config_file
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(using defaults)".to_string()),
        },
        StatusLine {
            label: "backend",
            ok: true,
            detail: config.api_url.clone(),
        },
        StatusLine {
            label: "session",
            ok: session.is_signed_in(),
            detail: session
                .current_user()
                .map(|u| format!("signed in as {}", u.email))
                .unwrap_or_else(|| "signed out".to_string()),
        },
        StatusLine {
            label: "file logs",
            ok: config.logging.file_enabled,
            detail: if config.logging.file_enabled {
                config.logging.file_dir.display().to_string()
            } else {
                "off".to_string()
            },
        },
    ]
}

pub fn print_startup(config: &Config, session: &SessionStore) {
    use colors::*;

    eprintln!();
    eprintln!("  {BOLD}{CYAN}topicdesk{RESET} {DIM}v{VERSION}{RESET}");
    eprintln!();

    for line in status_lines(config, session) {
        let icon = if line.ok {
            format!("{GREEN}✓{RESET}")
        } else {
            format!("{YELLOW}○{RESET}")
        };
        eprintln!("    {icon} {:<10} {DIM}{}{RESET}", line.label, line.detail);
    }
    eprintln!();
}

/// Boot summary for the TUI log panel
pub fn log_startup(config: &Config, session: &SessionStore) {
    tracing::info!("topicdesk v{}", VERSION);
    for line in status_lines(config, session) {
        let icon = if line.ok { "✓" } else { "○" };
        tracing::info!("  {} {} - {}", icon, line.label, line.detail);
    }
}

/// Sign the configured identity in on every start, replacing a stored user
pub fn auto_login(
    session: &mut SessionStore,
    identity: &dyn IdentityProvider,
    enabled: bool,
) -> Result<()> {
    if !enabled {
        return Ok(());
    }
    tracing::info!("Auto-login via {}", identity.name());
    session.login_with(identity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{StubIdentity, User};
    use crate::storage::{scratch_dir, Storage};

    fn identity(email: &str) -> StubIdentity {
        StubIdentity::new(User {
            id: "1".to_string(),
            email: email.to_string(),
            user_name: "Test User".to_string(),
        })
    }

    fn stored_session(label: &str) -> SessionStore {
        let mut session = SessionStore::open(Storage::new(scratch_dir(label)).unwrap());
        session.login("9", "old@example.com", "Old User").unwrap();
        session
    }

    #[test]
    fn test_auto_login_replaces_stored_user() {
        let mut session = stored_session("startup-replace");
        auto_login(&mut session, &identity("new@example.com"), true).unwrap();

        let user = session.current_user().unwrap();
        assert_eq!(user.email, "new@example.com");
        assert_eq!(user.id, "1");
    }

    #[test]
    fn test_auto_login_disabled_keeps_session() {
        let mut session = stored_session("startup-disabled");
        auto_login(&mut session, &identity("new@example.com"), false).unwrap();

        assert_eq!(session.current_user().unwrap().email, "old@example.com");
    }
}

//! Identity configuration for the stub login

use serde::Deserialize;

/// User handed out by the stub identity provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityConfig {
    /// Sign in automatically on startup
    pub auto_login: bool,
    pub id: String,
    pub email: String,
    pub user_name: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            auto_login: true,
            id: "1".to_string(),
            email: "test@example.com".to_string(),
            user_name: "Test User".to_string(),
        }
    }
}

/// `[identity]` as loaded from the config file
#[derive(Debug, Deserialize, Default)]
pub struct FileIdentity {
    pub auto_login: Option<bool>,
    pub id: Option<String>,
    pub email: Option<String>,
    pub user_name: Option<String>,
}

impl IdentityConfig {
    pub fn from_file(file: Option<FileIdentity>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            auto_login: file.auto_login.unwrap_or(defaults.auto_login),
            id: file.id.unwrap_or(defaults.id),
            email: file.email.unwrap_or(defaults.email),
            user_name: file.user_name.unwrap_or(defaults.user_name),
        }
    }
}

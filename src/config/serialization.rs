//! Config serialization to TOML
//!
//! Single source of truth for the config file format.

use super::Config;

impl Config {
    /// Render the config as a commented TOML document
    pub fn to_toml(&self) -> String {
        format!(
            r#"# topicdesk configuration

# Origin of the topics backend (TOPICDESK_API_URL overrides)
api_url = {api_url}

# Where the session store is kept (TOPICDESK_DATA_DIR overrides)
data_dir = {data_dir}

# Theme: auto, dracula, nord
theme = {theme}

# Stub login: the user signed in when the app starts
[identity]
auto_login = {auto_login}
id = {id}
email = {email}
user_name = {user_name}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = {level}
# File logging (in addition to the TUI log panel or stderr)
file_enabled = {file_enabled}
file_dir = {file_dir}
file_rotation = "{file_rotation}"  # hourly, daily, never
file_prefix = {file_prefix}
"#,
            api_url = toml_string(&self.api_url),
            data_dir = toml_string(&self.data_dir.display().to_string()),
            theme = toml_string(&self.theme),
            auto_login = self.identity.auto_login,
            id = toml_string(&self.identity.id),
            email = toml_string(&self.identity.email),
            user_name = toml_string(&self.identity.user_name),
            level = toml_string(&self.logging.level),
            file_enabled = self.logging.file_enabled,
            file_dir = toml_string(&self.logging.file_dir.display().to_string()),
            file_rotation = self.logging.file_rotation.as_str(),
            file_prefix = toml_string(&self.logging.file_prefix),
        )
    }
}

/// Quote a string as a TOML basic string (handles backslashes in Windows paths)
fn toml_string(s: &str) -> String {
    toml::Value::String(s.to_string()).to_string()
}

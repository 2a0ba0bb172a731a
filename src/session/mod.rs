//! Session store - the signed-in user, persisted between runs
//!
//! The store is a plain value owned by whoever needs it (the TUI app, the CLI
//! handlers). It is rehydrated from disk in `open` before anything reads it,
//! and every login/logout writes the record back.
//!
//! On disk (`auth-store.json`):
//!
//! ```json
//! { "currentUser": { "id": "1", "email": "test@example.com", "user_name": "Test User" } }
//! ```

pub mod identity;

pub use identity::{IdentityProvider, StubIdentity};

use crate::storage::Storage;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Storage key for the persisted session
pub const STORE_KEY: &str = "auth-store";

/// The signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub user_name: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedSession {
    #[serde(default)]
    current_user: Option<User>,
}

/// Holds the optional current user and keeps it on disk
pub struct SessionStore {
    storage: Storage,
    current_user: Option<User>,
}

impl SessionStore {
    /// Rehydrate from storage
    ///
    /// A missing record means nobody is signed in. An unreadable one is logged
    /// and treated the same way rather than blocking startup.
    pub fn open(storage: Storage) -> Self {
        let current_user = match storage.load::<PersistedSession>(STORE_KEY) {
            Ok(Some(session)) => session.current_user,
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("Ignoring unreadable session store: {:#}", e);
                None
            }
        };

        if let Some(user) = &current_user {
            tracing::debug!("Restored session for {}", user.email);
        }

        Self {
            storage,
            current_user,
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.current_user.is_some()
    }

    /// Set the current user unconditionally and persist it
    pub fn login(
        &mut self,
        id: impl Into<String>,
        email: impl Into<String>,
        user_name: impl Into<String>,
    ) -> Result<()> {
        let user = User {
            id: id.into(),
            email: email.into(),
            user_name: user_name.into(),
        };
        tracing::info!("Signed in as {}", user.email);
        self.current_user = Some(user);
        self.persist()
    }

    /// Ask an identity provider for the user, then log in as them
    pub fn login_with(&mut self, provider: &dyn IdentityProvider) -> Result<()> {
        let User {
            id,
            email,
            user_name,
        } = provider.authenticate()?;
        self.login(id, email, user_name)
    }

    /// Clear the current user and persist the cleared state
    pub fn logout(&mut self) -> Result<()> {
        if let Some(user) = self.current_user.take() {
            tracing::info!("Signed out {}", user.email);
        }
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        self.storage.save(
            STORE_KEY,
            &PersistedSession {
                current_user: self.current_user.clone(),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::scratch_dir;

    fn open(dir: &std::path::Path) -> SessionStore {
        SessionStore::open(Storage::new(dir).unwrap())
    }

    #[test]
    fn test_fresh_store_has_no_user() {
        let store = open(&scratch_dir("session-fresh"));
        assert!(store.current_user().is_none());
        assert!(!store.is_signed_in());
    }

    #[test]
    fn test_login_survives_restart() {
        let dir = scratch_dir("session-login");
        let mut store = open(&dir);
        store.login("1", "test@example.com", "Test User").unwrap();
        let before = store.current_user().cloned();

        let restarted = open(&dir);
        assert_eq!(restarted.current_user().cloned(), before);
        assert_eq!(
            restarted.current_user().map(|u| u.email.as_str()),
            Some("test@example.com")
        );
    }

    #[test]
    fn test_logout_survives_restart() {
        let dir = scratch_dir("session-logout");
        let mut store = open(&dir);
        store.login("1", "test@example.com", "Test User").unwrap();
        store.logout().unwrap();
        assert!(store.current_user().is_none());

        assert!(open(&dir).current_user().is_none());
    }

    #[test]
    fn test_login_replaces_existing_user() {
        let mut store = open(&scratch_dir("session-replace"));
        store.login("1", "a@example.com", "A").unwrap();
        store.login("2", "b@example.com", "B").unwrap();
        assert_eq!(store.current_user().map(|u| u.id.as_str()), Some("2"));
    }

    #[test]
    fn test_login_with_identity_provider() {
        let mut store = open(&scratch_dir("session-provider"));
        let provider = StubIdentity::new(User {
            id: "9".to_string(),
            email: "stub@example.com".to_string(),
            user_name: "Stub".to_string(),
        });
        store.login_with(&provider).unwrap();
        assert_eq!(store.current_user().map(|u| u.id.as_str()), Some("9"));
    }

    #[test]
    fn test_persisted_shape_uses_current_user_key() {
        let dir = scratch_dir("session-shape");
        let mut store = open(&dir);
        store.login("1", "test@example.com", "Test User").unwrap();

        let raw = std::fs::read_to_string(Storage::new(&dir).unwrap().path_for(STORE_KEY)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["currentUser"]["user_name"], "Test User");
    }

    #[test]
    fn test_corrupt_store_rehydrates_as_signed_out() {
        let dir = scratch_dir("session-corrupt");
        let storage = Storage::new(&dir).unwrap();
        std::fs::write(storage.path_for(STORE_KEY), "garbage").unwrap();
        assert!(SessionStore::open(storage).current_user().is_none());
    }
}

//! Identity providers - where a login gets its user from
//!
//! There is no real authentication handshake. `StubIdentity` hands back the
//! user configured under `[identity]`, which stands in for one.

use super::User;
use crate::config::IdentityConfig;
use anyhow::Result;

/// Source of the signed-in user
pub trait IdentityProvider: Send + Sync {
    /// Short name for logs and the login screen
    fn name(&self) -> &str;

    /// Obtain the user to sign in as
    fn authenticate(&self) -> Result<User>;
}

/// Identity provider that always returns a fixed user
#[derive(Debug, Clone)]
pub struct StubIdentity {
    user: User,
}

impl StubIdentity {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    pub fn from_config(config: &IdentityConfig) -> Self {
        Self::new(User {
            id: config.id.clone(),
            email: config.email.clone(),
            user_name: config.user_name.clone(),
        })
    }
}

impl IdentityProvider for StubIdentity {
    fn name(&self) -> &str {
        &self.user.email
    }

    fn authenticate(&self) -> Result<User> {
        Ok(self.user.clone())
    }
}

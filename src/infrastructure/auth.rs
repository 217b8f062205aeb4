//! Static-credential authentication collaborator
//!
//! A placeholder, not a security mechanism: one configured username and
//! password pair, no hashing, no lockout, no session expiry. The logged-in
//! flag is persisted in the snapshot storage so it survives a restart.

use std::sync::Arc;

use crate::domain::{DomainError, SnapshotStorage};

/// Storage key holding the logged-in flag
pub const AUTH_FLAG_KEY: &str = "isAuthenticated";

pub struct AuthService {
    storage: Arc<dyn SnapshotStorage>,
    username: String,
    password: String,
}

impl AuthService {
    pub fn new(storage: Arc<dyn SnapshotStorage>, username: String, password: String) -> Self {
        Self {
            storage,
            username,
            password,
        }
    }

    /// Check the credential pair, persisting the logged-in flag on success
    pub fn login(&self, username: &str, password: &str) -> Result<bool, DomainError> {
        tracing::info!("Login attempt for user: {}", username);

        if username == self.username && password == self.password {
            self.storage.write(AUTH_FLAG_KEY, "true")?;
            Ok(true)
        } else {
            tracing::warn!("Invalid credentials for user: {}", username);
            Ok(false)
        }
    }

    /// Clear the logged-in flag
    pub fn logout(&self) -> Result<(), DomainError> {
        self.storage.remove(AUTH_FLAG_KEY)
    }

    pub fn is_authenticated(&self) -> Result<bool, DomainError> {
        Ok(self.storage.read(AUTH_FLAG_KEY)?.as_deref() == Some("true"))
    }
}

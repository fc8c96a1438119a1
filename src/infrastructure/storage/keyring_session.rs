//! Keyring-based session storage.

use async_trait::async_trait;
use keyring::Entry;
use tracing::{debug, warn};

use crate::domain::entities::Session;
use crate::domain::errors::AuthError;
use crate::domain::ports::SessionStorePort;

const KEYRING_SERVICE: &str = "rationdesk";
const KEYRING_USER: &str = "session";

/// System keyring session storage adapter.
///
/// The whole session (token plus account profile) is stored as one JSON
/// document so a restored session needs no backend round trip.
pub struct KeyringSessionStore {
    service: String,
    user: String,
}

impl KeyringSessionStore {
    /// Creates new storage with default names.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: KEYRING_SERVICE.to_string(),
            user: KEYRING_USER.to_string(),
        }
    }

    /// Creates storage with custom names.
    #[must_use]
    pub fn with_names(service: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            user: user.into(),
        }
    }

    fn entry(&self) -> Result<Entry, AuthError> {
        Entry::new(&self.service, &self.user)
            .map_err(|e| AuthError::retrieval_failed(format!("failed to access keyring: {e}")))
    }
}

impl Default for KeyringSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStorePort for KeyringSessionStore {
    async fn get_session(&self) -> Result<Option<Session>, AuthError> {
        debug!(service = %self.service, "Retrieving session from keyring");

        let entry = self.entry()?;

        match entry.get_password() {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(session) => {
                    debug!("Session found in keyring");
                    Ok(Some(session))
                }
                Err(e) => {
                    warn!(error = %e, "Stored session is unreadable, treating as absent");
                    Ok(None)
                }
            },
            Err(keyring::Error::NoEntry) => {
                debug!("No session stored in keyring");
                Ok(None)
            }
            Err(e) => {
                warn!(error = %e, "Failed to retrieve session from keyring");
                Err(AuthError::retrieval_failed(e.to_string()))
            }
        }
    }

    async fn store_session(&self, session: &Session) -> Result<(), AuthError> {
        debug!(service = %self.service, "Storing session in keyring");

        let raw = serde_json::to_string(session)
            .map_err(|e| AuthError::storage_failed(e.to_string()))?;

        let entry = self.entry()?;

        entry.set_password(&raw).map_err(|e| {
            warn!(error = %e, "Failed to store session in keyring");
            AuthError::storage_failed(e.to_string())
        })?;

        debug!("Session stored successfully");
        Ok(())
    }

    async fn delete_session(&self) -> Result<(), AuthError> {
        debug!(service = %self.service, "Deleting session from keyring");

        let entry = self.entry()?;

        match entry.delete_credential() {
            Ok(()) => {
                debug!("Session deleted from keyring");
                Ok(())
            }
            Err(keyring::Error::NoEntry) => {
                debug!("No session to delete");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Failed to delete session from keyring");
                Err(AuthError::storage_failed(e.to_string()))
            }
        }
    }
}

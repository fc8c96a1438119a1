//! Session resolution use case.

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::dto::SessionSource;
use crate::domain::entities::Session;
use crate::domain::errors::AuthError;
use crate::domain::ports::SessionStorePort;

/// A resolved session with its source.
#[derive(Debug, Clone)]
pub struct ResolvedSession {
    /// The authenticated session.
    pub session: Session,
    /// Where the session came from.
    pub source: SessionSource,
}

impl ResolvedSession {
    /// Creates a new resolved session.
    #[must_use]
    pub const fn new(session: Session, source: SessionSource) -> Self {
        Self { session, source }
    }
}

/// Resolves a previously established session.
///
/// The keyring is the only restore source: a bearer token alone cannot
/// reconstruct the account profile, so anything else means logging in
/// again.
pub struct ResolveSessionUseCase {
    store_port: Arc<dyn SessionStorePort>,
}

impl ResolveSessionUseCase {
    /// Creates a new use case.
    #[must_use]
    pub const fn new(store_port: Arc<dyn SessionStorePort>) -> Self {
        Self { store_port }
    }

    /// Resolves the stored session, if any.
    ///
    /// Storage failures are treated as "no session" so a broken keyring
    /// degrades to a fresh login instead of blocking the client.
    pub async fn execute(&self) -> Option<ResolvedSession> {
        debug!("Checking keyring for stored session");
        match self.store_port.get_session().await {
            Ok(Some(session)) => {
                info!(user_id = session.user_id(), role = %session.role(), "Restored session from keyring");
                Some(ResolvedSession::new(session, SessionSource::Keyring))
            }
            Ok(None) => {
                debug!("No session found in keyring");
                None
            }
            Err(e) => {
                debug!(error = %e, "Failed to read keyring");
                None
            }
        }
    }

    /// Resolves the stored session or fails with [`AuthError::NoSessionAvailable`].
    ///
    /// # Errors
    /// Returns an error when no session is stored.
    pub async fn require(&self) -> Result<Session, AuthError> {
        self.execute()
            .await
            .map(|resolved| resolved.session)
            .ok_or(AuthError::NoSessionAvailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Role, SessionToken, UserAccount};
    use crate::domain::ports::mocks::MockSessionStore;

    fn make_session() -> Session {
        Session::new(
            SessionToken::new_unchecked("stored-token"),
            UserAccount::new(9, "Ravi", "ravi@example.com", Role::Shopkeeper),
        )
    }

    #[tokio::test]
    async fn test_restores_from_keyring() {
        let store = Arc::new(MockSessionStore::with_session(make_session()));
        let use_case = ResolveSessionUseCase::new(store);

        let resolved = use_case.execute().await;

        assert!(resolved.is_some());
        assert_eq!(resolved.unwrap().source, SessionSource::Keyring);
    }

    #[tokio::test]
    async fn test_no_session_resolves_to_none() {
        let store = Arc::new(MockSessionStore::new());
        let use_case = ResolveSessionUseCase::new(store);

        assert!(use_case.execute().await.is_none());
    }

    #[tokio::test]
    async fn test_require_fails_without_session() {
        let store = Arc::new(MockSessionStore::new());
        let use_case = ResolveSessionUseCase::new(store);

        let result = use_case.require().await;

        assert!(matches!(result, Err(AuthError::NoSessionAvailable)));
    }
}

//! Session storage port definition.

use async_trait::async_trait;

use crate::domain::entities::Session;
use crate::domain::errors::AuthError;

/// Port for session persistence operations.
#[async_trait]
pub trait SessionStorePort: Send + Sync {
    /// Retrieves the stored session.
    async fn get_session(&self) -> Result<Option<Session>, AuthError>;

    /// Stores a session securely.
    async fn store_session(&self, session: &Session) -> Result<(), AuthError>;

    /// Deletes the stored session.
    async fn delete_session(&self) -> Result<(), AuthError>;

    /// Checks whether a session is stored.
    async fn has_session(&self) -> Result<bool, AuthError> {
        Ok(self.get_session().await?.is_some())
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// Mock session storage for testing.
    pub struct MockSessionStore {
        session: Arc<RwLock<Option<Session>>>,
    }

    impl MockSessionStore {
        /// Creates empty mock storage.
        pub fn new() -> Self {
            Self {
                session: Arc::new(RwLock::new(None)),
            }
        }

        /// Creates mock storage holding a session.
        pub fn with_session(session: Session) -> Self {
            Self {
                session: Arc::new(RwLock::new(Some(session))),
            }
        }
    }

    impl Default for MockSessionStore {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl SessionStorePort for MockSessionStore {
        async fn get_session(&self) -> Result<Option<Session>, AuthError> {
            Ok(self.session.read().await.clone())
        }

        async fn store_session(&self, session: &Session) -> Result<(), AuthError> {
            *self.session.write().await = Some(session.clone());
            Ok(())
        }

        async fn delete_session(&self) -> Result<(), AuthError> {
            *self.session.write().await = None;
            Ok(())
        }
    }
}

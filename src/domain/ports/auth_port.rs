//! Authentication port definition.

use async_trait::async_trait;

use crate::domain::entities::{Role, Session};
use crate::domain::errors::AuthError;

/// Port for portal authentication operations.
#[async_trait]
pub trait AuthPort: Send + Sync {
    /// Exchanges credentials for an authenticated session.
    async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    /// Registers a new portal account.
    async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<(), AuthError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use crate::domain::entities::{SessionToken, UserAccount};

    /// Mock authentication port for testing.
    pub struct MockAuthPort {
        should_succeed: Arc<AtomicBool>,
        session: Session,
    }

    impl MockAuthPort {
        /// Creates a new mock authenticating as a shopkeeper.
        pub fn new(should_succeed: bool) -> Self {
            Self {
                should_succeed: Arc::new(AtomicBool::new(should_succeed)),
                session: Session::new(
                    SessionToken::new_unchecked("mock-session-token"),
                    UserAccount::new(1, "Test Operator", "operator@example.com", Role::Shopkeeper),
                ),
            }
        }

        /// Sets success behavior.
        pub fn set_should_succeed(&self, value: bool) {
            self.should_succeed.store(value, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl AuthPort for MockAuthPort {
        async fn login(&self, _email: &str, _password: &str) -> Result<Session, AuthError> {
            if self.should_succeed.load(Ordering::SeqCst) {
                Ok(self.session.clone())
            } else {
                Err(AuthError::invalid_credentials("mock rejection"))
            }
        }

        async fn register(
            &self,
            _name: &str,
            _email: &str,
            _password: &str,
            _role: Role,
        ) -> Result<(), AuthError> {
            if self.should_succeed.load(Ordering::SeqCst) {
                Ok(())
            } else {
                Err(AuthError::registration_rejected("mock rejection"))
            }
        }
    }
}

//! Login use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::{LoginOutcome, LoginRequest};
use crate::domain::errors::AuthError;
use crate::domain::ports::{AuthPort, SessionStorePort};

/// Handles the credential login workflow.
#[derive(Clone)]
pub struct LoginUseCase {
    auth_port: Arc<dyn AuthPort>,
    store_port: Arc<dyn SessionStorePort>,
}

impl LoginUseCase {
    /// Creates a new login use case.
    #[must_use]
    pub const fn new(auth_port: Arc<dyn AuthPort>, store_port: Arc<dyn SessionStorePort>) -> Self {
        Self {
            auth_port,
            store_port,
        }
    }

    /// Executes login with the provided request.
    ///
    /// # Errors
    /// Returns an error if the credentials are malformed or rejected.
    pub async fn execute(&self, request: LoginRequest) -> Result<LoginOutcome, AuthError> {
        debug!(email = %request.email, "Attempting login");

        if !looks_like_email(&request.email) {
            warn!("Malformed login email provided");
            return Err(AuthError::invalid_credentials(
                "email is not a valid address",
            ));
        }

        if request.password.is_empty() {
            return Err(AuthError::invalid_credentials("password must not be empty"));
        }

        let session = self
            .auth_port
            .login(&request.email, &request.password)
            .await
            .map_err(|e| {
                warn!(error = %e, "Login rejected");
                e
            })?;

        info!(
            user_id = session.user_id(),
            role = %session.role(),
            "Successfully authenticated"
        );

        let session_persisted = if request.persist_session {
            match self.store_port.store_session(&session).await {
                Ok(()) => {
                    info!("Session persisted to secure storage");
                    true
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to persist session to secure storage");
                    false
                }
            }
        } else {
            debug!("Session persistence disabled, skipping storage");
            false
        };

        Ok(LoginOutcome::new(session, session_persisted))
    }

    /// Deletes the stored session.
    ///
    /// # Errors
    /// Returns an error if deletion fails.
    pub async fn logout(&self) -> Result<(), AuthError> {
        debug!("Deleting session from secure storage");
        match self.store_port.delete_session().await {
            Ok(()) => {
                info!("Session deleted from secure storage");
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to delete session from secure storage");
                Err(e)
            }
        }
    }
}

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !value.chars().any(char::is_whitespace)
}

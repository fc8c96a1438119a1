//! Authentication endpoints of the portal backend.

use async_trait::async_trait;
use tracing::debug;

use super::client::PortalClient;
use super::dto::{LoginBody, LoginResponse, RegisterBody};
use crate::domain::entities::{Role, Session, SessionToken};
use crate::domain::errors::{AuthError, GatewayError};
use crate::domain::ports::AuthPort;

fn login_error(e: GatewayError) -> AuthError {
    match e {
        GatewayError::Unauthorized => AuthError::invalid_credentials("wrong email or password"),
        GatewayError::Rejected { message } | GatewayError::Forbidden { message } => {
            AuthError::invalid_credentials(message)
        }
        GatewayError::NotFound { message } => AuthError::invalid_credentials(message),
        e if e.is_transport() => AuthError::network(e.to_string()),
        e => AuthError::unexpected(e.to_string()),
    }
}

#[async_trait]
impl AuthPort for PortalClient {
    async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        debug!(email, "Logging in against the portal backend");

        let response: LoginResponse = self
            .post_json("Auth/login", &LoginBody { email, password })
            .await
            .map_err(login_error)?;

        let token = SessionToken::new(response.token)
            .ok_or_else(|| AuthError::unexpected("backend returned an empty session token"))?;

        Ok(Session::new(token, response.user.into()))
    }

    async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<(), AuthError> {
        debug!(email, %role, "Registering a new account");

        self.post_unit(
            "Auth/register",
            &RegisterBody {
                name,
                email,
                password,
                role,
            },
        )
        .await
        .map_err(|e| match e {
            e if e.is_transport() => AuthError::network(e.to_string()),
            e => AuthError::registration_rejected(e.message().to_string()),
        })
    }
}

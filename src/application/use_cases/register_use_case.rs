//! Account registration use case.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::RegisterRequest;
use crate::domain::errors::AuthError;
use crate::domain::ports::AuthPort;

/// Handles new account registration.
///
/// Input checks mirror the portal's form validation; the backend remains
/// the authority on uniqueness and role policy.
#[derive(Clone)]
pub struct RegisterUseCase {
    auth_port: Arc<dyn AuthPort>,
}

impl RegisterUseCase {
    /// Creates a new registration use case.
    #[must_use]
    pub const fn new(auth_port: Arc<dyn AuthPort>) -> Self {
        Self { auth_port }
    }

    /// Executes registration with the provided request.
    ///
    /// # Errors
    /// Returns an error if the request is malformed or the backend refuses
    /// it.
    pub async fn execute(&self, request: RegisterRequest) -> Result<(), AuthError> {
        debug!(email = %request.email, role = %request.role, "Attempting registration");

        validate(&request)?;

        self.auth_port
            .register(
                &request.name,
                &request.email,
                &request.password,
                request.role,
            )
            .await
            .map_err(|e| {
                warn!(error = %e, "Registration rejected");
                e
            })?;

        info!(email = %request.email, role = %request.role, "Account registered");
        Ok(())
    }
}

fn validate(request: &RegisterRequest) -> Result<(), AuthError> {
    let name = request.name.trim();
    if name.len() < 3 || !name.chars().all(|c| c.is_alphabetic() || c == ' ') {
        return Err(AuthError::invalid_credentials(
            "name must be at least 3 letters",
        ));
    }

    if !request.email.contains('@')
        || request.email.chars().any(char::is_whitespace)
        || !request
            .email
            .rsplit_once('@')
            .is_some_and(|(_, domain)| domain.contains('.'))
    {
        return Err(AuthError::invalid_credentials(
            "email is not a valid address",
        ));
    }

    let password = request.password.as_str();
    let strong = password.len() >= 6
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| "@$!%*?&".contains(c));

    if !strong {
        return Err(AuthError::invalid_credentials(
            "password needs 6+ characters with upper, lower, digit and special",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Role;
    use crate::domain::ports::mocks::MockAuthPort;
    use test_case::test_case;

    fn valid_request() -> RegisterRequest {
        RegisterRequest::new("Asha Devi", "asha@example.com", "Str0ng!pw", Role::Citizen)
    }

    #[tokio::test]
    async fn test_successful_registration() {
        let use_case = RegisterUseCase::new(Arc::new(MockAuthPort::new(true)));

        assert!(use_case.execute(valid_request()).await.is_ok());
    }

    #[test_case("Jo" ; "name too short")]
    #[test_case("R2D2" ; "name with digits")]
    fn test_invalid_name(name: &str) {
        let mut request = valid_request();
        request.name = name.to_string();
        assert!(validate(&request).is_err());
    }

    #[test_case("no-at-sign" ; "missing at")]
    #[test_case("a@nodot" ; "missing dot in domain")]
    #[test_case("a b@example.com" ; "whitespace")]
    fn test_invalid_email(email: &str) {
        let mut request = valid_request();
        request.email = email.to_string();
        assert!(validate(&request).is_err());
    }

    #[test_case("short" ; "too short")]
    #[test_case("alllowercase1!" ; "no uppercase")]
    #[test_case("NoSpecial1" ; "no special")]
    #[test_case("NoDigits!!" ; "no digit")]
    fn test_weak_password(password: &str) {
        let request = RegisterRequest::new("Asha Devi", "asha@example.com", password, Role::Citizen);
        assert!(validate(&request).is_err());
    }

    #[tokio::test]
    async fn test_backend_rejection_is_surfaced() {
        let use_case = RegisterUseCase::new(Arc::new(MockAuthPort::new(false)));

        let result = use_case.execute(valid_request()).await;

        assert!(matches!(
            result,
            Err(AuthError::RegistrationRejected { .. })
        ));
    }
}

//! Authentication and session storage error types.

use thiserror::Error;

/// Authentication error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum AuthError {
    #[error("invalid credentials: {reason}")]
    InvalidCredentials { reason: String },

    #[error("registration rejected by the portal: {message}")]
    RegistrationRejected { message: String },

    #[error("failed to retrieve stored session: {message}")]
    SessionRetrievalFailed { message: String },

    #[error("failed to store session: {message}")]
    SessionStorageFailed { message: String },

    #[error("no session available; log in first")]
    NoSessionAvailable,

    #[error("network error during authentication: {message}")]
    NetworkError { message: String },

    #[error("unexpected authentication error: {message}")]
    Unexpected { message: String },
}

impl AuthError {
    /// Creates an invalid-credentials error.
    #[must_use]
    pub fn invalid_credentials(reason: impl Into<String>) -> Self {
        Self::InvalidCredentials {
            reason: reason.into(),
        }
    }

    /// Creates a registration-rejected error.
    #[must_use]
    pub fn registration_rejected(message: impl Into<String>) -> Self {
        Self::RegistrationRejected {
            message: message.into(),
        }
    }

    /// Creates a network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::NetworkError {
            message: message.into(),
        }
    }

    /// Creates a retrieval-failed error.
    #[must_use]
    pub fn retrieval_failed(message: impl Into<String>) -> Self {
        Self::SessionRetrievalFailed {
            message: message.into(),
        }
    }

    /// Creates a storage-failed error.
    #[must_use]
    pub fn storage_failed(message: impl Into<String>) -> Self {
        Self::SessionStorageFailed {
            message: message.into(),
        }
    }

    /// Creates an unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether the error is recoverable by retrying or re-entering
    /// credentials.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NetworkError { .. }
                | Self::InvalidCredentials { .. }
                | Self::NoSessionAvailable
        )
    }
}

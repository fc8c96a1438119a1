//! Portal gateway error types.

use thiserror::Error;

/// Error raised by the backend gateway ports.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum GatewayError {
    #[error("cannot reach the portal backend: {message}")]
    Transport { message: String },

    #[error("session expired or unauthorized")]
    Unauthorized,

    #[error("access denied: {message}")]
    Forbidden { message: String },

    #[error("not found: {message}")]
    NotFound { message: String },

    #[error("request refused by the portal: {message}")]
    Rejected { message: String },

    #[error("failed to decode portal response: {message}")]
    Decode { message: String },
}

impl GatewayError {
    /// Creates a transport error.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Creates a forbidden error.
    #[must_use]
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Creates a not-found error.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Creates a rejected error.
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Creates a decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Returns whether the error is a connectivity problem rather than an
    /// explicit backend decision.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Decode { .. })
    }

    /// Returns whether the caller must re-authenticate.
    #[must_use]
    pub const fn is_session_expired(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Backend-provided reason, when one exists.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Transport { message }
            | Self::Forbidden { message }
            | Self::NotFound { message }
            | Self::Rejected { message }
            | Self::Decode { message } => message,
            Self::Unauthorized => "session expired or unauthorized",
        }
    }
}

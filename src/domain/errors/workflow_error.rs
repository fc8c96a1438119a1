//! Distribution workflow error types.

use thiserror::Error;

/// Error raised by the distribution workflow.
///
/// Validation failures are caught before any network call; everything else
/// carries the backend's answer. No variant is fatal: the workflow holds
/// its state and the operator decides what to do next.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum WorkflowError {
    #[error("invalid input: {reason}")]
    Validation { reason: String },

    #[error("citizen {card_number} is not registered under this shop")]
    CitizenNotFound { card_number: String },

    #[error("failed to dispatch OTP: {message}")]
    Dispatch { message: String },

    #[error("cannot reach the portal backend: {message}")]
    Transport { message: String },

    #[error("distribution refused: {reason}")]
    OtpRejected { reason: String },

    #[error("{operation} is not valid in the {state} state")]
    IllegalState {
        operation: &'static str,
        state: &'static str,
    },

    #[error("session expired; log in again")]
    SessionExpired,
}

impl WorkflowError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }

    /// Creates a citizen-not-found error.
    #[must_use]
    pub fn citizen_not_found(card_number: impl Into<String>) -> Self {
        Self::CitizenNotFound {
            card_number: card_number.into(),
        }
    }

    /// Creates an OTP dispatch error.
    #[must_use]
    pub fn dispatch(message: impl Into<String>) -> Self {
        Self::Dispatch {
            message: message.into(),
        }
    }

    /// Creates a transport error.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Creates an OTP-rejected error.
    #[must_use]
    pub fn otp_rejected(reason: impl Into<String>) -> Self {
        Self::OtpRejected {
            reason: reason.into(),
        }
    }

    /// Creates an illegal-state error.
    #[must_use]
    pub const fn illegal_state(operation: &'static str, state: &'static str) -> Self {
        Self::IllegalState { operation, state }
    }

    /// Returns whether the operator can retry without resetting the
    /// workflow.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::IllegalState { .. } | Self::SessionExpired)
    }
}

//! Authentication DTOs.

use std::fmt;

use zeroize::Zeroizing;

use crate::domain::entities::{Role, Session};

/// Where the active session came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSource {
    /// Restored from the system keyring.
    Keyring,
    /// Produced by an interactive login.
    FreshLogin,
}

impl SessionSource {
    /// Returns a human-readable description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Keyring => "system keyring",
            Self::FreshLogin => "interactive login",
        }
    }
}

impl fmt::Display for SessionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Login request data.
#[derive(Clone)]
pub struct LoginRequest {
    /// Login email.
    pub email: String,
    /// Password, wiped from memory on drop.
    pub password: Zeroizing<String>,
    /// Whether to persist the session.
    pub persist_session: bool,
}

impl LoginRequest {
    /// Creates a new login request.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Zeroizing::new(password.into()),
            persist_session: true,
        }
    }

    /// Disables session persistence.
    #[must_use]
    pub fn without_persistence(mut self) -> Self {
        self.persist_session = false;
        self
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"********")
            .field("persist_session", &self.persist_session)
            .finish()
    }
}

/// Login outcome data.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The authenticated session.
    pub session: Session,
    /// Whether the session was persisted.
    pub session_persisted: bool,
}

impl LoginOutcome {
    /// Creates a new login outcome.
    #[must_use]
    pub const fn new(session: Session, session_persisted: bool) -> Self {
        Self {
            session,
            session_persisted,
        }
    }
}

/// Registration request data.
#[derive(Clone)]
pub struct RegisterRequest {
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Password, wiped from memory on drop.
    pub password: Zeroizing<String>,
    /// Requested role.
    pub role: Role,
}

impl RegisterRequest {
    /// Creates a new registration request.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: Zeroizing::new(password.into()),
            role,
        }
    }
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"********")
            .field("role", &self.role)
            .finish()
    }
}

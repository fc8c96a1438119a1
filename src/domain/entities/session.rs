//! Authenticated portal session.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::user::{Role, UserAccount};

/// Bearer token issued by the portal backend on login.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken {
    value: String,
}

impl SessionToken {
    /// Creates a token, rejecting empty or whitespace-only input.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into().trim().to_string();

        if value.is_empty() {
            return None;
        }

        Some(Self { value })
    }

    /// Creates a token without validation.
    #[must_use]
    pub fn new_unchecked(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Returns the token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Consumes the token and returns the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.value
    }

    /// Returns a masked rendition for display.
    #[must_use]
    pub fn masked(&self) -> String {
        if self.value.len() <= 10 {
            return "*".repeat(self.value.len());
        }

        let visible_prefix = &self.value[..4];
        let visible_suffix = &self.value[self.value.len() - 4..];
        format!("{visible_prefix}...{visible_suffix}")
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionToken")
            .field("value", &self.masked())
            .finish()
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}

/// Authenticated session: token plus the account it belongs to.
///
/// Passed explicitly into use cases and workflows; nothing in the crate
/// reads ambient session state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    token: SessionToken,
    user: UserAccount,
}

impl Session {
    /// Creates a session from a token and its account.
    #[must_use]
    pub const fn new(token: SessionToken, user: UserAccount) -> Self {
        Self { token, user }
    }

    /// The bearer token.
    #[must_use]
    pub const fn token(&self) -> &SessionToken {
        &self.token
    }

    /// The authenticated account.
    #[must_use]
    pub const fn user(&self) -> &UserAccount {
        &self.user
    }

    /// Backend identifier of the authenticated account.
    #[must_use]
    pub const fn user_id(&self) -> i64 {
        self.user.user_id()
    }

    /// Role of the authenticated account.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.user.role()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_token_is_rejected() {
        assert!(SessionToken::new("   ").is_none());
    }

    #[test]
    fn test_token_masking() {
        let token = SessionToken::new_unchecked("eyJhbGciOiJIUzI1NiJ9.payload.signature");
        let masked = token.masked();

        assert!(masked.contains("..."));
        assert!(!masked.contains("payload"));
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let token = SessionToken::new_unchecked("eyJhbGciOiJIUzI1NiJ9.payload.signature");
        let debug_output = format!("{token:?}");

        assert!(!debug_output.contains("signature"));
    }

    #[test]
    fn test_session_accessors() {
        let session = Session::new(
            SessionToken::new_unchecked("token-value"),
            UserAccount::new(42, "Ravi", "ravi@example.com", Role::Shopkeeper),
        );

        assert_eq!(session.user_id(), 42);
        assert_eq!(session.role(), Role::Shopkeeper);
        assert_eq!(session.token().as_str(), "token-value");
    }
}

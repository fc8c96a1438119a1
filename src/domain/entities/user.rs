//! Portal user account entity.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Portal role, decides which backend surface an account may call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Central administrator.
    Admin,
    /// Fair-price shop operator.
    Shopkeeper,
    /// Ration card holder.
    Citizen,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => write!(f, "ADMIN"),
            Self::Shopkeeper => write!(f, "SHOPKEEPER"),
            Self::Citizen => write!(f, "CITIZEN"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Ok(Self::Admin),
            "SHOPKEEPER" => Ok(Self::Shopkeeper),
            "CITIZEN" => Ok(Self::Citizen),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// Account lifecycle status as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountStatus {
    /// Awaiting administrator approval (new shopkeepers).
    Pending,
    /// Approved and usable.
    Active,
    /// Suspended by an administrator.
    Suspended,
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Active => write!(f, "Active"),
            Self::Suspended => write!(f, "Suspended"),
        }
    }
}

/// A portal user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    user_id: i64,
    name: String,
    email: String,
    role: Role,
    status: Option<AccountStatus>,
    created_at: Option<NaiveDateTime>,
}

impl UserAccount {
    /// Creates a new account record.
    #[must_use]
    pub fn new(user_id: i64, name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            user_id,
            name: name.into(),
            email: email.into(),
            role,
            status: None,
            created_at: None,
        }
    }

    /// Attaches the account status.
    #[must_use]
    pub const fn with_status(mut self, status: AccountStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Attaches the registration timestamp.
    #[must_use]
    pub const fn with_created_at(mut self, created_at: NaiveDateTime) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Backend identifier of the account.
    #[must_use]
    pub const fn user_id(&self) -> i64 {
        self.user_id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Login email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Portal role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Account status, when the backend reported one.
    #[must_use]
    pub const fn status(&self) -> Option<AccountStatus> {
        self.status
    }

    /// Registration timestamp, when the backend reported one.
    #[must_use]
    pub const fn created_at(&self) -> Option<NaiveDateTime> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in [Role::Admin, Role::Shopkeeper, Role::Citizen] {
            let parsed: Role = role.to_string().parse().unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn test_role_parse_is_case_insensitive() {
        assert_eq!("shopkeeper".parse::<Role>().unwrap(), Role::Shopkeeper);
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        assert!("AUDITOR".parse::<Role>().is_err());
    }

    #[test]
    fn test_account_builders() {
        let account = UserAccount::new(7, "Asha", "asha@example.com", Role::Shopkeeper)
            .with_status(AccountStatus::Pending);

        assert_eq!(account.user_id(), 7);
        assert_eq!(account.role(), Role::Shopkeeper);
        assert_eq!(account.status(), Some(AccountStatus::Pending));
        assert!(account.created_at().is_none());
    }
}

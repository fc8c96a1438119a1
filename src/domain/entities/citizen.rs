//! Citizen (ration card holder) entities.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::card_number::CardNumber;

/// A citizen household registered under a fair-price shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Citizen {
    card_number: CardNumber,
    head_of_family_name: String,
    family_member_count: u32,
    address: String,
    citizen_email: String,
    status: String,
    issue_date: Option<NaiveDateTime>,
    shop_name: Option<String>,
}

impl Citizen {
    #[must_use]
    pub fn new(
        card_number: CardNumber,
        head_of_family_name: impl Into<String>,
        family_member_count: u32,
        address: impl Into<String>,
        citizen_email: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            card_number,
            head_of_family_name: head_of_family_name.into(),
            family_member_count,
            address: address.into(),
            citizen_email: citizen_email.into(),
            status: status.into(),
            issue_date: None,
            shop_name: None,
        }
    }

    #[must_use]
    pub const fn with_issue_date(mut self, issue_date: NaiveDateTime) -> Self {
        self.issue_date = Some(issue_date);
        self
    }

    #[must_use]
    pub fn with_shop_name(mut self, shop_name: impl Into<String>) -> Self {
        self.shop_name = Some(shop_name.into());
        self
    }

    #[must_use]
    pub const fn card_number(&self) -> &CardNumber {
        &self.card_number
    }

    #[must_use]
    pub fn head_of_family_name(&self) -> &str {
        &self.head_of_family_name
    }

    #[must_use]
    pub const fn family_member_count(&self) -> u32 {
        self.family_member_count
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    #[must_use]
    pub fn citizen_email(&self) -> &str {
        &self.citizen_email
    }

    /// Card status string as reported by the backend.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    #[must_use]
    pub const fn issue_date(&self) -> Option<NaiveDateTime> {
        self.issue_date
    }

    /// Owning shop name, present on administrator family listings.
    #[must_use]
    pub fn shop_name(&self) -> Option<&str> {
        self.shop_name.as_deref()
    }
}

/// Payload for registering a new citizen under a shop.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCitizen {
    /// Card number to issue, twelve digits.
    pub card_number: CardNumber,
    /// Login email of the citizen account.
    pub citizen_email: String,
    /// Head of family display name.
    pub head_of_family_name: String,
    /// Number of family members on the card.
    pub family_member_count: u32,
    /// Household address.
    pub address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_citizen_accessors() {
        let citizen = Citizen::new(
            CardNumber::new_unchecked("123456789012"),
            "Meena Kumari",
            4,
            "12 Gandhi Road",
            "meena@example.com",
            "Active",
        );

        assert_eq!(citizen.card_number().as_str(), "123456789012");
        assert_eq!(citizen.family_member_count(), 4);
        assert_eq!(citizen.status(), "Active");
        assert!(citizen.shop_name().is_none());
    }
}

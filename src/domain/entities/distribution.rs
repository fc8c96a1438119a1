//! Distribution records and quotes.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::card_number::CardNumber;
use super::citizen::Citizen;
use super::entitlement::{Entitlement, GrainType};

/// Outcome of a committed distribution as recorded by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistributionStatus {
    Success,
    Pending,
    Failed,
}

impl std::fmt::Display for DistributionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "Success"),
            Self::Pending => write!(f, "Pending"),
            Self::Failed => write!(f, "Failed"),
        }
    }
}

/// A distribution committed by the backend. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionRecord {
    distribution_id: i64,
    card_number: CardNumber,
    head_of_family: Option<String>,
    grain: GrainType,
    quantity_given: f64,
    distribution_date: Option<NaiveDateTime>,
    status: DistributionStatus,
}

impl DistributionRecord {
    #[must_use]
    pub fn new(
        distribution_id: i64,
        card_number: CardNumber,
        grain: GrainType,
        quantity_given: f64,
        status: DistributionStatus,
    ) -> Self {
        Self {
            distribution_id,
            card_number,
            head_of_family: None,
            grain,
            quantity_given,
            distribution_date: None,
            status,
        }
    }

    #[must_use]
    pub fn with_head_of_family(mut self, head_of_family: impl Into<String>) -> Self {
        self.head_of_family = Some(head_of_family.into());
        self
    }

    #[must_use]
    pub const fn with_date(mut self, distribution_date: NaiveDateTime) -> Self {
        self.distribution_date = Some(distribution_date);
        self
    }

    #[must_use]
    pub const fn distribution_id(&self) -> i64 {
        self.distribution_id
    }

    #[must_use]
    pub const fn card_number(&self) -> &CardNumber {
        &self.card_number
    }

    #[must_use]
    pub fn head_of_family(&self) -> Option<&str> {
        self.head_of_family.as_deref()
    }

    #[must_use]
    pub const fn grain(&self) -> GrainType {
        self.grain
    }

    /// Kilograms handed over.
    #[must_use]
    pub const fn quantity_given(&self) -> f64 {
        self.quantity_given
    }

    #[must_use]
    pub const fn distribution_date(&self) -> Option<NaiveDateTime> {
        self.distribution_date
    }

    #[must_use]
    pub const fn status(&self) -> DistributionStatus {
        self.status
    }
}

/// Quantity owed to a family for one grain, shown to the operator before
/// an OTP is requested.
///
/// `computed_quantity` is always `family_member_count ×
/// quantity_per_person`. A grain with no active entitlement quotes zero
/// rather than failing; callers must surface [`Self::entitlement_missing`].
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionQuote {
    grain: GrainType,
    quantity_per_person: Option<f64>,
    computed_quantity: f64,
}

impl DistributionQuote {
    /// Computes the quote for a citizen and grain from the entitlement
    /// list.
    #[must_use]
    pub fn compute(citizen: &Citizen, grain: GrainType, entitlements: &[Entitlement]) -> Self {
        let quantity_per_person = entitlements
            .iter()
            .find(|e| e.grain() == grain)
            .map(Entitlement::quantity_per_person);

        let computed_quantity = quantity_per_person
            .map_or(0.0, |per_person| f64::from(citizen.family_member_count()) * per_person);

        Self {
            grain,
            quantity_per_person,
            computed_quantity,
        }
    }

    #[must_use]
    pub const fn grain(&self) -> GrainType {
        self.grain
    }

    /// Per-person quantity backing the quote, absent when no entitlement
    /// exists for the grain.
    #[must_use]
    pub const fn quantity_per_person(&self) -> Option<f64> {
        self.quantity_per_person
    }

    /// Total kilograms owed to the family.
    #[must_use]
    pub const fn computed_quantity(&self) -> f64 {
        self.computed_quantity
    }

    /// True when the grain has no active entitlement and the quote is a
    /// placeholder zero.
    #[must_use]
    pub const fn entitlement_missing(&self) -> bool {
        self.quantity_per_person.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn citizen_with_members(count: u32) -> Citizen {
        Citizen::new(
            CardNumber::new_unchecked("123456789012"),
            "Meena Kumari",
            count,
            "12 Gandhi Road",
            "meena@example.com",
            "Active",
        )
    }

    #[test_case(4, 5.0, 20.0 ; "whole kilograms")]
    #[test_case(3, 1.5, 4.5 ; "fractional per person")]
    #[test_case(1, 0.25, 0.25 ; "single member")]
    #[test_case(10, 2.0, 20.0 ; "large family")]
    fn test_quote_is_exact_product(members: u32, per_person: f64, expected: f64) {
        let citizen = citizen_with_members(members);
        let entitlements = vec![Entitlement::new(GrainType::Rice, per_person)];

        let quote = DistributionQuote::compute(&citizen, GrainType::Rice, &entitlements);

        assert_eq!(quote.computed_quantity(), expected);
        assert_eq!(quote.quantity_per_person(), Some(per_person));
        assert!(!quote.entitlement_missing());
    }

    #[test]
    fn test_missing_entitlement_quotes_zero() {
        // Upstream policy: an unconfigured grain quotes zero instead of
        // rejecting the selection. The flag is how callers tell the two
        // zero cases apart.
        let citizen = citizen_with_members(4);
        let entitlements = vec![Entitlement::new(GrainType::Rice, 5.0)];

        let quote = DistributionQuote::compute(&citizen, GrainType::Sugar, &entitlements);

        assert_eq!(quote.computed_quantity(), 0.0);
        assert!(quote.entitlement_missing());
    }

    #[test]
    fn test_quote_picks_matching_grain() {
        let citizen = citizen_with_members(2);
        let entitlements = vec![
            Entitlement::new(GrainType::Rice, 5.0),
            Entitlement::new(GrainType::Wheat, 4.0),
        ];

        let quote = DistributionQuote::compute(&citizen, GrainType::Wheat, &entitlements);

        assert_eq!(quote.computed_quantity(), 8.0);
    }
}

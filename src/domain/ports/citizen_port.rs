//! Citizen gateway port definition.

use async_trait::async_trait;

use crate::domain::entities::{CardNumber, Citizen, DistributionRecord, Entitlement};
use crate::domain::errors::GatewayError;

/// Port for the citizen surface of the portal backend.
#[async_trait]
pub trait CitizenPort: Send + Sync {
    /// Fetches the ration card attached to a login email.
    async fn my_ration_card(&self, email: &str) -> Result<Citizen, GatewayError>;

    /// Fetches the active entitlement list visible to citizens.
    async fn my_entitlements(&self) -> Result<Vec<Entitlement>, GatewayError>;

    /// Fetches distributions received against a card.
    async fn my_distributions(
        &self,
        card_number: &CardNumber,
    ) -> Result<Vec<DistributionRecord>, GatewayError>;
}

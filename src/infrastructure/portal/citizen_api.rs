//! Citizen endpoints of the portal backend.

use async_trait::async_trait;

use super::client::PortalClient;
use super::dto::{CitizenResponse, DistributionResponse, EntitlementResponse};
use crate::domain::entities::{CardNumber, Citizen, DistributionRecord, Entitlement};
use crate::domain::errors::GatewayError;
use crate::domain::ports::CitizenPort;

#[async_trait]
impl CitizenPort for PortalClient {
    async fn my_ration_card(&self, email: &str) -> Result<Citizen, GatewayError> {
        let dto: CitizenResponse = self
            .get_json(&format!("Citizen/my-ration-card/{email}"))
            .await?;
        Ok(dto.into())
    }

    async fn my_entitlements(&self) -> Result<Vec<Entitlement>, GatewayError> {
        let dtos: Vec<EntitlementResponse> = self.get_json("Citizen/my-entitlements").await?;
        Ok(dtos.into_iter().map(Into::into).collect())
    }

    async fn my_distributions(
        &self,
        card_number: &CardNumber,
    ) -> Result<Vec<DistributionRecord>, GatewayError> {
        let dtos: Vec<DistributionResponse> = self
            .get_json(&format!("Citizen/my-distributions/{card_number}"))
            .await?;
        Ok(dtos.into_iter().map(Into::into).collect())
    }
}

//! Shopkeeper endpoints of the portal backend.

use async_trait::async_trait;
use tracing::debug;

use super::client::PortalClient;
use super::dto::{
    AllocationResponse, CitizenResponse, DistributeBody, DistributionResponse,
    EntitlementResponse, GenerateOtpBody, NewCitizenBody, ShopResponse, StockLevelResponse,
};
use crate::domain::entities::{
    CardNumber, Citizen, DistributionRecord, Entitlement, GrainType, NewCitizen, OtpCode, Shop,
    StockAllocation, StockLevel,
};
use crate::domain::errors::GatewayError;
use crate::domain::ports::ShopkeeperPort;

#[async_trait]
impl ShopkeeperPort for PortalClient {
    async fn my_shop(&self, shopkeeper_id: i64) -> Result<Shop, GatewayError> {
        let dto: ShopResponse = self
            .get_json(&format!("Shopkeeper/{shopkeeper_id}/shop"))
            .await?;
        Ok(dto.into())
    }

    async fn citizens_under_shop(&self, shopkeeper_id: i64) -> Result<Vec<Citizen>, GatewayError> {
        debug!(shopkeeper_id, "Fetching citizens under shop");
        let dtos: Vec<CitizenResponse> = self
            .get_json(&format!("Shopkeeper/{shopkeeper_id}/citizens"))
            .await?;
        Ok(dtos.into_iter().map(Into::into).collect())
    }

    async fn add_citizen(
        &self,
        shopkeeper_id: i64,
        citizen: &NewCitizen,
    ) -> Result<(), GatewayError> {
        self.post_unit(
            &format!("Shopkeeper/{shopkeeper_id}/add-citizen"),
            &NewCitizenBody {
                card_number: citizen.card_number.as_str(),
                citizen_email: &citizen.citizen_email,
                head_of_family_name: &citizen.head_of_family_name,
                family_member_count: citizen.family_member_count,
                address: &citizen.address,
            },
        )
        .await
    }

    async fn entitlements(&self) -> Result<Vec<Entitlement>, GatewayError> {
        // Entitlements live on the admin surface but are readable by any
        // authenticated role.
        let dtos: Vec<EntitlementResponse> = self.get_json("Admin/entitlements").await?;
        Ok(dtos.into_iter().map(Into::into).collect())
    }

    async fn my_allocations(
        &self,
        shopkeeper_id: i64,
    ) -> Result<Vec<StockAllocation>, GatewayError> {
        let dtos: Vec<AllocationResponse> = self
            .get_json(&format!("Shopkeeper/stock-allocation/{shopkeeper_id}"))
            .await?;
        Ok(dtos.into_iter().map(Into::into).collect())
    }

    async fn confirm_pending_stock(&self, shopkeeper_id: i64) -> Result<(), GatewayError> {
        self.put_unit(&format!(
            "Shopkeeper/confirm-all-pending-stock/{shopkeeper_id}"
        ))
        .await
    }

    async fn current_stock(&self, shop_id: i64) -> Result<Vec<StockLevel>, GatewayError> {
        let dtos: Vec<StockLevelResponse> = self
            .get_json(&format!("Shopkeeper/my-stock/{shop_id}"))
            .await?;
        Ok(dtos.into_iter().map(Into::into).collect())
    }

    async fn request_otp(
        &self,
        shopkeeper_id: i64,
        card_number: &CardNumber,
    ) -> Result<(), GatewayError> {
        debug!(shopkeeper_id, card = %card_number, "Requesting OTP dispatch");
        self.post_unit(
            "Shopkeeper/generate-otp",
            &GenerateOtpBody {
                shopkeeper_id,
                card_number: card_number.as_str(),
            },
        )
        .await
    }

    async fn distribute(
        &self,
        card_number: &CardNumber,
        grain: GrainType,
        otp: &OtpCode,
    ) -> Result<DistributionRecord, GatewayError> {
        debug!(card = %card_number, %grain, "Committing distribution");
        let dto: DistributionResponse = self
            .post_json(
                "Shopkeeper/distribute-ration",
                &DistributeBody {
                    card_number: card_number.as_str(),
                    grain,
                    otp: otp.as_str(),
                },
            )
            .await?;
        Ok(dto.into())
    }

    async fn distribution_history(
        &self,
        shopkeeper_id: i64,
    ) -> Result<Vec<DistributionRecord>, GatewayError> {
        let dtos: Vec<DistributionResponse> = self
            .get_json(&format!("Shopkeeper/distribution-history/{shopkeeper_id}"))
            .await?;
        Ok(dtos.into_iter().map(Into::into).collect())
    }
}

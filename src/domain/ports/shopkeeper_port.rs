//! Shopkeeper gateway port definition.

use async_trait::async_trait;

use crate::domain::entities::{
    CardNumber, Citizen, DistributionRecord, Entitlement, GrainType, NewCitizen, OtpCode, Shop,
    StockAllocation, StockLevel,
};
use crate::domain::errors::GatewayError;

/// Port for the shopkeeper surface of the portal backend.
///
/// `shopkeeper_id` is always the authenticated operator's account id; the
/// backend scopes every lookup to that operator's shop.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShopkeeperPort: Send + Sync {
    /// Fetches the shop owned by the operator.
    async fn my_shop(&self, shopkeeper_id: i64) -> Result<Shop, GatewayError>;

    /// Fetches the citizens registered under the operator's shop.
    async fn citizens_under_shop(&self, shopkeeper_id: i64) -> Result<Vec<Citizen>, GatewayError>;

    /// Registers a new citizen under the operator's shop.
    async fn add_citizen(
        &self,
        shopkeeper_id: i64,
        citizen: &NewCitizen,
    ) -> Result<(), GatewayError>;

    /// Fetches the active entitlement list.
    async fn entitlements(&self) -> Result<Vec<Entitlement>, GatewayError>;

    /// Fetches the operator's stock allocations.
    async fn my_allocations(
        &self,
        shopkeeper_id: i64,
    ) -> Result<Vec<StockAllocation>, GatewayError>;

    /// Confirms receipt of all pending stock allocations.
    async fn confirm_pending_stock(&self, shopkeeper_id: i64) -> Result<(), GatewayError>;

    /// Fetches current stock levels of a shop.
    async fn current_stock(&self, shop_id: i64) -> Result<Vec<StockLevel>, GatewayError>;

    /// Asks the backend to email an OTP to the card holder.
    async fn request_otp(
        &self,
        shopkeeper_id: i64,
        card_number: &CardNumber,
    ) -> Result<(), GatewayError>;

    /// Commits a distribution; the backend validates the OTP.
    async fn distribute(
        &self,
        card_number: &CardNumber,
        grain: GrainType,
        otp: &OtpCode,
    ) -> Result<DistributionRecord, GatewayError>;

    /// Fetches the operator's distribution history.
    async fn distribution_history(
        &self,
        shopkeeper_id: i64,
    ) -> Result<Vec<DistributionRecord>, GatewayError>;
}

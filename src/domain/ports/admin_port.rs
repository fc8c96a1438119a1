//! Administrator gateway port definition.

use async_trait::async_trait;

use crate::domain::entities::{
    Citizen, DistributionRecord, Entitlement, GrainType, NewAllocation, NewShop, Shop,
    StockAllocation, UserAccount,
};
use crate::domain::errors::GatewayError;

/// Port for the administrator surface of the portal backend.
#[async_trait]
pub trait AdminPort: Send + Sync {
    /// Fetches shopkeeper accounts awaiting approval.
    async fn pending_shopkeepers(&self) -> Result<Vec<UserAccount>, GatewayError>;

    /// Fetches all shopkeeper accounts.
    async fn all_shopkeepers(&self) -> Result<Vec<UserAccount>, GatewayError>;

    /// Approves a pending shopkeeper.
    async fn approve_shopkeeper(&self, shopkeeper_id: i64) -> Result<(), GatewayError>;

    /// Suspends (or reactivates) a shopkeeper.
    async fn suspend_shopkeeper(&self, shopkeeper_id: i64) -> Result<(), GatewayError>;

    /// Creates a shop owned by a shopkeeper.
    async fn create_shop(&self, shopkeeper_id: i64, shop: &NewShop) -> Result<(), GatewayError>;

    /// Fetches all shops.
    async fn all_shops(&self) -> Result<Vec<Shop>, GatewayError>;

    /// Allocates monthly stock to a shop.
    async fn allocate_stock(&self, allocation: &NewAllocation) -> Result<(), GatewayError>;

    /// Fetches all stock allocations.
    async fn all_allocations(&self) -> Result<Vec<StockAllocation>, GatewayError>;

    /// Creates an entitlement for a grain.
    async fn create_entitlement(
        &self,
        grain: GrainType,
        quantity_per_person: f64,
    ) -> Result<(), GatewayError>;

    /// Updates the entitlement for a grain.
    async fn update_entitlement(
        &self,
        grain: GrainType,
        quantity_per_person: f64,
    ) -> Result<(), GatewayError>;

    /// Fetches the active entitlement list.
    async fn all_entitlements(&self) -> Result<Vec<Entitlement>, GatewayError>;

    /// Fetches every registered family.
    async fn all_families(&self) -> Result<Vec<Citizen>, GatewayError>;

    /// Fetches distribution logs across all shops.
    async fn distribution_logs(&self) -> Result<Vec<DistributionRecord>, GatewayError>;
}

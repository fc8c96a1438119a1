//! Administrator endpoints of the portal backend.

use async_trait::async_trait;
use tracing::debug;

use super::client::PortalClient;
use super::dto::{
    AllocateStockBody, AllocationResponse, CitizenResponse, CreateShopBody, DistributionResponse,
    EntitlementBody, EntitlementResponse, ShopResponse, UserResponse,
};
use crate::domain::entities::{
    Citizen, DistributionRecord, Entitlement, GrainType, NewAllocation, NewShop, Shop,
    StockAllocation, UserAccount,
};
use crate::domain::errors::GatewayError;
use crate::domain::ports::AdminPort;

#[async_trait]
impl AdminPort for PortalClient {
    async fn pending_shopkeepers(&self) -> Result<Vec<UserAccount>, GatewayError> {
        let dtos: Vec<UserResponse> = self.get_json("Admin/pending-shopkeeper-list").await?;
        Ok(dtos.into_iter().map(Into::into).collect())
    }

    async fn all_shopkeepers(&self) -> Result<Vec<UserAccount>, GatewayError> {
        let dtos: Vec<UserResponse> = self.get_json("Admin/shopkeeper-list").await?;
        Ok(dtos.into_iter().map(Into::into).collect())
    }

    async fn approve_shopkeeper(&self, shopkeeper_id: i64) -> Result<(), GatewayError> {
        debug!(shopkeeper_id, "Approving shopkeeper");
        self.put_unit(&format!("Admin/approve/{shopkeeper_id}")).await
    }

    async fn suspend_shopkeeper(&self, shopkeeper_id: i64) -> Result<(), GatewayError> {
        debug!(shopkeeper_id, "Suspending shopkeeper");
        self.put_unit(&format!("Admin/suspend/{shopkeeper_id}")).await
    }

    async fn create_shop(&self, shopkeeper_id: i64, shop: &NewShop) -> Result<(), GatewayError> {
        self.post_unit(
            &format!("Admin/create-shop/{shopkeeper_id}"),
            &CreateShopBody {
                shop_name: &shop.shop_name,
                location: &shop.location,
            },
        )
        .await
    }

    async fn all_shops(&self) -> Result<Vec<Shop>, GatewayError> {
        let dtos: Vec<ShopResponse> = self.get_json("Admin/all-shops").await?;
        Ok(dtos.into_iter().map(Into::into).collect())
    }

    async fn allocate_stock(&self, allocation: &NewAllocation) -> Result<(), GatewayError> {
        debug!(
            shop_id = allocation.shop_id,
            grain = %allocation.grain,
            month = %allocation.month,
            "Allocating stock"
        );
        self.post_unit(
            "Admin/allocate",
            &AllocateStockBody {
                shop_id: allocation.shop_id,
                grain: allocation.grain,
                quantity_allocated: allocation.quantity_allocated,
                month_year: allocation.month.to_string(),
            },
        )
        .await
    }

    async fn all_allocations(&self) -> Result<Vec<StockAllocation>, GatewayError> {
        let dtos: Vec<AllocationResponse> = self.get_json("Admin/allocation-details").await?;
        Ok(dtos.into_iter().map(Into::into).collect())
    }

    async fn create_entitlement(
        &self,
        grain: GrainType,
        quantity_per_person: f64,
    ) -> Result<(), GatewayError> {
        self.post_unit(
            "Admin/create-entitlement",
            &EntitlementBody {
                grain,
                quantity_per_person,
            },
        )
        .await
    }

    async fn update_entitlement(
        &self,
        grain: GrainType,
        quantity_per_person: f64,
    ) -> Result<(), GatewayError> {
        self.put_json_unit(
            "Admin/update-entitlement",
            &EntitlementBody {
                grain,
                quantity_per_person,
            },
        )
        .await
    }

    async fn all_entitlements(&self) -> Result<Vec<Entitlement>, GatewayError> {
        let dtos: Vec<EntitlementResponse> = self.get_json("Admin/entitlements").await?;
        Ok(dtos.into_iter().map(Into::into).collect())
    }

    async fn all_families(&self) -> Result<Vec<Citizen>, GatewayError> {
        let dtos: Vec<CitizenResponse> = self.get_json("Admin/all-families").await?;
        Ok(dtos.into_iter().map(Into::into).collect())
    }

    async fn distribution_logs(&self) -> Result<Vec<DistributionRecord>, GatewayError> {
        let dtos: Vec<DistributionResponse> = self.get_json("Admin/distribution-logs").await?;
        Ok(dtos.into_iter().map(Into::into).collect())
    }
}

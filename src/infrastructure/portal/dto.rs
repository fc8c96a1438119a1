//! Wire DTOs for the portal REST backend.
//!
//! The backend speaks camelCase JSON; a few fields are inconsistently
//! cased across endpoints, covered here with serde aliases.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{
    AccountStatus, AllocationStatus, CardNumber, Citizen, DistributionRecord, DistributionStatus,
    Entitlement, GrainType, Role, Shop, StockAllocation, StockLevel, UserAccount,
};

/// Error payload the backend attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    /// Backend-provided reason.
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub status: Option<AccountStatus>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

impl From<UserResponse> for UserAccount {
    fn from(dto: UserResponse) -> Self {
        let mut account = Self::new(dto.user_id, dto.name, dto.email, dto.role);
        if let Some(status) = dto.status {
            account = account.with_status(status);
        }
        if let Some(created_at) = dto.created_at {
            account = account.with_created_at(created_at);
        }
        account
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitizenResponse {
    pub card_number: String,
    pub head_of_family_name: String,
    pub family_member_count: u32,
    pub address: String,
    #[serde(default)]
    pub citizen_email: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub issue_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub shop_name: Option<String>,
}

impl From<CitizenResponse> for Citizen {
    fn from(dto: CitizenResponse) -> Self {
        let mut citizen = Self::new(
            CardNumber::new_unchecked(dto.card_number),
            dto.head_of_family_name,
            dto.family_member_count,
            dto.address,
            dto.citizen_email,
            dto.status,
        );
        if let Some(issue_date) = dto.issue_date {
            citizen = citizen.with_issue_date(issue_date);
        }
        if let Some(shop_name) = dto.shop_name {
            citizen = citizen.with_shop_name(shop_name);
        }
        citizen
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitlementResponse {
    #[serde(default)]
    pub entitlement_id: Option<i64>,
    #[serde(alias = "Grain", alias = "grainType")]
    pub grain: GrainType,
    #[serde(alias = "QuantityPerPerson")]
    pub quantity_per_person: f64,
}

impl From<EntitlementResponse> for Entitlement {
    fn from(dto: EntitlementResponse) -> Self {
        let entitlement = Self::new(dto.grain, dto.quantity_per_person);
        match dto.entitlement_id {
            Some(id) => entitlement.with_id(id),
            None => entitlement,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionResponse {
    pub distribution_id: i64,
    pub card_number: String,
    #[serde(default)]
    pub head_of_family: Option<String>,
    pub grain: GrainType,
    pub quantity_given: f64,
    #[serde(default)]
    pub distribution_date: Option<NaiveDateTime>,
    pub status: DistributionStatus,
}

impl From<DistributionResponse> for DistributionRecord {
    fn from(dto: DistributionResponse) -> Self {
        let mut record = Self::new(
            dto.distribution_id,
            CardNumber::new_unchecked(dto.card_number),
            dto.grain,
            dto.quantity_given,
            dto.status,
        );
        if let Some(head_of_family) = dto.head_of_family {
            record = record.with_head_of_family(head_of_family);
        }
        if let Some(date) = dto.distribution_date {
            record = record.with_date(date);
        }
        record
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopResponse {
    pub shop_id: i64,
    pub shop_name: String,
    pub location: String,
    #[serde(default)]
    pub shopkeeper_name: Option<String>,
}

impl From<ShopResponse> for Shop {
    fn from(dto: ShopResponse) -> Self {
        let shop = Self::new(dto.shop_id, dto.shop_name, dto.location);
        match dto.shopkeeper_name {
            Some(name) => shop.with_shopkeeper_name(name),
            None => shop,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationResponse {
    pub allocation_id: i64,
    #[serde(default)]
    pub shop_name: Option<String>,
    pub grain: GrainType,
    pub quantity_allocated: f64,
    pub month_year: String,
    pub status: AllocationStatus,
}

impl From<AllocationResponse> for StockAllocation {
    fn from(dto: AllocationResponse) -> Self {
        let allocation = StockAllocation::new(
            dto.allocation_id,
            dto.grain,
            dto.quantity_allocated,
            dto.month_year,
            dto.status,
        );
        match dto.shop_name {
            Some(name) => allocation.with_shop_name(name),
            None => allocation,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockLevelResponse {
    pub grain: GrainType,
    #[serde(alias = "quantityAvailable")]
    pub quantity: f64,
}

impl From<StockLevelResponse> for StockLevel {
    fn from(dto: StockLevelResponse) -> Self {
        Self::new(dto.grain, dto.quantity)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginBody<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterBody<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub role: Role,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateOtpBody<'a> {
    pub shopkeeper_id: i64,
    pub card_number: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributeBody<'a> {
    pub card_number: &'a str,
    pub grain: GrainType,
    pub otp: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCitizenBody<'a> {
    pub card_number: &'a str,
    pub citizen_email: &'a str,
    pub head_of_family_name: &'a str,
    pub family_member_count: u32,
    pub address: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShopBody<'a> {
    pub shop_name: &'a str,
    pub location: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocateStockBody {
    pub shop_id: i64,
    pub grain: GrainType,
    pub quantity_allocated: f64,
    pub month_year: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitlementBody {
    pub grain: GrainType,
    pub quantity_per_person: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_citizen_response() {
        let json = r#"{
            "cardNumber": "123456789012",
            "headOfFamilyName": "Meena Kumari",
            "familyMemberCount": 4,
            "address": "12 Gandhi Road",
            "citizenEmail": "meena@example.com",
            "status": "Active",
            "issueDate": "2024-01-15T10:30:00"
        }"#;

        let citizen: Citizen = serde_json::from_str::<CitizenResponse>(json).unwrap().into();

        assert_eq!(citizen.card_number().as_str(), "123456789012");
        assert_eq!(citizen.family_member_count(), 4);
        assert!(citizen.issue_date().is_some());
        assert!(citizen.shop_name().is_none());
    }

    #[test]
    fn test_parse_entitlement_tolerates_pascal_case() {
        // Some backend endpoints serialize these fields PascalCase.
        let json = r#"{ "entitlementId": 3, "Grain": "RICE", "QuantityPerPerson": 5.0 }"#;

        let entitlement: Entitlement =
            serde_json::from_str::<EntitlementResponse>(json).unwrap().into();

        assert_eq!(entitlement.grain(), GrainType::Rice);
        assert_eq!(entitlement.quantity_per_person(), 5.0);
        assert_eq!(entitlement.entitlement_id(), Some(3));
    }

    #[test]
    fn test_parse_distribution_response() {
        let json = r#"{
            "distributionId": 501,
            "cardNumber": "123456789012",
            "headOfFamily": "Meena Kumari",
            "grain": "RICE",
            "quantityGiven": 20.0,
            "distributionDate": "2025-02-01T09:12:45",
            "status": "Success"
        }"#;

        let record: DistributionRecord =
            serde_json::from_str::<DistributionResponse>(json).unwrap().into();

        assert_eq!(record.distribution_id(), 501);
        assert_eq!(record.quantity_given(), 20.0);
        assert_eq!(record.status(), DistributionStatus::Success);
        assert_eq!(record.head_of_family(), Some("Meena Kumari"));
    }

    #[test]
    fn test_request_bodies_use_camel_case() {
        let body = GenerateOtpBody {
            shopkeeper_id: 7,
            card_number: "123456789012",
        };

        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["shopkeeperId"], 7);
        assert_eq!(json["cardNumber"], "123456789012");
    }

    #[test]
    fn test_login_response_parses_role() {
        let json = r#"{
            "token": "jwt-token",
            "user": { "userId": 9, "name": "Ravi", "email": "r@e.com", "role": "SHOPKEEPER" }
        }"#;

        let response: LoginResponse = serde_json::from_str(json).unwrap();
        let account: UserAccount = response.user.into();

        assert_eq!(account.role(), Role::Shopkeeper);
        assert_eq!(account.user_id(), 9);
    }
}

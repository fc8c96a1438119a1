//! Shops, stock allocations, and stock levels.

use std::fmt;
use std::str::FromStr;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use super::entitlement::GrainType;

/// A fair-price shop run by a shopkeeper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    shop_id: i64,
    shop_name: String,
    location: String,
    shopkeeper_name: Option<String>,
}

impl Shop {
    #[must_use]
    pub fn new(shop_id: i64, shop_name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            shop_id,
            shop_name: shop_name.into(),
            location: location.into(),
            shopkeeper_name: None,
        }
    }

    #[must_use]
    pub fn with_shopkeeper_name(mut self, shopkeeper_name: impl Into<String>) -> Self {
        self.shopkeeper_name = Some(shopkeeper_name.into());
        self
    }

    #[must_use]
    pub const fn shop_id(&self) -> i64 {
        self.shop_id
    }

    #[must_use]
    pub fn shop_name(&self) -> &str {
        &self.shop_name
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub fn shopkeeper_name(&self) -> Option<&str> {
        self.shopkeeper_name.as_deref()
    }
}

/// Payload for creating a shop under a shopkeeper.
#[derive(Debug, Clone, PartialEq)]
pub struct NewShop {
    /// Display name of the shop.
    pub shop_name: String,
    /// Shop location.
    pub location: String,
}

/// Allocation month in `YYYY-MM` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthYear {
    year: i32,
    month: u32,
}

impl MonthYear {
    /// Creates a month, rejecting months outside 1..=12.
    #[must_use]
    pub const fn new(year: i32, month: u32) -> Option<Self> {
        if month < 1 || month > 12 {
            return None;
        }
        Some(Self { year, month })
    }

    /// The current calendar month.
    #[must_use]
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }
}

impl fmt::Display for MonthYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthYear {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| format!("expected YYYY-MM, got {s}"))?;

        let year: i32 = year.parse().map_err(|_| format!("invalid year in {s}"))?;
        let month: u32 = month.parse().map_err(|_| format!("invalid month in {s}"))?;

        Self::new(year, month).ok_or_else(|| format!("month out of range in {s}"))
    }
}

/// Whether a shopkeeper has confirmed receipt of an allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllocationStatus {
    Pending,
    Completed,
}

impl fmt::Display for AllocationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

/// Stock assigned by the administrator to a shop for one month.
#[derive(Debug, Clone, PartialEq)]
pub struct StockAllocation {
    allocation_id: i64,
    shop_name: Option<String>,
    grain: GrainType,
    quantity_allocated: f64,
    month: String,
    status: AllocationStatus,
}

impl StockAllocation {
    #[must_use]
    pub fn new(
        allocation_id: i64,
        grain: GrainType,
        quantity_allocated: f64,
        month: impl Into<String>,
        status: AllocationStatus,
    ) -> Self {
        Self {
            allocation_id,
            shop_name: None,
            grain,
            quantity_allocated,
            month: month.into(),
            status,
        }
    }

    #[must_use]
    pub fn with_shop_name(mut self, shop_name: impl Into<String>) -> Self {
        self.shop_name = Some(shop_name.into());
        self
    }

    #[must_use]
    pub const fn allocation_id(&self) -> i64 {
        self.allocation_id
    }

    #[must_use]
    pub fn shop_name(&self) -> Option<&str> {
        self.shop_name.as_deref()
    }

    #[must_use]
    pub const fn grain(&self) -> GrainType {
        self.grain
    }

    #[must_use]
    pub const fn quantity_allocated(&self) -> f64 {
        self.quantity_allocated
    }

    /// Allocation month as reported by the backend (`YYYY-MM`).
    #[must_use]
    pub fn month(&self) -> &str {
        &self.month
    }

    #[must_use]
    pub const fn status(&self) -> AllocationStatus {
        self.status
    }
}

/// Payload for allocating stock to a shop.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAllocation {
    /// Target shop.
    pub shop_id: i64,
    /// Grain being allocated.
    pub grain: GrainType,
    /// Kilograms allocated for the month.
    pub quantity_allocated: f64,
    /// Allocation month.
    pub month: MonthYear,
}

/// Current stock of one grain at a shop.
#[derive(Debug, Clone, PartialEq)]
pub struct StockLevel {
    grain: GrainType,
    quantity: f64,
}

impl StockLevel {
    #[must_use]
    pub const fn new(grain: GrainType, quantity: f64) -> Self {
        Self { grain, quantity }
    }

    #[must_use]
    pub const fn grain(&self) -> GrainType {
        self.grain
    }

    #[must_use]
    pub const fn quantity(&self) -> f64 {
        self.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_year_display() {
        let month = MonthYear::new(2025, 3).unwrap();
        assert_eq!(month.to_string(), "2025-03");
    }

    #[test]
    fn test_month_year_parse() {
        let month: MonthYear = "2025-11".parse().unwrap();
        assert_eq!(month.year(), 2025);
        assert_eq!(month.month(), 11);
    }

    #[test]
    fn test_month_year_rejects_out_of_range() {
        assert!(MonthYear::new(2025, 0).is_none());
        assert!(MonthYear::new(2025, 13).is_none());
        assert!("2025-13".parse::<MonthYear>().is_err());
        assert!("202511".parse::<MonthYear>().is_err());
    }

    #[test]
    fn test_shop_builder() {
        let shop = Shop::new(3, "FPS Sector 9", "Ward 9").with_shopkeeper_name("Ravi");
        assert_eq!(shop.shop_id(), 3);
        assert_eq!(shop.shopkeeper_name(), Some("Ravi"));
    }
}

//! Domain entity definitions.

mod card_number;
mod citizen;
mod distribution;
mod entitlement;
mod otp;
mod session;
mod shop;
mod user;

pub use card_number::CardNumber;
pub use citizen::{Citizen, NewCitizen};
pub use distribution::{DistributionQuote, DistributionRecord, DistributionStatus};
pub use entitlement::{Entitlement, GrainType};
pub use otp::OtpCode;
pub use session::{Session, SessionToken};
pub use shop::{
    AllocationStatus, MonthYear, NewAllocation, NewShop, Shop, StockAllocation, StockLevel,
};
pub use user::{AccountStatus, Role, UserAccount};

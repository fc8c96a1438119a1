//! Command-line interface definition.

use clap::{Parser, Subcommand};

use crate::domain::entities::{GrainType, MonthYear, Role};
use crate::infrastructure::CliArgs;

fn parse_role(s: &str) -> Result<Role, String> {
    s.parse()
}

fn parse_grain(s: &str) -> Result<GrainType, String> {
    s.parse()
}

fn parse_month(s: &str) -> Result<MonthYear, String> {
    s.parse()
}

/// Top-level command line.
#[derive(Debug, Parser)]
#[command(
    name = "rationdesk",
    version,
    about = "A terminal client for ration shop distribution and administration",
    long_about = None
)]
pub struct Cli {
    /// Global flags.
    #[command(flatten)]
    pub args: CliArgs,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Portal operations, grouped by role where the backend requires one.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and store the session.
    Login {
        /// Login email; prompted when omitted.
        #[arg(long)]
        email: Option<String>,
    },
    /// Delete the stored session.
    Logout,
    /// Register a new portal account.
    Register {
        /// Display name.
        #[arg(long)]
        name: String,
        /// Login email.
        #[arg(long)]
        email: String,
        /// Requested role.
        #[arg(long, value_parser = parse_role)]
        role: Role,
    },
    /// Show the active session.
    Whoami,

    /// Run an OTP-gated ration distribution (shopkeeper).
    Distribute {
        /// Card number; prompted when omitted.
        #[arg(long)]
        card: Option<String>,
    },
    /// List citizens registered under your shop (shopkeeper).
    Citizens,
    /// Register a citizen under your shop (shopkeeper).
    AddCitizen {
        /// Twelve-digit card number to issue.
        #[arg(long)]
        card: String,
        /// Citizen login email.
        #[arg(long)]
        email: String,
        /// Head of family name.
        #[arg(long)]
        head: String,
        /// Family member count.
        #[arg(long)]
        members: u32,
        /// Household address.
        #[arg(long)]
        address: String,
    },
    /// Show your distribution history (shopkeeper).
    History,
    /// Show your shop (shopkeeper).
    Shop,
    /// Show current stock levels of your shop (shopkeeper).
    Stock,
    /// Show your stock allocations (shopkeeper).
    Allocations,
    /// Confirm all pending stock allocations (shopkeeper).
    ConfirmStock,

    /// Administrator operations.
    Admin {
        /// Administrator action.
        #[command(subcommand)]
        action: AdminAction,
    },

    /// Show your ration card and entitlements (citizen).
    Card,
    /// Show distributions received against your card (citizen).
    MyDistributions {
        /// Card number; taken from your ration card when omitted.
        #[arg(long)]
        card: Option<String>,
    },
}

/// Administrator subcommands.
#[derive(Debug, Subcommand)]
pub enum AdminAction {
    /// List shopkeeper accounts awaiting approval.
    PendingShopkeepers,
    /// List all shopkeeper accounts.
    Shopkeepers,
    /// Approve a pending shopkeeper.
    Approve {
        /// Shopkeeper account id.
        shopkeeper_id: i64,
    },
    /// Suspend (or reactivate) a shopkeeper.
    Suspend {
        /// Shopkeeper account id.
        shopkeeper_id: i64,
    },
    /// List all shops.
    Shops,
    /// Create a shop owned by a shopkeeper.
    CreateShop {
        /// Owning shopkeeper account id.
        #[arg(long)]
        shopkeeper_id: i64,
        /// Shop display name.
        #[arg(long)]
        name: String,
        /// Shop location.
        #[arg(long)]
        location: String,
    },
    /// Allocate monthly stock to a shop.
    Allocate {
        /// Target shop id.
        #[arg(long)]
        shop_id: i64,
        /// Grain to allocate.
        #[arg(long, value_parser = parse_grain)]
        grain: GrainType,
        /// Kilograms to allocate.
        #[arg(long)]
        quantity: f64,
        /// Allocation month (YYYY-MM); defaults to the current month.
        #[arg(long, value_parser = parse_month)]
        month: Option<MonthYear>,
    },
    /// List all stock allocations.
    Allocations,
    /// List active entitlements.
    Entitlements,
    /// Create or update the entitlement for a grain.
    SetEntitlement {
        /// Grain to configure.
        #[arg(long, value_parser = parse_grain)]
        grain: GrainType,
        /// Kilograms per person per month.
        #[arg(long)]
        quantity: f64,
        /// Update the existing record instead of creating one.
        #[arg(long)]
        update: bool,
    },
    /// List every registered family.
    Families,
    /// List distribution logs across all shops.
    Logs,
}

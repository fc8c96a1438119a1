//! Administrator command handlers.

use std::sync::Arc;

use color_eyre::eyre::Result;

use super::commands::AdminAction;
use super::{console, ensure_role};
use crate::domain::entities::{MonthYear, NewAllocation, NewShop, Role, Session, UserAccount};
use crate::domain::ports::{AdminPort, NotificationPort};

/// Dispatches an administrator action.
pub async fn run(
    gateway: Arc<dyn AdminPort>,
    session: &Session,
    notifier: &dyn NotificationPort,
    action: AdminAction,
) -> Result<()> {
    ensure_role(session, Role::Admin)?;

    match action {
        AdminAction::PendingShopkeepers => {
            let accounts = gateway.pending_shopkeepers().await?;
            print_accounts(&accounts);
        }
        AdminAction::Shopkeepers => {
            let accounts = gateway.all_shopkeepers().await?;
            print_accounts(&accounts);
        }
        AdminAction::Approve { shopkeeper_id } => {
            gateway.approve_shopkeeper(shopkeeper_id).await?;
            notifier.success(&format!("Shopkeeper {shopkeeper_id} approved"));
        }
        AdminAction::Suspend { shopkeeper_id } => {
            if console::confirm(&format!("Suspend shopkeeper {shopkeeper_id}?"))? {
                gateway.suspend_shopkeeper(shopkeeper_id).await?;
                notifier.success(&format!("Shopkeeper {shopkeeper_id} suspended"));
            }
        }
        AdminAction::Shops => {
            let shops = gateway.all_shops().await?;
            println!("{:>6} {:<24} {:<20} {}", "ID", "NAME", "LOCATION", "SHOPKEEPER");
            for shop in &shops {
                println!(
                    "{:>6} {:<24} {:<20} {}",
                    shop.shop_id(),
                    shop.shop_name(),
                    shop.location(),
                    shop.shopkeeper_name().unwrap_or("-")
                );
            }
        }
        AdminAction::CreateShop {
            shopkeeper_id,
            name,
            location,
        } => {
            let shop = NewShop {
                shop_name: name,
                location,
            };
            gateway.create_shop(shopkeeper_id, &shop).await?;
            notifier.success(&format!("Shop '{}' created", shop.shop_name));
        }
        AdminAction::Allocate {
            shop_id,
            grain,
            quantity,
            month,
        } => {
            if quantity <= 0.0 {
                notifier.error("allocation quantity must be positive");
                return Ok(());
            }
            let allocation = NewAllocation {
                shop_id,
                grain,
                quantity_allocated: quantity,
                month: month.unwrap_or_else(MonthYear::current),
            };
            gateway.allocate_stock(&allocation).await?;
            notifier.success(&format!(
                "Allocated {} kg {} to shop {} for {}",
                allocation.quantity_allocated, allocation.grain, shop_id, allocation.month
            ));
        }
        AdminAction::Allocations => {
            let allocations = gateway.all_allocations().await?;
            println!(
                "{:>6} {:<20} {:<8} {:<6} {:>9}  {}",
                "ID", "SHOP", "MONTH", "GRAIN", "QTY (KG)", "STATUS"
            );
            for allocation in &allocations {
                println!(
                    "{:>6} {:<20} {:<8} {:<6} {:>9}  {}",
                    allocation.allocation_id(),
                    allocation.shop_name().unwrap_or("-"),
                    allocation.month(),
                    allocation.grain().to_string(),
                    allocation.quantity_allocated(),
                    allocation.status()
                );
            }
        }
        AdminAction::Entitlements => {
            let entitlements = gateway.all_entitlements().await?;
            for entitlement in &entitlements {
                println!(
                    "  {:<6} {} kg/person",
                    entitlement.grain().to_string(),
                    entitlement.quantity_per_person()
                );
            }
        }
        AdminAction::SetEntitlement {
            grain,
            quantity,
            update,
        } => {
            if quantity <= 0.0 {
                notifier.error("entitlement quantity must be positive");
                return Ok(());
            }
            if update {
                gateway.update_entitlement(grain, quantity).await?;
                notifier.success(&format!("Entitlement for {grain} updated to {quantity} kg/person"));
            } else {
                gateway.create_entitlement(grain, quantity).await?;
                notifier.success(&format!("Entitlement for {grain} set to {quantity} kg/person"));
            }
        }
        AdminAction::Families => {
            let families = gateway.all_families().await?;
            println!(
                "{:<14} {:<24} {:>7}  {:<20} {}",
                "CARD", "HEAD OF FAMILY", "MEMBERS", "SHOP", "STATUS"
            );
            for family in &families {
                println!(
                    "{:<14} {:<24} {:>7}  {:<20} {}",
                    family.card_number().to_string(),
                    family.head_of_family_name(),
                    family.family_member_count(),
                    family.shop_name().unwrap_or("-"),
                    family.status()
                );
            }
            println!("{} families", families.len());
        }
        AdminAction::Logs => {
            let records = gateway.distribution_logs().await?;
            println!(
                "{:>6} {:<12} {:<14} {:<6} {:>9}  {}",
                "ID", "DATE", "CARD", "GRAIN", "QTY (KG)", "STATUS"
            );
            for record in &records {
                let date = record
                    .distribution_date()
                    .map_or_else(|| "-".to_string(), |d| d.date().to_string());
                println!(
                    "{:>6} {:<12} {:<14} {:<6} {:>9}  {}",
                    record.distribution_id(),
                    date,
                    record.card_number().to_string(),
                    record.grain().to_string(),
                    record.quantity_given(),
                    record.status()
                );
            }
        }
    }

    Ok(())
}

fn print_accounts(accounts: &[UserAccount]) {
    println!("{:>6} {:<20} {:<28} {}", "ID", "NAME", "EMAIL", "STATUS");
    for account in accounts {
        let status = account
            .status()
            .map_or_else(|| "-".to_string(), |s| s.to_string());
        println!(
            "{:>6} {:<20} {:<28} {}",
            account.user_id(),
            account.name(),
            account.email(),
            status
        );
    }
    println!("{} accounts", accounts.len());
}

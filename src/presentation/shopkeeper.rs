//! Shopkeeper command handlers.

use std::sync::Arc;

use color_eyre::eyre::Result;

use super::{console, ensure_role};
use crate::application::workflow::DistributionWorkflow;
use crate::domain::entities::{
    AllocationStatus, CardNumber, GrainType, NewCitizen, Role, Session,
};
use crate::domain::errors::WorkflowError;
use crate::domain::ports::{NotificationPort, ShopkeeperPort};

/// Runs one OTP-gated distribution interactively.
pub async fn distribute(
    gateway: Arc<dyn ShopkeeperPort>,
    session: &Session,
    notifier: &dyn NotificationPort,
    card: Option<String>,
) -> Result<()> {
    ensure_role(session, Role::Shopkeeper)?;

    let mut workflow = DistributionWorkflow::start(session, gateway).await?;

    if card.is_none() {
        println!("Citizens under your shop:");
        for citizen in workflow.roster() {
            println!(
                "  {}  {:<24} {} members",
                citizen.card_number(),
                citizen.head_of_family_name(),
                citizen.family_member_count()
            );
        }
    }

    let mut card_input = match card {
        Some(card) => card,
        None => console::prompt("Card number")?,
    };

    let citizen = loop {
        match workflow.select_citizen(&card_input).await {
            Ok(citizen) => break citizen,
            Err(
                e @ (WorkflowError::Validation { .. } | WorkflowError::CitizenNotFound { .. }),
            ) => {
                notifier.error(&e.to_string());
                card_input = console::prompt("Card number (blank to abort)")?;
                if card_input.is_empty() {
                    return Ok(());
                }
            }
            Err(e) => return Err(e.into()),
        }
    };

    println!(
        "Card {}: {}, {} members, {}",
        citizen.card_number(),
        citizen.head_of_family_name(),
        citizen.family_member_count(),
        citizen.address()
    );

    println!("Entitlements:");
    for entitlement in workflow.entitlements() {
        println!(
            "  {:<6} {} kg/person",
            entitlement.grain().to_string(),
            entitlement.quantity_per_person()
        );
    }

    let options = GrainType::ALL
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("/");
    let grain: GrainType = match console::prompt(&format!("Grain ({options})"))?.parse() {
        Ok(grain) => grain,
        Err(reason) => {
            notifier.error(&reason);
            return Ok(());
        }
    };

    let quote = workflow.select_grain(grain)?;
    if quote.entitlement_missing() {
        notifier.warn(&format!(
            "No entitlement configured for {grain}; quoted quantity is 0 kg"
        ));
    }
    println!(
        "Quoted quantity for {} family members: {} kg",
        citizen.family_member_count(),
        quote.computed_quantity()
    );

    if !console::confirm("Send OTP to the citizen's email?")? {
        workflow.cancel()?;
        notifier.info("Run cancelled, nothing committed");
        return Ok(());
    }

    workflow.request_otp().await?;
    notifier.success(&format!("OTP sent to {}", citizen.citizen_email()));

    loop {
        let otp = console::prompt("OTP (blank to cancel)")?;
        if otp.is_empty() {
            workflow.cancel()?;
            notifier.info("Run cancelled, nothing committed");
            return Ok(());
        }

        match workflow.verify_and_commit(&otp).await {
            Ok(record) => {
                notifier.success(&format!(
                    "Distributed {} kg {} to card {} (record #{})",
                    record.quantity_given(),
                    record.grain(),
                    record.card_number(),
                    record.distribution_id()
                ));
                return Ok(());
            }
            Err(
                e @ (WorkflowError::Validation { .. }
                | WorkflowError::OtpRejected { .. }
                | WorkflowError::Transport { .. }),
            ) => {
                notifier.error(&e.to_string());
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Lists citizens registered under the operator's shop.
pub async fn citizens(gateway: Arc<dyn ShopkeeperPort>, session: &Session) -> Result<()> {
    let citizens = gateway.citizens_under_shop(session.user_id()).await?;

    println!(
        "{:<14} {:<24} {:>7}  {:<28} {}",
        "CARD", "HEAD OF FAMILY", "MEMBERS", "ADDRESS", "STATUS"
    );
    for citizen in &citizens {
        println!(
            "{:<14} {:<24} {:>7}  {:<28} {}",
            citizen.card_number().to_string(),
            citizen.head_of_family_name(),
            citizen.family_member_count(),
            citizen.address(),
            citizen.status()
        );
    }
    println!("{} citizens", citizens.len());
    Ok(())
}

/// Registers a citizen under the operator's shop.
pub async fn add_citizen(
    gateway: Arc<dyn ShopkeeperPort>,
    session: &Session,
    notifier: &dyn NotificationPort,
    card: String,
    email: String,
    head: String,
    members: u32,
    address: String,
) -> Result<()> {
    let Some(card_number) = CardNumber::new(card) else {
        notifier.error("card number must be exactly 12 digits");
        return Ok(());
    };

    if members == 0 {
        notifier.error("family member count must be positive");
        return Ok(());
    }

    let citizen = NewCitizen {
        card_number,
        citizen_email: email,
        head_of_family_name: head,
        family_member_count: members,
        address,
    };

    gateway.add_citizen(session.user_id(), &citizen).await?;
    notifier.success(&format!("Citizen registered with card {}", citizen.card_number));
    Ok(())
}

/// Shows the operator's distribution history.
pub async fn history(gateway: Arc<dyn ShopkeeperPort>, session: &Session) -> Result<()> {
    let records = gateway.distribution_history(session.user_id()).await?;

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
    println!("{} distributions", records.len());
    Ok(())
}

/// Shows the operator's shop.
pub async fn shop(gateway: Arc<dyn ShopkeeperPort>, session: &Session) -> Result<()> {
    let shop = gateway.my_shop(session.user_id()).await?;

    println!("Shop #{}: {}", shop.shop_id(), shop.shop_name());
    println!("Location: {}", shop.location());
    Ok(())
}

/// Shows current stock levels of the operator's shop.
pub async fn stock(gateway: Arc<dyn ShopkeeperPort>, session: &Session) -> Result<()> {
    let shop = gateway.my_shop(session.user_id()).await?;
    let levels = gateway.current_stock(shop.shop_id()).await?;

    println!("Current stock of {}:", shop.shop_name());
    for level in &levels {
        println!("  {:<6} {:>9} kg", level.grain().to_string(), level.quantity());
    }
    Ok(())
}

/// Shows the operator's stock allocations.
pub async fn allocations(gateway: Arc<dyn ShopkeeperPort>, session: &Session) -> Result<()> {
    let allocations = gateway.my_allocations(session.user_id()).await?;

    println!(
        "{:>6} {:<8} {:<6} {:>9}  {}",
        "ID", "MONTH", "GRAIN", "QTY (KG)", "STATUS"
    );
    for allocation in &allocations {
        println!(
            "{:>6} {:<8} {:<6} {:>9}  {}",
            allocation.allocation_id(),
            allocation.month(),
            allocation.grain().to_string(),
            allocation.quantity_allocated(),
            allocation.status()
        );
    }
    Ok(())
}

/// Confirms all pending stock allocations.
pub async fn confirm_stock(
    gateway: Arc<dyn ShopkeeperPort>,
    session: &Session,
    notifier: &dyn NotificationPort,
) -> Result<()> {
    let pending = gateway
        .my_allocations(session.user_id())
        .await?
        .iter()
        .filter(|a| a.status() == AllocationStatus::Pending)
        .count();

    if pending == 0 {
        notifier.info("No pending allocations to confirm");
        return Ok(());
    }

    if !console::confirm(&format!("Confirm all {pending} pending allocations?"))? {
        return Ok(());
    }

    gateway.confirm_pending_stock(session.user_id()).await?;
    notifier.success("Stock confirmed");
    Ok(())
}

//! Citizen command handlers.

use std::sync::Arc;

use color_eyre::eyre::Result;

use super::ensure_role;
use crate::domain::entities::{CardNumber, Role, Session};
use crate::domain::ports::{CitizenPort, NotificationPort};

/// Shows the caller's ration card and the active entitlements.
pub async fn card(gateway: Arc<dyn CitizenPort>, session: &Session) -> Result<()> {
    ensure_role(session, Role::Citizen)?;

    let card = gateway.my_ration_card(session.user().email()).await?;

    println!("Ration card {}", card.card_number());
    println!("Head of family: {}", card.head_of_family_name());
    println!("Family members: {}", card.family_member_count());
    println!("Address: {}", card.address());
    println!("Status: {}", card.status());
    if let Some(issued) = card.issue_date() {
        println!("Issued: {}", issued.date());
    }

    let entitlements = gateway.my_entitlements().await?;
    println!("Monthly entitlement per person:");
    for entitlement in &entitlements {
        println!(
            "  {:<6} {} kg  ({} kg for your family)",
            entitlement.grain().to_string(),
            entitlement.quantity_per_person(),
            f64::from(card.family_member_count()) * entitlement.quantity_per_person()
        );
    }
    Ok(())
}

/// Shows distributions received against the caller's card.
pub async fn my_distributions(
    gateway: Arc<dyn CitizenPort>,
    session: &Session,
    notifier: &dyn NotificationPort,
    card: Option<String>,
) -> Result<()> {
    ensure_role(session, Role::Citizen)?;

    let card_number = match card {
        Some(card) => match CardNumber::new(card) {
            Some(card_number) => card_number,
            None => {
                notifier.error("card number must be exactly 12 digits");
                return Ok(());
            }
        },
        None => {
            let my_card = gateway.my_ration_card(session.user().email()).await?;
            my_card.card_number().clone()
        }
    };

    let records = gateway.my_distributions(&card_number).await?;

    println!(
        "{:<12} {:<6} {:>9}  {}",
        "DATE", "GRAIN", "QTY (KG)", "STATUS"
    );
    for record in &records {
        let date = record
            .distribution_date()
            .map_or_else(|| "-".to_string(), |d| d.date().to_string());
        println!(
            "{:<12} {:<6} {:>9}  {}",
            date,
            record.grain().to_string(),
            record.quantity_given(),
            record.status()
        );
    }
    println!("{} distributions", records.len());
    Ok(())
}

//! Presentation layer: CLI commands and console output.

/// Administrator command handlers.
pub mod admin;
/// Authentication command handlers.
pub mod auth;
/// Citizen command handlers.
pub mod citizen;
/// Command-line interface definition.
pub mod commands;
/// Console notification sink and prompts.
pub mod console;
/// Shopkeeper command handlers.
pub mod shopkeeper;

pub use commands::{AdminAction, Cli, Command};
pub use console::ConsoleNotifier;

use std::sync::Arc;

use color_eyre::eyre::{Result, eyre};

use crate::application::use_cases::ResolveSessionUseCase;
use crate::domain::entities::{Role, Session};
use crate::infrastructure::{AppConfig, KeyringSessionStore, PortalClient};

pub(crate) fn ensure_role(session: &Session, role: Role) -> Result<()> {
    if session.role() == role {
        Ok(())
    } else {
        Err(eyre!(
            "this command needs a {role} session, but you are logged in as {}",
            session.role()
        ))
    }
}

async fn connect(
    config: &AppConfig,
    store: Arc<KeyringSessionStore>,
) -> Result<(Arc<PortalClient>, Session)> {
    let session = ResolveSessionUseCase::new(store).require().await?;
    let client =
        PortalClient::new(config.api_base_url.as_str())?.with_session(session.token().clone());
    Ok((Arc::new(client), session))
}

/// Wires the adapters and dispatches one CLI command.
///
/// # Errors
/// Returns an error when the command fails; recoverable problems are
/// reported through the console notifier instead.
pub async fn run(command: Command, config: &AppConfig) -> Result<()> {
    let store = Arc::new(KeyringSessionStore::new());
    let notifier = ConsoleNotifier;

    match command {
        Command::Login { email } => {
            let client = Arc::new(PortalClient::new(config.api_base_url.as_str())?);
            auth::login(client, store, &notifier, email, config.persist_session).await
        }
        Command::Logout => {
            let client = Arc::new(PortalClient::new(config.api_base_url.as_str())?);
            auth::logout(client, store, &notifier).await
        }
        Command::Register { name, email, role } => {
            let client = Arc::new(PortalClient::new(config.api_base_url.as_str())?);
            auth::register(client, &notifier, name, email, role).await
        }
        Command::Whoami => auth::whoami(store, &notifier).await,

        Command::Distribute { card } => {
            let (client, session) = connect(config, store).await?;
            shopkeeper::distribute(client, &session, &notifier, card).await
        }
        Command::Citizens => {
            let (client, session) = connect(config, store).await?;
            shopkeeper::citizens(client, &session).await
        }
        Command::AddCitizen {
            card,
            email,
            head,
            members,
            address,
        } => {
            let (client, session) = connect(config, store).await?;
            shopkeeper::add_citizen(
                client, &session, &notifier, card, email, head, members, address,
            )
            .await
        }
        Command::History => {
            let (client, session) = connect(config, store).await?;
            shopkeeper::history(client, &session).await
        }
        Command::Shop => {
            let (client, session) = connect(config, store).await?;
            shopkeeper::shop(client, &session).await
        }
        Command::Stock => {
            let (client, session) = connect(config, store).await?;
            shopkeeper::stock(client, &session).await
        }
        Command::Allocations => {
            let (client, session) = connect(config, store).await?;
            shopkeeper::allocations(client, &session).await
        }
        Command::ConfirmStock => {
            let (client, session) = connect(config, store).await?;
            shopkeeper::confirm_stock(client, &session, &notifier).await
        }

        Command::Admin { action } => {
            let (client, session) = connect(config, store).await?;
            admin::run(client, &session, &notifier, action).await
        }

        Command::Card => {
            let (client, session) = connect(config, store).await?;
            citizen::card(client, &session).await
        }
        Command::MyDistributions { card } => {
            let (client, session) = connect(config, store).await?;
            citizen::my_distributions(client, &session, &notifier, card).await
        }
    }
}

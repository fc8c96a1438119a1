//! Authentication command handlers.

use std::sync::Arc;

use color_eyre::eyre::Result;

use super::console;
use crate::application::dto::{LoginRequest, RegisterRequest};
use crate::application::use_cases::{LoginUseCase, RegisterUseCase, ResolveSessionUseCase};
use crate::domain::entities::Role;
use crate::domain::ports::{AuthPort, NotificationPort, SessionStorePort};

/// Logs in and stores the resulting session.
pub async fn login(
    auth_port: Arc<dyn AuthPort>,
    store_port: Arc<dyn SessionStorePort>,
    notifier: &dyn NotificationPort,
    email: Option<String>,
    persist_session: bool,
) -> Result<()> {
    let email = match email {
        Some(email) => email,
        None => console::prompt("Email")?,
    };
    let password = console::prompt("Password")?;

    let mut request = LoginRequest::new(email, password);
    if !persist_session {
        request = request.without_persistence();
    }

    let use_case = LoginUseCase::new(auth_port, store_port);
    match use_case.execute(request).await {
        Ok(outcome) => {
            let user = outcome.session.user();
            notifier.success(&format!("Logged in as {} ({})", user.name(), user.role()));
            if !outcome.session_persisted {
                notifier.warn("Session was not persisted; you will need to log in again");
            }
            Ok(())
        }
        Err(e) => {
            notifier.error(&e.to_string());
            Err(e.into())
        }
    }
}

/// Deletes the stored session.
pub async fn logout(
    auth_port: Arc<dyn AuthPort>,
    store_port: Arc<dyn SessionStorePort>,
    notifier: &dyn NotificationPort,
) -> Result<()> {
    LoginUseCase::new(auth_port, store_port).logout().await?;
    notifier.success("Logged out");
    Ok(())
}

/// Registers a new account.
pub async fn register(
    auth_port: Arc<dyn AuthPort>,
    notifier: &dyn NotificationPort,
    name: String,
    email: String,
    role: Role,
) -> Result<()> {
    let password = console::prompt("Password")?;

    let use_case = RegisterUseCase::new(auth_port);
    match use_case
        .execute(RegisterRequest::new(name, email, password, role))
        .await
    {
        Ok(()) => {
            if role == Role::Shopkeeper {
                notifier.success("Registered; an administrator must approve the account");
            } else {
                notifier.success("Registered; you can log in now");
            }
            Ok(())
        }
        Err(e) => {
            notifier.error(&e.to_string());
            Err(e.into())
        }
    }
}

/// Shows the active session.
pub async fn whoami(
    store_port: Arc<dyn SessionStorePort>,
    notifier: &dyn NotificationPort,
) -> Result<()> {
    match ResolveSessionUseCase::new(store_port).execute().await {
        Some(resolved) => {
            let user = resolved.session.user();
            notifier.info(&format!(
                "{} <{}> role {} (from {})",
                user.name(),
                user.email(),
                user.role(),
                resolved.source
            ));
        }
        None => notifier.info("No active session; run `rationdesk login`"),
    }
    Ok(())
}

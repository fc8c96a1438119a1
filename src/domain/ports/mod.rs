mod admin_port;
mod auth_port;
mod citizen_port;
mod notification_port;
mod session_store_port;
mod shopkeeper_port;

pub use admin_port::AdminPort;
pub use auth_port::AuthPort;
pub use citizen_port::CitizenPort;
pub use notification_port::{NoticeLevel, NotificationPort};
pub use session_store_port::SessionStorePort;
pub use shopkeeper_port::ShopkeeperPort;

#[cfg(test)]
pub use shopkeeper_port::MockShopkeeperPort;

#[cfg(test)]
pub mod mocks {
    pub use super::auth_port::mock::MockAuthPort;
    pub use super::notification_port::mock::MockNotificationPort;
    pub use super::session_store_port::mock::MockSessionStore;
    pub use super::shopkeeper_port::MockShopkeeperPort;
}

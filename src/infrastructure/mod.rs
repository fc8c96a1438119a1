//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// Portal backend HTTP client.
pub mod portal;
/// Session storage adapters.
pub mod storage;

pub use config::{AppConfig, CliArgs, ConfigError, LogLevel};
pub use portal::PortalClient;
pub use storage::KeyringSessionStore;

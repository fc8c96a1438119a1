//! Domain layer with core business entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{CardNumber, GrainType, OtpCode, Session, SessionToken};
pub use errors::{AuthError, GatewayError, WorkflowError};
pub use ports::{AuthPort, NotificationPort, SessionStorePort, ShopkeeperPort};

//! Session storage adapters.

mod keyring_session;

pub use keyring_session::KeyringSessionStore;

//! Rationdesk - a terminal client for ration shop distribution.
//!
//! This crate provides a role-based client for a ration-distribution
//! administration backend, implementing authentication, session
//! management, and the OTP-gated distribution workflow.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases, DTOs, and the workflow.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer containing the CLI and console output.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "rationdesk";

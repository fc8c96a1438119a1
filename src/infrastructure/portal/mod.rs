//! Portal backend client and its wire DTOs.

mod admin_api;
mod auth_api;
mod citizen_api;
mod client;
mod dto;
mod shopkeeper_api;

pub use client::PortalClient;

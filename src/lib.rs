//! Client-side shopping cart state container for the RocketShoes storefront.
//!
//! Tracks which products the shopper has selected and their quantities,
//! validates quantity changes against the remote stock lookup, and mirrors
//! the cart to a persisted key-value store after every mutation. Failures
//! never surface as errors to the caller; each failed operation emits
//! exactly one user-facing [`models::Notification`] through the injected
//! [`models::Notifier`].

pub mod clients;
pub mod config;
pub mod models;
pub mod observability;
pub mod services;
pub mod storage;

pub use config::{Config, ConfigError};
pub use observability::init_tracing;
pub use services::CartService;

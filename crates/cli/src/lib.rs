//! Interactive text front end for the larder inventory.
//!
//! Owns no business logic: it parses what the user types into typed values,
//! calls [`larder_inventory::InventoryStore`] and renders the outcome.

pub mod config;
pub mod menu;
pub mod render;

pub use config::{Config, ConfigError};
pub use menu::Menu;

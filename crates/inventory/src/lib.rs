//! Perishable food inventory domain module.
//!
//! This crate contains the business rules for stock items, implemented purely
//! as deterministic domain logic (no IO, no clock, no terminal). Callers pass
//! typed arguments and receive owned copies of store state or a
//! [`larder_core::DomainError`].

pub mod category;
pub mod id;
pub mod item;
pub mod policy;
pub mod report;
pub mod seed;
pub mod store;

pub use category::Category;
pub use id::{IdSequence, ItemId};
pub use item::{
    AddItem, FoodItem, InventoryCommand, InventoryEvent, ItemAdded, ItemSold, MAX_QUANTITY,
    MAX_UNIT_PRICE, NewItem, Sell, StockUpdated, UpdateStock, parse_expiry_date,
};
pub use policy::StockPolicy;
pub use report::{ItemView, LowStockEntry, ReportSummary, SaleResult};
pub use seed::demo_items;
pub use store::InventoryStore;

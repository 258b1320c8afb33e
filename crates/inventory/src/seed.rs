//! Demo stock loaded at start-up when requested.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use larder_core::{DomainError, DomainResult};

use crate::category::Category;
use crate::item::NewItem;
use crate::policy::StockPolicy;
use crate::store::InventoryStore;

fn date(y: i32, m: u32, d: u32) -> DomainResult<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
        .ok_or_else(|| DomainError::validation(format!("invalid date {y:04}-{m:02}-{d:02}")))
}

/// Three starter items: one per category, the fish already past its date.
pub fn demo_items() -> DomainResult<Vec<NewItem>> {
    Ok(vec![
        NewItem::new("Beef", Category::Meat, 10, Decimal::new(1599, 2), date(2024, 2, 28)?),
        NewItem::new("Salmon", Category::Fish, 3, Decimal::new(2250, 2), date(2023, 12, 15)?),
        NewItem::new("Carrots", Category::Vegetable, 25, Decimal::new(349, 2), date(2024, 3, 10)?),
    ])
}

impl InventoryStore {
    /// A store pre-filled with [`demo_items`]. Ids are minted normally (M1, F1,
    /// V1) so later additions continue the per-category sequences.
    pub fn with_demo_data(policy: StockPolicy) -> DomainResult<Self> {
        let mut store = Self::with_policy(policy);
        for item in demo_items()? {
            store.add_item(item)?;
        }
        Ok(store)
    }
}

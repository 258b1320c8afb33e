//! Read-side result types returned by the store.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::id::ItemId;
use crate::item::FoodItem;

/// One row of `list()`: the item plus its low-stock status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub item: FoodItem,
    pub threshold: i64,
    pub low_stock: bool,
}

/// One row of `scan_low_stock()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LowStockEntry {
    pub item: FoodItem,
    pub threshold: i64,
}

/// Outcome of a successful sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleResult {
    pub item_id: ItemId,
    pub amount: i64,
    pub unit_price: Decimal,
    pub total: Decimal,
    /// Quantity left on hand after the sale.
    pub remaining: i64,
}

/// Aggregate figures over the whole store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Number of distinct items.
    pub item_count: usize,
    /// Sum of quantities across all items.
    pub total_quantity: i64,
    /// `Σ quantity × unit_price`, exact.
    pub total_value: Decimal,
    /// Item count per category; every category is present.
    pub per_category: BTreeMap<Category, usize>,
    /// Items at or below their category's low-stock threshold.
    pub low_stock_count: usize,
}

impl ReportSummary {
    pub fn count(&self, category: Category) -> usize {
        self.per_category.get(&category).copied().unwrap_or(0)
    }
}

use serde::{Deserialize, Serialize};

use larder_core::{DomainError, DomainResult, ValueObject};

use crate::category::Category;
use crate::item::FoodItem;

/// Low-stock thresholds per category.
///
/// An item is low iff `quantity <= threshold(category)`. Fish restocks more
/// often than meat or vegetables, so its default threshold is lower.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockPolicy {
    meat: i64,
    fish: i64,
    vegetable: i64,
}

impl ValueObject for StockPolicy {}

impl Default for StockPolicy {
    fn default() -> Self {
        Self {
            meat: 5,
            fish: 2,
            vegetable: 5,
        }
    }
}

impl StockPolicy {
    pub fn threshold(&self, category: Category) -> i64 {
        match category {
            Category::Meat => self.meat,
            Category::Fish => self.fish,
            Category::Vegetable => self.vegetable,
        }
    }

    /// Return a copy with `category`'s threshold replaced.
    pub fn with_threshold(mut self, category: Category, threshold: i64) -> DomainResult<Self> {
        if threshold < 0 {
            return Err(DomainError::validation(format!(
                "low-stock threshold for {category} cannot be negative"
            )));
        }
        match category {
            Category::Meat => self.meat = threshold,
            Category::Fish => self.fish = threshold,
            Category::Vegetable => self.vegetable = threshold,
        }
        Ok(self)
    }

    pub fn is_low(&self, item: &FoodItem) -> bool {
        item.quantity() <= self.threshold(item.category())
    }
}

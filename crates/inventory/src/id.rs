//! Category-prefixed item identifiers.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use larder_core::{DomainError, ValueObject};

use crate::category::Category;

/// Identifier of a food item: category prefix + 1-based per-category sequence
/// (e.g. `M1`, `F12`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ItemId {
    category: Category,
    sequence: u32,
}

impl ValueObject for ItemId {}

impl ItemId {
    pub fn new(category: Category, sequence: u32) -> Self {
        Self { category, sequence }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn sequence(&self) -> u32 {
        self.sequence
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}{}", self.category.prefix(), self.sequence)
    }
}

impl FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || DomainError::validation(format!("invalid item id '{s}'"));

        let mut chars = s.chars();
        let category = chars
            .next()
            .and_then(Category::from_prefix)
            .ok_or_else(invalid)?;

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let sequence: u32 = digits.parse().map_err(|_| invalid())?;
        if sequence == 0 {
            return Err(invalid());
        }

        Ok(Self { category, sequence })
    }
}

impl From<ItemId> for String {
    fn from(value: ItemId) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for ItemId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Per-category identifier counters.
///
/// Each category counts independently from 1. Counters only move forward, so
/// an identifier is never handed out twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdSequence {
    issued: [u32; 3],
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// The identifier the next `advance` for `category` will return.
    pub fn peek(&self, category: Category) -> ItemId {
        ItemId::new(category, self.issued[category.index()] + 1)
    }

    /// Consume and return the next identifier for `category`.
    pub fn advance(&mut self, category: Category) -> ItemId {
        let id = self.peek(category);
        self.issued[category.index()] = id.sequence();
        id
    }
}

//! In-memory inventory store.
//!
//! Owns every [`FoodItem`] in insertion order, mints identifiers and records
//! each applied event in an append-only journal. Reads hand out owned copies;
//! there is no way to obtain a mutable alias into the collection.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use larder_core::{Aggregate, DomainError, DomainResult};
use larder_events::{EventEnvelope, Journal};

use crate::category::Category;
use crate::id::{IdSequence, ItemId};
use crate::item::{AddItem, FoodItem, InventoryCommand, InventoryEvent, NewItem, Sell, UpdateStock};
use crate::policy::StockPolicy;
use crate::report::{ItemView, LowStockEntry, ReportSummary, SaleResult};

const AGGREGATE_TYPE: &str = "inventory.item";

#[derive(Debug, Clone)]
pub struct InventoryStore {
    items: Vec<FoodItem>,
    index: HashMap<ItemId, usize>,
    ids: IdSequence,
    policy: StockPolicy,
    journal: Journal<InventoryEvent>,
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::with_policy(StockPolicy::default())
    }

    pub fn with_policy(policy: StockPolicy) -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
            ids: IdSequence::new(),
            policy,
            journal: Journal::new(AGGREGATE_TYPE),
        }
    }

    pub fn policy(&self) -> &StockPolicy {
        &self.policy
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Every applied event, in application order.
    pub fn history(&self) -> &[EventEnvelope<InventoryEvent>] {
        self.journal.entries()
    }

    /// Validate and add a new item. The identifier is only consumed on success.
    pub fn add_item(&mut self, new: NewItem) -> DomainResult<FoodItem> {
        let item_id = self.ids.peek(new.category);
        let mut item = FoodItem::empty(item_id);
        let events = item.handle(&InventoryCommand::AddItem(AddItem { item_id, item: new }))?;

        self.ids.advance(item_id.category());
        for event in events {
            item.apply(&event);
            self.journal.append(event.item_id().to_string(), event);
        }

        tracing::info!(
            item_id = %item_id,
            name = item.name(),
            quantity = item.quantity(),
            unit_price = %item.unit_price(),
            "item added"
        );

        self.index.insert(item_id, self.items.len());
        self.items.push(item.clone());
        Ok(item)
    }

    /// Overwrite an item's quantity.
    pub fn update_stock(&mut self, item_id: &ItemId, quantity: i64) -> DomainResult<FoodItem> {
        let previous = self.get(item_id)?.quantity();
        let item = self.execute(
            item_id,
            InventoryCommand::UpdateStock(UpdateStock {
                item_id: *item_id,
                quantity,
            }),
        )?;

        tracing::info!(item_id = %item_id, previous, quantity, "stock updated");
        Ok(item)
    }

    /// Sell `amount` units. All or nothing: a short sale is rejected, never clamped.
    pub fn sell(&mut self, item_id: &ItemId, amount: i64) -> DomainResult<SaleResult> {
        let item = self
            .execute(
                item_id,
                InventoryCommand::Sell(Sell {
                    item_id: *item_id,
                    amount,
                }),
            )
            .inspect_err(|e| {
                if let DomainError::InsufficientStock { requested, available } = e {
                    tracing::warn!(item_id = %item_id, requested, available, "sale rejected");
                }
            })?;

        let unit_price = item.unit_price();
        let sale = SaleResult {
            item_id: *item_id,
            amount,
            unit_price,
            total: Decimal::from(amount) * unit_price,
            remaining: item.quantity(),
        };

        tracing::info!(
            item_id = %item_id,
            amount,
            total = %sale.total,
            remaining = sale.remaining,
            "item sold"
        );
        Ok(sale)
    }

    /// Look up one item by id.
    pub fn get(&self, item_id: &ItemId) -> DomainResult<FoodItem> {
        self.slot(item_id).map(|idx| self.items[idx].clone())
    }

    /// All items in insertion order, flagged against the low-stock policy.
    pub fn list(&self) -> Vec<ItemView> {
        self.items
            .iter()
            .map(|item| ItemView {
                item: item.clone(),
                threshold: self.policy.threshold(item.category()),
                low_stock: self.policy.is_low(item),
            })
            .collect()
    }

    pub fn list_by_category(&self, category: Category) -> Vec<FoodItem> {
        self.filter(|item| item.category() == category)
    }

    /// Case-sensitive substring match on the item name. An empty term matches everything.
    pub fn search(&self, term: &str) -> Vec<FoodItem> {
        tracing::debug!(term, "search");
        self.filter(|item| item.name().contains(term))
    }

    /// Items whose expiry date is strictly before `as_of`.
    pub fn scan_expired(&self, as_of: NaiveDate) -> Vec<FoodItem> {
        tracing::debug!(%as_of, "expiry scan");
        self.filter(|item| item.is_expired(as_of))
    }

    /// Items at or below their category's threshold.
    pub fn scan_low_stock(&self) -> Vec<LowStockEntry> {
        self.items
            .iter()
            .filter(|item| self.policy.is_low(item))
            .map(|item| LowStockEntry {
                item: item.clone(),
                threshold: self.policy.threshold(item.category()),
            })
            .collect()
    }

    /// Totals over the whole store. Item caps keep the sums exact; the
    /// saturating adds only guard against a cap being raised later.
    pub fn report(&self) -> ReportSummary {
        let mut per_category: BTreeMap<Category, usize> =
            Category::ALL.iter().map(|c| (*c, 0)).collect();
        let mut total_quantity = 0i64;
        let mut total_value = Decimal::ZERO;
        let mut low_stock_count = 0usize;

        for item in &self.items {
            total_quantity = total_quantity.saturating_add(item.quantity());
            total_value = total_value.saturating_add(item.value());
            *per_category.entry(item.category()).or_insert(0) += 1;
            if self.policy.is_low(item) {
                low_stock_count += 1;
            }
        }

        ReportSummary {
            item_count: self.items.len(),
            total_quantity,
            total_value,
            per_category,
            low_stock_count,
        }
    }

    fn slot(&self, item_id: &ItemId) -> DomainResult<usize> {
        self.index
            .get(item_id)
            .copied()
            .ok_or_else(|| DomainError::not_found(item_id.to_string()))
    }

    fn filter(&self, pred: impl Fn(&FoodItem) -> bool) -> Vec<FoodItem> {
        self.items.iter().filter(|item| pred(item)).cloned().collect()
    }

    /// Decide on the current state, then apply. Nothing is applied unless
    /// `handle` succeeds.
    fn execute(&mut self, item_id: &ItemId, command: InventoryCommand) -> DomainResult<FoodItem> {
        let idx = self.slot(item_id)?;
        let events = self.items[idx].handle(&command)?;

        let item = &mut self.items[idx];
        for event in events {
            item.apply(&event);
            self.journal.append(event.item_id().to_string(), event);
        }
        Ok(item.clone())
    }
}

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use larder_core::{Aggregate, AggregateRoot, DomainError, DomainResult};
use larder_events::Event;

use crate::category::Category;
use crate::id::ItemId;

/// Largest quantity an item may hold (the range of a 32-bit count).
pub const MAX_QUANTITY: i64 = i32::MAX as i64;

/// Largest accepted unit price: 1,000,000.00.
///
/// With [`MAX_QUANTITY`] this keeps every `quantity × unit_price` and every
/// store-wide sum far inside `Decimal`'s range.
pub const MAX_UNIT_PRICE: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, 2);

/// Parse a `YYYY-MM-DD` expiry date.
pub fn parse_expiry_date(s: &str) -> DomainResult<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| {
        DomainError::validation(format!("expiry date '{s}' is not a valid YYYY-MM-DD date ({e})"))
    })
}

fn check_quantity(quantity: i64) -> Result<(), DomainError> {
    if quantity < 0 {
        return Err(DomainError::validation("quantity cannot be negative"));
    }
    if quantity > MAX_QUANTITY {
        return Err(DomainError::validation(format!("quantity cannot exceed {MAX_QUANTITY}")));
    }
    Ok(())
}

/// Aggregate root: a perishable stock item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodItem {
    id: ItemId,
    name: String,
    quantity: i64,
    unit_price: Decimal,
    expiry_date: NaiveDate,
    version: u64,
    created: bool,
}

impl FoodItem {
    /// Create an empty, not-yet-created item for `id`.
    pub fn empty(id: ItemId) -> Self {
        Self {
            id,
            name: String::new(),
            quantity: 0,
            unit_price: Decimal::ZERO,
            expiry_date: NaiveDate::MIN,
            version: 0,
            created: false,
        }
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.id.category()
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    pub fn expiry_date(&self) -> NaiveDate {
        self.expiry_date
    }

    /// Stock value of this item (`quantity × unit_price`).
    pub fn value(&self) -> Decimal {
        Decimal::from(self.quantity).saturating_mul(self.unit_price)
    }

    pub fn is_expired(&self, as_of: NaiveDate) -> bool {
        self.expiry_date < as_of
    }
}

impl AggregateRoot for FoodItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Field values for a new item. The identifier is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub category: Category,
    pub quantity: i64,
    pub unit_price: Decimal,
    pub expiry_date: NaiveDate,
}

impl NewItem {
    pub fn new(
        name: impl Into<String>,
        category: Category,
        quantity: i64,
        unit_price: Decimal,
        expiry_date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            quantity,
            unit_price,
            expiry_date,
        }
    }
}

/// Command: AddItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddItem {
    pub item_id: ItemId,
    pub item: NewItem,
}

/// Command: UpdateStock (absolute quantity).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateStock {
    pub item_id: ItemId,
    pub quantity: i64,
}

/// Command: Sell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sell {
    pub item_id: ItemId,
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryCommand {
    AddItem(AddItem),
    UpdateStock(UpdateStock),
    Sell(Sell),
}

/// Event: ItemAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub item_id: ItemId,
    pub name: String,
    pub category: Category,
    pub quantity: i64,
    pub unit_price: Decimal,
    pub expiry_date: NaiveDate,
}

/// Event: StockUpdated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockUpdated {
    pub item_id: ItemId,
    pub previous: i64,
    pub quantity: i64,
}

/// Event: ItemSold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSold {
    pub item_id: ItemId,
    pub amount: i64,
    pub unit_price: Decimal,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InventoryEvent {
    ItemAdded(ItemAdded),
    StockUpdated(StockUpdated),
    ItemSold(ItemSold),
}

impl InventoryEvent {
    pub fn item_id(&self) -> ItemId {
        match self {
            InventoryEvent::ItemAdded(e) => e.item_id,
            InventoryEvent::StockUpdated(e) => e.item_id,
            InventoryEvent::ItemSold(e) => e.item_id,
        }
    }
}

impl Event for InventoryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::ItemAdded(_) => "inventory.item.added",
            InventoryEvent::StockUpdated(_) => "inventory.item.stock_updated",
            InventoryEvent::ItemSold(_) => "inventory.item.sold",
        }
    }

    fn version(&self) -> u32 {
        1
    }
}

impl Aggregate for FoodItem {
    type Command = InventoryCommand;
    type Event = InventoryEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            InventoryEvent::ItemAdded(e) => {
                self.id = e.item_id;
                self.name = e.name.clone();
                self.quantity = e.quantity;
                self.unit_price = e.unit_price;
                self.expiry_date = e.expiry_date;
                self.created = true;
            }
            InventoryEvent::StockUpdated(e) => {
                self.quantity = e.quantity;
            }
            InventoryEvent::ItemSold(e) => {
                self.quantity -= e.amount;
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            InventoryCommand::AddItem(cmd) => self.handle_add(cmd),
            InventoryCommand::UpdateStock(cmd) => self.handle_update(cmd),
            InventoryCommand::Sell(cmd) => self.handle_sell(cmd),
        }
    }
}

impl FoodItem {
    fn ensure_created(&self) -> Result<(), DomainError> {
        if !self.created {
            return Err(DomainError::not_found(self.id.to_string()));
        }
        Ok(())
    }

    fn ensure_item_id(&self, item_id: ItemId) -> Result<(), DomainError> {
        if self.id != item_id {
            return Err(DomainError::not_found(item_id.to_string()));
        }
        Ok(())
    }

    fn handle_add(&self, cmd: &AddItem) -> Result<Vec<InventoryEvent>, DomainError> {
        if self.created {
            return Err(DomainError::validation(format!("item {} already exists", self.id)));
        }
        self.ensure_item_id(cmd.item_id)?;

        let item = &cmd.item;
        if item.category != cmd.item_id.category() {
            return Err(DomainError::validation(format!(
                "item id {} does not match category {}",
                cmd.item_id, item.category
            )));
        }
        let name = item.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        check_quantity(item.quantity)?;
        if item.unit_price < Decimal::ZERO {
            return Err(DomainError::validation("unit price cannot be negative"));
        }
        if item.unit_price > MAX_UNIT_PRICE {
            return Err(DomainError::validation(format!(
                "unit price cannot exceed {MAX_UNIT_PRICE}"
            )));
        }

        Ok(vec![InventoryEvent::ItemAdded(ItemAdded {
            item_id: cmd.item_id,
            name: name.to_string(),
            category: item.category,
            quantity: item.quantity,
            unit_price: item.unit_price,
            expiry_date: item.expiry_date,
        })])
    }

    fn handle_update(&self, cmd: &UpdateStock) -> Result<Vec<InventoryEvent>, DomainError> {
        self.ensure_created()?;
        self.ensure_item_id(cmd.item_id)?;

        check_quantity(cmd.quantity)?;

        Ok(vec![InventoryEvent::StockUpdated(StockUpdated {
            item_id: cmd.item_id,
            previous: self.quantity,
            quantity: cmd.quantity,
        })])
    }

    fn handle_sell(&self, cmd: &Sell) -> Result<Vec<InventoryEvent>, DomainError> {
        self.ensure_created()?;
        self.ensure_item_id(cmd.item_id)?;

        if cmd.amount <= 0 {
            return Err(DomainError::validation("sell amount must be positive"));
        }
        if cmd.amount > self.quantity {
            return Err(DomainError::insufficient_stock(cmd.amount, self.quantity));
        }

        // amount <= quantity <= MAX_QUANTITY and unit_price <= MAX_UNIT_PRICE.
        let total = Decimal::from(cmd.amount) * self.unit_price;

        Ok(vec![InventoryEvent::ItemSold(ItemSold {
            item_id: cmd.item_id,
            amount: cmd.amount,
            unit_price: self.unit_price,
            total,
        })])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn salmon_id() -> ItemId {
        ItemId::new(Category::Fish, 1)
    }

    fn add_salmon() -> AddItem {
        AddItem {
            item_id: salmon_id(),
            item: NewItem::new("Salmon", Category::Fish, 3, dec!(22.50), date(2024, 1, 15)),
        }
    }

    fn created_salmon() -> FoodItem {
        let mut item = FoodItem::empty(salmon_id());
        let events = item
            .handle(&InventoryCommand::AddItem(add_salmon()))
            .unwrap();
        item.apply(&events[0]);
        item
    }

    #[test]
    fn add_item_emits_item_added_event() {
        let item = FoodItem::empty(salmon_id());
        let events = item
            .handle(&InventoryCommand::AddItem(add_salmon()))
            .unwrap();
        assert_eq!(events.len(), 1);

        match &events[0] {
            InventoryEvent::ItemAdded(e) => {
                assert_eq!(e.item_id, salmon_id());
                assert_eq!(e.name, "Salmon");
                assert_eq!(e.quantity, 3);
                assert_eq!(e.unit_price, dec!(22.50));
            }
            _ => panic!("Expected ItemAdded event"),
        }
    }

    #[test]
    fn add_item_trims_name() {
        let item = FoodItem::empty(salmon_id());
        let mut cmd = add_salmon();
        cmd.item.name = "  Salmon fillet ".to_string();
        let events = item.handle(&InventoryCommand::AddItem(cmd)).unwrap();

        match &events[0] {
            InventoryEvent::ItemAdded(e) => assert_eq!(e.name, "Salmon fillet"),
            _ => panic!("Expected ItemAdded event"),
        }
    }

    #[test]
    fn add_item_rejects_invalid_fields() {
        let item = FoodItem::empty(salmon_id());

        let mut blank = add_salmon();
        blank.item.name = "   ".to_string();
        let mut negative_qty = add_salmon();
        negative_qty.item.quantity = -1;
        let mut negative_price = add_salmon();
        negative_price.item.unit_price = dec!(-0.01);
        let mut wrong_category = add_salmon();
        wrong_category.item.category = Category::Meat;

        for cmd in [blank, negative_qty, negative_price, wrong_category] {
            let err = item.handle(&InventoryCommand::AddItem(cmd)).unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)), "got {err:?}");
        }
    }

    #[test]
    fn zero_quantity_and_free_items_are_allowed() {
        let item = FoodItem::empty(salmon_id());
        let mut cmd = add_salmon();
        cmd.item.quantity = 0;
        cmd.item.unit_price = Decimal::ZERO;
        assert!(item.handle(&InventoryCommand::AddItem(cmd)).is_ok());
    }

    #[test]
    fn cannot_add_twice() {
        let item = created_salmon();
        let err = item
            .handle(&InventoryCommand::AddItem(add_salmon()))
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("already exists")));
    }

    #[test]
    fn commands_on_missing_item_are_not_found() {
        let item = FoodItem::empty(salmon_id());
        let err = item
            .handle(&InventoryCommand::Sell(Sell {
                item_id: salmon_id(),
                amount: 1,
            }))
            .unwrap_err();
        assert_eq!(err, DomainError::not_found("F1"));
    }

    #[test]
    fn sell_computes_exact_total() {
        let item = created_salmon();
        let events = item
            .handle(&InventoryCommand::Sell(Sell {
                item_id: salmon_id(),
                amount: 2,
            }))
            .unwrap();

        match &events[0] {
            InventoryEvent::ItemSold(e) => {
                assert_eq!(e.total, dec!(45.00));
                assert_eq!(e.unit_price, dec!(22.50));
            }
            _ => panic!("Expected ItemSold event"),
        }
    }

    #[test]
    fn sell_rejects_more_than_on_hand_without_mutating() {
        let item = created_salmon();
        let before = item.clone();
        let err = item
            .handle(&InventoryCommand::Sell(Sell {
                item_id: salmon_id(),
                amount: 5,
            }))
            .unwrap_err();

        assert_eq!(err, DomainError::insufficient_stock(5, 3));
        assert_eq!(item, before);
    }

    #[test]
    fn sell_rejects_non_positive_amounts() {
        let item = created_salmon();
        for amount in [0, -3] {
            let err = item
                .handle(&InventoryCommand::Sell(Sell {
                    item_id: salmon_id(),
                    amount,
                }))
                .unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));
        }
    }

    #[test]
    fn apply_tracks_quantity_and_version() {
        let mut item = created_salmon();
        assert_eq!(item.version(), 1);

        let events = item
            .handle(&InventoryCommand::UpdateStock(UpdateStock {
                item_id: salmon_id(),
                quantity: 8,
            }))
            .unwrap();
        item.apply(&events[0]);
        assert_eq!(item.quantity(), 8);

        let events = item
            .handle(&InventoryCommand::Sell(Sell {
                item_id: salmon_id(),
                amount: 8,
            }))
            .unwrap();
        item.apply(&events[0]);
        assert_eq!(item.quantity(), 0);
        assert_eq!(item.version(), 3);
    }

    #[test]
    fn update_rejects_negative_quantity() {
        let item = created_salmon();
        let err = item
            .handle(&InventoryCommand::UpdateStock(UpdateStock {
                item_id: salmon_id(),
                quantity: -1,
            }))
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn quantity_and_price_are_capped() {
        let item = FoodItem::empty(salmon_id());

        let mut too_many = add_salmon();
        too_many.item.quantity = MAX_QUANTITY + 1;
        let mut way_too_many = add_salmon();
        way_too_many.item.quantity = i64::MAX;
        let mut too_dear = add_salmon();
        too_dear.item.unit_price = MAX_UNIT_PRICE + dec!(0.01);
        let mut absurd_price = add_salmon();
        absurd_price.item.unit_price = dec!(100_000_000_000);

        for cmd in [too_many, way_too_many, too_dear, absurd_price] {
            let err = item.handle(&InventoryCommand::AddItem(cmd)).unwrap_err();
            assert!(matches!(err, DomainError::Validation(msg) if msg.contains("exceed")));
        }

        let item = created_salmon();
        let err = item
            .handle(&InventoryCommand::UpdateStock(UpdateStock {
                item_id: salmon_id(),
                quantity: MAX_QUANTITY + 1,
            }))
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn sale_at_the_caps_has_exact_total() {
        assert_eq!(MAX_UNIT_PRICE, dec!(1_000_000.00));

        let mut item = FoodItem::empty(salmon_id());
        let mut cmd = add_salmon();
        cmd.item.quantity = MAX_QUANTITY;
        cmd.item.unit_price = MAX_UNIT_PRICE;
        let events = item.handle(&InventoryCommand::AddItem(cmd)).unwrap();
        item.apply(&events[0]);
        assert_eq!(item.value(), dec!(2_147_483_647_000_000.00));

        let events = item
            .handle(&InventoryCommand::Sell(Sell {
                item_id: salmon_id(),
                amount: MAX_QUANTITY,
            }))
            .unwrap();
        match &events[0] {
            InventoryEvent::ItemSold(e) => assert_eq!(e.total, dec!(2_147_483_647_000_000.00)),
            _ => panic!("Expected ItemSold event"),
        }
        item.apply(&events[0]);
        assert_eq!(item.quantity(), 0);
    }

    #[test]
    fn expiry_uses_date_comparison() {
        let item = created_salmon();
        assert!(!item.is_expired(date(2024, 1, 1)));
        assert!(!item.is_expired(date(2024, 1, 15)));
        assert!(item.is_expired(date(2024, 1, 16)));
        assert!(item.is_expired(date(2025, 1, 1)));
    }

    #[test]
    fn parse_expiry_date_accepts_iso_dates_only() {
        assert_eq!(parse_expiry_date(" 2024-02-29 ").unwrap(), date(2024, 2, 29));
        for bad in ["2023-02-29", "2024-13-01", "15/01/2024", "", "tomorrow"] {
            assert!(
                matches!(parse_expiry_date(bad), Err(DomainError::Validation(_))),
                "expected '{bad}' to be rejected"
            );
        }
    }
}

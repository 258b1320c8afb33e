//! Text rendering of store results and errors.

use rust_decimal::Decimal;

use larder_core::{AggregateRoot, DomainError};
use larder_inventory::{Category, FoodItem, ItemView, LowStockEntry, ReportSummary, SaleResult};

/// `$` and two decimal places.
pub fn money(amount: Decimal) -> String {
    format!("${:.2}", amount)
}

pub fn error(err: &DomainError) -> String {
    match err {
        DomainError::Validation(msg) => format!("Invalid input: {msg}"),
        DomainError::NotFound(id) => format!("Item not found: {id}"),
        DomainError::InsufficientStock { available, .. } => {
            format!("Not enough stock (available: {available})")
        }
    }
}

pub fn item_row(item: &FoodItem) -> String {
    format!("{} {} {}", item.id(), item.name(), item.quantity())
}

pub fn list_row(view: &ItemView) -> String {
    let mut line = format!(
        "{} {} {} @{}",
        view.item.id(),
        view.item.name(),
        view.item.quantity(),
        money(view.item.unit_price())
    );
    if view.low_stock {
        line.push_str(" [LOW]");
    }
    line
}

pub fn category_header(category: Category) -> String {
    format!("--- {category} ---")
}

pub fn expired_row(item: &FoodItem) -> String {
    format!("{} expired {}", item.name(), item.expiry_date())
}

pub fn low_stock_row(entry: &LowStockEntry) -> String {
    format!(
        "{} only {} left (threshold {})",
        entry.item.name(),
        entry.item.quantity(),
        entry.threshold
    )
}

pub fn sale(sale: &SaleResult) -> String {
    format!(
        "Sold {} for {} ({} left)",
        sale.amount,
        money(sale.total),
        sale.remaining
    )
}

pub fn report(report: &ReportSummary) -> Vec<String> {
    let mut lines = vec![
        "=== Inventory Report ===".to_string(),
        format!("Total items: {}", report.total_quantity),
        format!("Total value: {}", money(report.total_value)),
    ];
    for category in Category::ALL {
        lines.push(format!("{category} items: {}", report.count(category)));
    }
    lines.push(format!("Items needing restock: {}", report.low_stock_count));
    lines
}

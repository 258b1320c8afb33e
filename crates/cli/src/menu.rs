//! The interactive menu loop.

use std::io::{BufRead, Write};
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use larder_core::DomainError;
use larder_inventory::{Category, InventoryStore, ItemId, NewItem, parse_expiry_date};

use crate::render;

const MENU: &str = "\n\
1. Add item\n\
2. Update stock\n\
3. Sell\n\
4. List all\n\
5. By category\n\
6. Check expired\n\
7. Low stock\n\
8. Search\n\
9. Report\n\
h. History\n\
0. Exit";

/// Why an action stopped before completing.
#[derive(Debug, Error)]
enum Interrupt {
    /// Bad input or a rejected operation; shown to the user, the loop continues.
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("end of input")]
    EndOfInput,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

type Step = Result<(), Interrupt>;

/// Menu session over any line-oriented input and output.
pub struct Menu<R, W> {
    store: InventoryStore,
    input: R,
    output: W,
    today: NaiveDate,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// `today` is the reference date for the expiry check.
    pub fn new(store: InventoryStore, input: R, output: W, today: NaiveDate) -> Self {
        Self {
            store,
            input,
            output,
            today,
        }
    }

    /// Consume the menu and hand back the store and the output sink.
    pub fn into_parts(self) -> (InventoryStore, W) {
        (self.store, self.output)
    }

    /// Run until `0` or end of input.
    pub fn run(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "Food Inventory System")?;

        loop {
            writeln!(self.output, "{MENU}")?;
            let choice = match self.prompt("Choice: ") {
                Ok(choice) => choice,
                Err(Interrupt::EndOfInput) => break,
                Err(e) => return Err(e.into()),
            };

            let step = match choice.trim() {
                "1" => self.add_item(),
                "2" => self.update_stock(),
                "3" => self.sell(),
                "4" => self.list_all(),
                "5" => self.by_category(),
                "6" => self.check_expired(),
                "7" => self.low_stock(),
                "8" => self.search(),
                "9" => self.report(),
                "h" | "H" => self.history(),
                "0" => break,
                _ => self.say("Invalid"),
            };

            match step {
                Ok(()) => {}
                Err(Interrupt::Domain(e)) => {
                    tracing::debug!(error = %e, "action rejected");
                    self.say(&render::error(&e))?;
                }
                Err(Interrupt::EndOfInput) => break,
                Err(e) => return Err(e.into()),
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn add_item(&mut self) -> Step {
        self.say("Add Item")?;
        let name = self.prompt("Name: ")?;
        let category: Category = self.prompt("Type (1=Meat, 2=Fish, 3=Veg): ")?.parse()?;
        let quantity = whole_number(&self.prompt("Quantity: ")?)?;
        let unit_price = price(&self.prompt("Price: ")?)?;
        let expiry_date = parse_expiry_date(&self.prompt("Expiry (yyyy-mm-dd): ")?)?;

        let item = self
            .store
            .add_item(NewItem::new(name, category, quantity, unit_price, expiry_date))?;
        self.say(&format!("Added {} ({})", item.name(), item.id_typed()))
    }

    fn update_stock(&mut self) -> Step {
        self.say("Update Stock")?;
        let id: ItemId = self.prompt("Item ID: ")?.parse()?;
        let item = self.store.get(&id)?;
        let quantity = whole_number(&self.prompt(&format!(
            "{} current: {}\nNew quantity: ",
            item.name(),
            item.quantity()
        ))?)?;

        let item = self.store.update_stock(&id, quantity)?;
        self.say(&format!("{} now {}", item.name(), item.quantity()))
    }

    fn sell(&mut self) -> Step {
        self.say("Sell Item")?;
        let id: ItemId = self.prompt("ID: ")?.parse()?;
        let item = self.store.get(&id)?;
        let amount = whole_number(&self.prompt(&format!(
            "Sell how many {}? Have {}: ",
            item.name(),
            item.quantity()
        ))?)?;

        let sale = self.store.sell(&id, amount)?;
        self.say(&render::sale(&sale))
    }

    fn list_all(&mut self) -> Step {
        let rows: Vec<String> = self.store.list().iter().map(render::list_row).collect();
        self.say("\n--- Inventory ---")?;
        self.say_all(rows, "No items")
    }

    fn by_category(&mut self) -> Step {
        let category: Category = self.prompt("Category (1=Meat, 2=Fish, 3=Veg): ")?.parse()?;
        let rows: Vec<String> = self
            .store
            .list_by_category(category)
            .iter()
            .map(render::item_row)
            .collect();
        self.say(&format!("\n{}", render::category_header(category)))?;
        self.say_all(rows, "No items")
    }

    fn check_expired(&mut self) -> Step {
        let rows: Vec<String> = self
            .store
            .scan_expired(self.today)
            .iter()
            .map(render::expired_row)
            .collect();
        self.say(&format!("\nExpired items (as of {}):", self.today))?;
        self.say_all(rows, "None found")
    }

    fn low_stock(&mut self) -> Step {
        let rows: Vec<String> = self
            .store
            .scan_low_stock()
            .iter()
            .map(render::low_stock_row)
            .collect();
        self.say("\nLow stock:")?;
        self.say_all(rows, "All good")
    }

    fn search(&mut self) -> Step {
        let term = self.prompt("Search: ")?;
        let rows: Vec<String> = self.store.search(&term).iter().map(render::item_row).collect();
        self.say_all(rows, "No matches")
    }

    fn report(&mut self) -> Step {
        let lines = render::report(&self.store.report());
        self.say("")?;
        self.say_all(lines, "")
    }

    fn history(&mut self) -> Step {
        self.say("")?;
        let mut lines = Vec::with_capacity(self.store.history().len());
        for entry in self.store.history() {
            lines.push(serde_json::to_string(entry)?);
        }
        self.say_all(lines, "No history")
    }

    /// Print `label`, read one line. The trailing newline is stripped; other
    /// whitespace is kept.
    fn prompt(&mut self, label: &str) -> Result<String, Interrupt> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Interrupt::EndOfInput);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    fn say(&mut self, line: &str) -> Step {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    fn say_all(&mut self, lines: Vec<String>, when_empty: &str) -> Step {
        if lines.is_empty() {
            return self.say(when_empty);
        }
        for line in lines {
            self.say(&line)?;
        }
        Ok(())
    }
}

fn whole_number(s: &str) -> Result<i64, DomainError> {
    s.trim()
        .parse()
        .map_err(|_| DomainError::validation(format!("'{}' is not a whole number", s.trim())))
}

fn price(s: &str) -> Result<Decimal, DomainError> {
    let s = s.trim();
    Decimal::from_str(s.strip_prefix('$').unwrap_or(s))
        .map_err(|_| DomainError::validation(format!("'{s}' is not a price")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_number_rejects_fractions_and_words() {
        assert_eq!(whole_number(" 12 ").unwrap(), 12);
        assert_eq!(whole_number("-3").unwrap(), -3);
        assert!(whole_number("2.5").is_err());
        assert!(whole_number("ten").is_err());
    }

    #[test]
    fn price_accepts_optional_dollar_sign() {
        assert_eq!(price("15.99").unwrap(), Decimal::new(1599, 2));
        assert_eq!(price(" $3.49 ").unwrap(), Decimal::new(349, 2));
        assert!(price("cheap").is_err());
    }
}

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use larder_core::{DomainError, ValueObject};

/// Classification of a food item.
///
/// Drives the identifier prefix and the default low-stock threshold.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Meat,
    Fish,
    Vegetable,
}

impl ValueObject for Category {}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 3] = [Category::Meat, Category::Fish, Category::Vegetable];

    /// Identifier prefix letter.
    pub fn prefix(self) -> char {
        match self {
            Category::Meat => 'M',
            Category::Fish => 'F',
            Category::Vegetable => 'V',
        }
    }

    pub fn from_prefix(prefix: char) -> Option<Self> {
        match prefix.to_ascii_uppercase() {
            'M' => Some(Category::Meat),
            'F' => Some(Category::Fish),
            'V' => Some(Category::Vegetable),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Meat => "Meat",
            Category::Fish => "Fish",
            Category::Vegetable => "Vegetable",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Category::Meat => 0,
            Category::Fish => 1,
            Category::Vegetable => 2,
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts the name (singular or plural), the prefix letter, or the menu
/// number (1=Meat, 2=Fish, 3=Vegetable). Case-insensitive.
impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "m" | "meat" => Ok(Category::Meat),
            "2" | "f" | "fish" => Ok(Category::Fish),
            "3" | "v" | "veg" | "veggie" | "vegetable" | "vegetables" => Ok(Category::Vegetable),
            _ => Err(DomainError::validation(format!(
                "unknown category '{s}' (expected meat, fish or vegetable)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_round_trip() {
        for c in Category::ALL {
            assert_eq!(Category::from_prefix(c.prefix()), Some(c));
        }
        assert_eq!(Category::from_prefix('x'), None);
    }

    #[test]
    fn parses_names_numbers_and_aliases() {
        assert_eq!("Meat".parse::<Category>().unwrap(), Category::Meat);
        assert_eq!(" 2 ".parse::<Category>().unwrap(), Category::Fish);
        assert_eq!("Vegetables".parse::<Category>().unwrap(), Category::Vegetable);
        assert_eq!("veg".parse::<Category>().unwrap(), Category::Vegetable);
    }

    #[test]
    fn rejects_unknown_category() {
        let err = "dairy".parse::<Category>().unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("dairy")));
    }
}

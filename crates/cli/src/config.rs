//! Start-up configuration from environment variables.

use thiserror::Error;

use larder_core::DomainResult;
use larder_inventory::{Category, InventoryStore, StockPolicy};

pub const SEED_DEMO_VAR: &str = "LARDER_SEED_DEMO";

/// Threshold override variable for each category.
pub fn threshold_var(category: Category) -> &'static str {
    match category {
        Category::Meat => "LARDER_LOW_STOCK_MEAT",
        Category::Fish => "LARDER_LOW_STOCK_FISH",
        Category::Vegetable => "LARDER_LOW_STOCK_VEGETABLE",
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: expected true or false, got '{value}'")]
    InvalidBool { var: &'static str, value: String },

    #[error("{var}: expected a non-negative whole number, got '{value}'")]
    InvalidThreshold { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Load the demo items at start-up.
    pub seed_demo: bool,
    pub policy: StockPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_demo: true,
            policy: StockPolicy::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable source; unset variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(SEED_DEMO_VAR) {
            config.seed_demo = parse_bool(&value).ok_or(ConfigError::InvalidBool {
                var: SEED_DEMO_VAR,
                value: value.clone(),
            })?;
        }

        for category in Category::ALL {
            let var = threshold_var(category);
            let Some(value) = lookup(var) else {
                continue;
            };
            let invalid = || ConfigError::InvalidThreshold {
                var,
                value: value.clone(),
            };
            let threshold: i64 = value.trim().parse().map_err(|_| invalid())?;
            config.policy = config
                .policy
                .with_threshold(category, threshold)
                .map_err(|_| invalid())?;
        }

        Ok(config)
    }

    pub fn build_store(&self) -> DomainResult<InventoryStore> {
        if self.seed_demo {
            InventoryStore::with_demo_data(self.policy)
        } else {
            Ok(InventoryStore::with_policy(self.policy))
        }
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

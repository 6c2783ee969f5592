//! Storefront configuration

use serde::{Deserialize, Serialize};
use crate::domain::DomainResult;
use crate::pricing::PriceMode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Prefix for formatted amounts
    pub currency_symbol: String,
    /// How malformed prices are summed
    pub price_mode: PriceMode,
    /// Session storage key for the cart snapshot
    pub session_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            price_mode: PriceMode::Lenient,
            session_key: "storefront.cart".to_string(),
        }
    }
}

impl StoreConfig {
    /// Parse a config object; omitted fields take their defaults.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

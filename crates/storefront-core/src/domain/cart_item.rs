//! Cart Item Entity
//!
//! A product line the user has put in the cart.

use serde::{Deserialize, Serialize};
use super::error::DomainError;

/// Canonical item identifier
///
/// Records coming from older storage may still carry `_id`; it is accepted
/// when reading and always written back as `id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Pick the identifier of an incoming record. `id` wins over `_id`.
pub(crate) fn resolve_id(id: Option<ItemId>, legacy_id: Option<ItemId>) -> Result<ItemId, DomainError> {
    id.or(legacy_id)
        .ok_or_else(|| DomainError::InvalidInput("record has neither `id` nor `_id`".to_string()))
}

/// Wire shape accepted when reading a cart item
#[derive(Deserialize)]
struct CartItemRecord {
    id: Option<ItemId>,
    #[serde(rename = "_id")]
    legacy_id: Option<ItemId>,
    title: String,
    price: String,
    image: String,
    category: String,
}

impl TryFrom<CartItemRecord> for CartItem {
    type Error = DomainError;

    fn try_from(record: CartItemRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: resolve_id(record.id, record.legacy_id)?,
            title: record.title,
            price: record.price,
            image: record.image,
            category: record.category,
        })
    }
}

/// An entry in the cart. Never edited in place; see `Cart::replace`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CartItemRecord")]
pub struct CartItem {
    /// Unique within a cart
    pub id: ItemId,
    pub title: String,
    /// Display price, e.g. "$39"
    pub price: String,
    /// Image URL
    pub image: String,
    pub category: String,
}

impl CartItem {
    pub fn new(
        id: impl Into<ItemId>,
        title: impl Into<String>,
        price: impl Into<String>,
        image: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price: price.into(),
            image: image.into(),
            category: category.into(),
        }
    }
}

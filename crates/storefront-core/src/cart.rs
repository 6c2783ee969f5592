//! Cart Store
//!
//! Ordered, id-unique collection of cart items. Insertion order is display
//! order; every operation is total.

use serde::{Deserialize, Serialize};
use crate::domain::{CartItem, DomainResult, ItemId};
use crate::pricing::{self, PriceMode};

/// Serialized as a plain array; reading one goes through `from_items`, so
/// repeated ids collapse to their first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<CartItem>", into = "Vec<CartItem>")]
pub struct Cart {
    items: Vec<CartItem>,
}

impl From<Vec<CartItem>> for Cart {
    fn from(items: Vec<CartItem>) -> Self {
        Self::from_items(items)
    }
}

impl From<Cart> for Vec<CartItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from a list, keeping the first occurrence of each id.
    pub fn from_items(items: impl IntoIterator<Item = CartItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            cart.add(item);
        }
        cart
    }

    /// Append `item` unless its id is already present. Returns whether it was added.
    pub fn add(&mut self, item: CartItem) -> bool {
        if self.contains(&item.id) {
            log::debug!("cart already holds {}, ignoring add", item.id);
            return false;
        }
        log::debug!("cart add {}", item.id);
        self.items.push(item);
        true
    }

    /// Remove the entry with `id`, if any.
    pub fn remove(&mut self, id: &ItemId) -> Option<CartItem> {
        let pos = self.items.iter().position(|item| &item.id == id)?;
        log::debug!("cart remove {}", id);
        Some(self.items.remove(pos))
    }

    pub fn clear(&mut self) {
        log::debug!("cart clear ({} items)", self.items.len());
        self.items.clear();
    }

    /// Swap in a new version of an existing entry, keeping its position.
    /// Returns the previous entry; no-op when the id is absent.
    pub fn replace(&mut self, item: CartItem) -> Option<CartItem> {
        let slot = self.items.iter_mut().find(|existing| existing.id == item.id)?;
        Some(std::mem::replace(slot, item))
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn ids(&self) -> impl Iterator<Item = &ItemId> {
        self.items.iter().map(|item| &item.id)
    }

    pub fn get(&self, id: &ItemId) -> Option<&CartItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn subtotal(&self) -> f64 {
        pricing::subtotal(&self.items)
    }

    pub fn subtotal_with(&self, mode: PriceMode) -> DomainResult<f64> {
        pricing::subtotal_with(&self.items, mode)
    }
}

impl IntoIterator for Cart {
    type Item = CartItem;
    type IntoIter = std::vec::IntoIter<CartItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

//! Cart Persistence
//!
//! Session-local snapshot of the cart. Backends only move strings; the
//! snapshot format lives here.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use crate::cart::Cart;
use crate::domain::{CartItem, DomainResult};

/// Current snapshot layout
pub const SNAPSHOT_VERSION: u32 = 1;

/// Key-value backend for cart snapshots (browser sessionStorage, memory, ...)
pub trait CartStorage {
    fn load(&self, key: &str) -> DomainResult<Option<String>>;
    fn save(&self, key: &str, value: &str) -> DomainResult<()>;
    fn remove(&self, key: &str) -> DomainResult<()>;
}

/// What gets written under the session key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub version: u32,
    pub items: Vec<CartItem>,
}

impl From<&Cart> for CartSnapshot {
    fn from(cart: &Cart) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            items: cart.items().to_vec(),
        }
    }
}

/// In-memory backend
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self, key: &str) -> DomainResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> DomainResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> DomainResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Write the cart under `key`. An empty cart removes the key.
pub fn persist_cart<S: CartStorage + ?Sized>(storage: &S, key: &str, cart: &Cart) -> DomainResult<()> {
    if cart.is_empty() {
        return storage.remove(key);
    }
    let json = serde_json::to_string(&CartSnapshot::from(cart))?;
    storage.save(key, &json)
}

/// Read the cart stored under `key`.
///
/// A missing or unreadable snapshot yields an empty cart; only backend
/// failures are returned as errors.
pub fn restore_cart<S: CartStorage + ?Sized>(storage: &S, key: &str) -> DomainResult<Cart> {
    let Some(json) = storage.load(key)? else {
        return Ok(Cart::new());
    };
    match serde_json::from_str::<CartSnapshot>(&json) {
        Ok(snapshot) if snapshot.version == SNAPSHOT_VERSION => Ok(Cart::from_items(snapshot.items)),
        Ok(snapshot) => {
            log::warn!("discarding cart snapshot with version {}", snapshot.version);
            Ok(Cart::new())
        }
        Err(e) => {
            log::warn!("discarding corrupt cart snapshot: {}", e);
            Ok(Cart::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    const KEY: &str = "storefront.cart";

    fn item(id: &str) -> CartItem {
        CartItem::new(id, id, "$5", "", "components")
    }

    struct BrokenStorage;

    impl CartStorage for BrokenStorage {
        fn load(&self, _key: &str) -> DomainResult<Option<String>> {
            Err(DomainError::Internal("storage unavailable".into()))
        }
        fn save(&self, _key: &str, _value: &str) -> DomainResult<()> {
            Err(DomainError::Internal("storage unavailable".into()))
        }
        fn remove(&self, _key: &str) -> DomainResult<()> {
            Err(DomainError::Internal("storage unavailable".into()))
        }
    }

    #[test]
    fn test_persist_and_restore_keeps_order() {
        let storage = MemoryStorage::new();
        let cart = Cart::from_items(vec![item("c"), item("a"), item("b")]);
        persist_cart(&storage, KEY, &cart).unwrap();
        let restored = restore_cart(&storage, KEY).unwrap();
        assert_eq!(restored, cart);
    }

    #[test]
    fn test_restore_missing_key_is_empty() {
        let storage = MemoryStorage::new();
        assert!(restore_cart(&storage, KEY).unwrap().is_empty());
    }

    #[test]
    fn test_restore_corrupt_snapshot_is_empty() {
        let storage = MemoryStorage::new();
        storage.save(KEY, "not json at all").unwrap();
        assert!(restore_cart(&storage, KEY).unwrap().is_empty());

        storage.save(KEY, r#"{"version":99,"items":[]}"#).unwrap();
        assert!(restore_cart(&storage, KEY).unwrap().is_empty());
    }

    #[test]
    fn test_restore_dedupes_ids() {
        let storage = MemoryStorage::new();
        let snapshot = CartSnapshot { version: SNAPSHOT_VERSION, items: vec![item("a"), item("a"), item("b")] };
        storage.save(KEY, &serde_json::to_string(&snapshot).unwrap()).unwrap();
        assert_eq!(restore_cart(&storage, KEY).unwrap().len(), 2);
    }

    #[test]
    fn test_persist_empty_cart_removes_key() {
        let storage = MemoryStorage::new();
        persist_cart(&storage, KEY, &Cart::from_items(vec![item("a")])).unwrap();
        persist_cart(&storage, KEY, &Cart::new()).unwrap();
        assert_eq!(storage.load(KEY).unwrap(), None);
    }

    #[test]
    fn test_backend_failure_propagates() {
        assert!(restore_cart(&BrokenStorage, KEY).is_err());
        assert!(persist_cart(&BrokenStorage, KEY, &Cart::from_items(vec![item("a")])).is_err());
    }
}

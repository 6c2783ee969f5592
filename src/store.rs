//! Storefront State Store
//!
//! One store, created in `App` and handed down through context.

use leptos::prelude::*;
use reactive_stores::Store;
use storefront_core::{
    checkout_total, persist_cart, Cart, CartItem, Catalog, DomainResult, FaqAccordion, ItemId, StoreConfig,
};

use crate::storage::SessionStorage;

/// Storefront state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct StorefrontState {
    /// Items the user intends to buy
    pub cart: Cart,
    /// Products shown on the catalog page
    pub catalog: Catalog,
    /// Which FAQ entry is expanded
    pub faq: FaqAccordion,
    pub config: StoreConfig,
}

impl StorefrontState {
    pub fn new(config: StoreConfig, catalog: Catalog, cart: Cart) -> Self {
        Self {
            cart,
            catalog,
            faq: FaqAccordion::new(),
            config,
        }
    }
}

/// Type alias for the store
pub type StorefrontStore = Store<StorefrontState>;

/// Get the storefront store from context
pub fn use_storefront_store() -> StorefrontStore {
    expect_context::<StorefrontStore>()
}

// ========================
// Store Helper Functions
// ========================

fn persist(store: &StorefrontStore) {
    let key = store.config().read_untracked().session_key.clone();
    let cart = store.cart().read_untracked();
    if let Err(e) = persist_cart(&SessionStorage, &key, &cart) {
        web_sys::console::error_1(&format!("[CART] Failed to save cart: {}", e).into());
    }
}

/// Add an item to the cart; returns false if it was already there
pub fn store_add_item(store: &StorefrontStore, item: CartItem) -> bool {
    let added = store.cart().write().add(item);
    if added {
        persist(store);
    }
    added
}

/// Remove an item from the cart by ID
pub fn store_remove_item(store: &StorefrontStore, item_id: &ItemId) {
    let removed = store.cart().write().remove(item_id);
    if removed.is_some() {
        persist(store);
    }
}

/// Empty the cart
pub fn store_clear_cart(store: &StorefrontStore) {
    store.cart().write().clear();
    persist(store);
}

/// Expand or collapse a FAQ entry
pub fn store_toggle_faq(store: &StorefrontStore, index: usize) {
    store.faq().write().toggle(index);
}

/// Order total under the configured price mode (tracked read)
pub fn store_checkout_total(store: &StorefrontStore) -> DomainResult<f64> {
    let mode = store.config().read().price_mode;
    checkout_total(&store.cart().read(), mode)
}

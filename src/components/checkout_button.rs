//! Checkout Button Component
//!
//! Sends signed-in users to checkout and everyone else to sign-in.
//! Disabled while the cart can't be ordered (empty, or a bad price in
//! strict mode).

use leptos::prelude::*;
use storefront_core::begin_checkout;
use crate::context::use_session;
use crate::store::{store_checkout_total, use_storefront_store, StorefrontStateStoreFields};

#[component]
pub fn CheckoutButton() -> impl IntoView {
    let session = use_session();
    let store = use_storefront_store();
    let blocked = move || store_checkout_total(&store).is_err();

    view! {
        <button
            class="checkout-btn"
            disabled=blocked
            on:click=move |_| {
                let mode = store.config().read_untracked().price_mode;
                let result = begin_checkout(&store.cart().read_untracked(), mode, &session, &session);
                match result {
                    Ok(route) => web_sys::console::log_1(&format!("[CART] Checkout -> {}", route).into()),
                    Err(e) => web_sys::console::error_1(&format!("[CART] Checkout refused: {}", e).into()),
                }
            }
        >
            "Checkout"
        </button>
    }
}

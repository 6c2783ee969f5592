//! Cart Panel Component
//!
//! Cart lines in insertion order, subtotal, clear and checkout.

use leptos::prelude::*;
use storefront_core::format_amount;
use crate::components::CheckoutButton;
use crate::store::{
    store_clear_cart, store_remove_item, use_storefront_store, StorefrontStateStoreFields,
    StorefrontStore,
};

/// Subtotal text under the configured price mode
pub fn subtotal_label(store: StorefrontStore) -> String {
    let (mode, symbol) = {
        let config = store.config().read();
        (config.price_mode, config.currency_symbol.clone())
    };
    match store.cart().read().subtotal_with(mode) {
        Ok(amount) => format_amount(amount, &symbol),
        Err(e) => {
            web_sys::console::error_1(&format!("[CART] {}", e).into());
            "n/a".to_string()
        }
    }
}

#[component]
pub fn CartPanel() -> impl IntoView {
    let store = use_storefront_store();

    view! {
        <aside class="cart-panel">
            <h2>{move || format!("Cart ({})", store.cart().read().len())}</h2>
            <Show
                when=move || !store.cart().read().is_empty()
                fallback=|| view! { <p class="cart-empty">"Your cart is empty."</p> }
            >
                <ul class="cart-items">
                    <For
                        each=move || store.cart().read().items().to_vec()
                        key=|item| item.id.clone()
                        children=move |item| {
                            let id = item.id.clone();
                            view! {
                                <li class="cart-item">
                                    <img class="cart-item-image" src=item.image.clone() alt=item.title.clone() />
                                    <span class="cart-item-title">{item.title.clone()}</span>
                                    <span class="cart-item-price">{item.price.clone()}</span>
                                    <button
                                        class="cart-remove-btn"
                                        on:click=move |_| store_remove_item(&store, &id)
                                    >
                                        "×"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
                <button class="cart-clear-btn" on:click=move |_| store_clear_cart(&store)>
                    "Clear cart"
                </button>
            </Show>
            <p class="cart-subtotal">"Subtotal: " {move || subtotal_label(store)}</p>
            <CheckoutButton />
        </aside>
    }
}

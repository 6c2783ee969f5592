//! Storefront App
//!
//! Builds the store and session context, then switches pages on the route.

use leptos::prelude::*;
use reactive_stores::Store;
use storefront_core::{decide_route, restore_cart, Cart, Catalog, Route, StoreConfig};

use crate::components::{CartPanel, CheckoutSummary, FaqList, LoginForm, ProductCard};
use crate::context::{route_from_location, SessionContext};
use crate::models::parse_faq;
use crate::storage::SessionStorage;
use crate::store::{StorefrontState, StorefrontStateStoreFields};

const CONFIG_JSON: &str = include_str!("../assets/config.json");
const CATALOG_JSON: &str = include_str!("../assets/catalog.json");
const FAQ_JSON: &str = include_str!("../assets/faq.json");

fn load_state() -> StorefrontState {
    let config = StoreConfig::from_json(CONFIG_JSON).unwrap_or_else(|e| {
        web_sys::console::error_1(&format!("[APP] Bad config, using defaults: {}", e).into());
        StoreConfig::default()
    });
    let catalog = Catalog::from_json(CATALOG_JSON).unwrap_or_else(|e| {
        web_sys::console::error_1(&format!("[APP] Bad catalog: {}", e).into());
        Catalog::new()
    });
    let cart = restore_cart(&SessionStorage, &config.session_key).unwrap_or_else(|e| {
        web_sys::console::error_1(&format!("[APP] Could not restore cart: {}", e).into());
        Cart::new()
    });
    web_sys::console::log_1(
        &format!("[APP] Loaded {} products, {} cart items", catalog.len(), cart.len()).into(),
    );
    StorefrontState::new(config, catalog, cart)
}

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(load_state());
    let session = SessionContext::new(signal(None), signal(route_from_location()));

    // Provide context to all children
    provide_context(store);
    provide_context(session);

    // Keep the route in step with back/forward and hand-edited fragments
    let _hashchange = window_event_listener(leptos::ev::hashchange, move |_| session.sync_from_location());

    let faq = parse_faq(FAQ_JSON);

    // Checkout is only reachable through the gate, even when typed into the URL
    let page = move || match session.route.get() {
        Route::Checkout => decide_route(session.user.with(Option::is_some)),
        other => other,
    };

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"Template Store"</h1>
                {move || match page() {
                    Route::Catalog => view! {
                        <div class="product-grid">
                            <For
                                each=move || store.catalog().read().products().to_vec()
                                key=|product| product.id.clone()
                                children=|product| view! { <ProductCard product=product /> }
                            />
                        </div>
                    }.into_any(),
                    Route::Cart => view! { <CartPanel /> }.into_any(),
                    Route::Login => view! { <LoginForm /> }.into_any(),
                    Route::Checkout => view! { <CheckoutSummary /> }.into_any(),
                }}
                <FaqList entries=faq />
            </main>
            <Show when=move || page() != Route::Cart>
                <CartPanel />
            </Show>
        </div>
    }
}

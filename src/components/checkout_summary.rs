//! Checkout Summary Component
//!
//! Order review shown once the gate lets the user through. Payment is
//! handled outside this app. A cart that can't be ordered shows the reason
//! instead of the order.

use leptos::prelude::*;
use storefront_core::{Navigator, Route};
use crate::components::cart_panel::subtotal_label;
use crate::context::use_session;
use crate::store::{store_checkout_total, use_storefront_store, StorefrontStateStoreFields};

#[component]
pub fn CheckoutSummary() -> impl IntoView {
    let session = use_session();
    let store = use_storefront_store();
    let refusal = move || store_checkout_total(&store).err().map(|e| e.to_string());

    view! {
        <section class="checkout-summary">
            <h2>"Order summary"</h2>
            <p class="checkout-user">
                {move || session.user.get().map(|u| format!("Signed in as {}", u)).unwrap_or_default()}
            </p>
            <Show
                when=move || refusal().is_none()
                fallback=move || view! {
                    <p class="checkout-refused">
                        "This order can't be placed: " {move || refusal().unwrap_or_default()}
                    </p>
                }
            >
                <ul class="checkout-items">
                    <For
                        each=move || store.cart().read().items().to_vec()
                        key=|item| item.id.clone()
                        children=|item| view! {
                            <li>
                                <span>{item.title}</span>
                                <span class="checkout-item-price">{item.price}</span>
                            </li>
                        }
                    />
                </ul>
                <p class="checkout-subtotal">"Subtotal: " {move || subtotal_label(store)}</p>
            </Show>
            <button class="back-btn" on:click=move |_| session.navigate(Route::Catalog)>
                "Continue shopping"
            </button>
            <button class="sign-out-btn" on:click=move |_| {
                session.sign_out();
                session.navigate(Route::Catalog);
            }>
                "Sign out"
            </button>
        </section>
    }
}

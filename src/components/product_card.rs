//! Product Card Component
//!
//! One catalog listing with an add-to-cart button.

use leptos::prelude::*;
use crate::models::Product;
use crate::store::{store_add_item, use_storefront_store, StorefrontStateStoreFields};

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let store = use_storefront_store();
    let id = product.id.clone();
    let in_cart = move || store.cart().read().contains(&id);
    let in_cart_label = in_cart.clone();
    let item = product.to_cart_item();

    view! {
        <div class="product-card">
            <img class="product-image" src=product.image.clone() alt=product.title.clone() />
            <div class="product-body">
                <span class="product-category">{product.category.clone()}</span>
                <h3 class="product-title">{product.title.clone()}</h3>
                {product.description.clone().map(|d| view! { <p class="product-description">{d}</p> })}
                <div class="product-footer">
                    <span class="product-price">{product.price.clone()}</span>
                    <button
                        class="add-to-cart-btn"
                        disabled=in_cart.clone()
                        on:click=move |_| {
                            if store_add_item(&store, item.clone()) {
                                web_sys::console::log_1(&format!("[CART] Added {}", item.id).into());
                            }
                        }
                    >
                        {move || if in_cart_label() { "In cart" } else { "Add to cart" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

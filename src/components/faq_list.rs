//! FAQ Accordion Component

use leptos::prelude::*;
use crate::models::FaqEntry;
use crate::store::{store_toggle_faq, use_storefront_store, StorefrontStateStoreFields};

#[component]
pub fn FaqList(entries: Vec<FaqEntry>) -> impl IntoView {
    let store = use_storefront_store();

    view! {
        <section class="faq">
            <h2>"Frequently asked questions"</h2>
            {entries.into_iter().enumerate().map(|(index, FaqEntry { question, answer })| {
                let is_open = move || store.faq().read().is_open(index);
                view! {
                    <div class="faq-entry">
                        <button
                            class=move || if is_open() { "faq-question open" } else { "faq-question" }
                            on:click=move |_| store_toggle_faq(&store, index)
                        >
                            {question}
                        </button>
                        <Show when=is_open>
                            <p class="faq-answer">{answer.clone()}</p>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </section>
    }
}

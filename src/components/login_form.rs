//! Login Form Component
//!
//! Stand-in for the external sign-in flow: records an email in the session
//! and resumes checkout.

use leptos::prelude::*;
use storefront_core::{Navigator, Route};
use crate::context::use_session;

#[component]
pub fn LoginForm() -> impl IntoView {
    let session = use_session();
    let (email, set_email) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let value = email.get().trim().to_string();
        if value.is_empty() { return; }
        session.sign_in(value);
        session.navigate(Route::Checkout);
    };

    view! {
        <form class="login-form" on:submit=on_submit>
            <h2>"Sign in to continue"</h2>
            <input
                type="email"
                placeholder="you@example.com"
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <button type="submit">"Sign in"</button>
            <button type="button" on:click=move |_| session.navigate(Route::Catalog)>"Back"</button>
        </form>
    }
}

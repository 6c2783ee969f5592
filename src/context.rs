//! Session Context
//!
//! Signed-in user and current route, provided via Leptos Context API.
//! Also the auth source and navigator the checkout gate talks to.

use leptos::prelude::*;
use storefront_core::{AuthState, Navigator, Route};

#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Signed-in account email (None = anonymous) - read
    pub user: ReadSignal<Option<String>>,
    /// Signed-in account email - write
    set_user: WriteSignal<Option<String>>,
    /// Page currently shown - read
    pub route: ReadSignal<Route>,
    /// Page currently shown - write
    set_route: WriteSignal<Route>,
}

impl SessionContext {
    pub fn new(
        user: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
        route: (ReadSignal<Route>, WriteSignal<Route>),
    ) -> Self {
        Self {
            user: user.0,
            set_user: user.1,
            route: route.0,
            set_route: route.1,
        }
    }

    pub fn sign_in(&self, email: String) {
        self.set_user.set(Some(email));
    }

    pub fn sign_out(&self) {
        self.set_user.set(None);
    }

    /// Follow the URL after back/forward or a hand-edited fragment
    pub fn sync_from_location(&self) {
        let route = route_from_location();
        if self.route.get_untracked() != route {
            self.set_route.set(route);
        }
    }
}

impl AuthState for SessionContext {
    fn is_authenticated(&self) -> bool {
        self.user.with_untracked(|user| user.is_some())
    }
}

impl Navigator for SessionContext {
    fn navigate(&self, route: Route) {
        self.set_route.set(route);
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_hash(route.as_str()) {
                web_sys::console::error_1(&format!("[APP] Failed to set location hash: {:?}", e).into());
            }
        }
    }
}

/// Route named by the URL fragment (`#checkout`), Catalog when absent
pub fn route_from_location() -> Route {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .map(|hash| Route::from_hash(&hash))
        .unwrap_or_default()
}

/// Get the session context
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

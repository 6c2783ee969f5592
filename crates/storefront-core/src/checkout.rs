//! Checkout Gate
//!
//! Routes an anonymous visitor to sign-in before purchase.

use serde::{Deserialize, Serialize};
use crate::cart::Cart;
use crate::domain::{DomainError, DomainResult};
use crate::pricing::PriceMode;

/// Navigation targets the storefront knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    #[default]
    Catalog,
    Cart,
    Login,
    Checkout,
}

impl Route {
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Catalog => "catalog",
            Route::Cart => "cart",
            Route::Login => "login",
            Route::Checkout => "checkout",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "cart" => Route::Cart,
            "login" => Route::Login,
            "checkout" => Route::Checkout,
            _ => Route::Catalog,
        }
    }

    /// Route named by a URL fragment such as `#checkout`
    pub fn from_hash(hash: &str) -> Self {
        Self::from_str(hash.trim_start_matches('#'))
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source of the current session
pub trait AuthState {
    fn is_authenticated(&self) -> bool;
}

/// Something that can move the user to another route
pub trait Navigator {
    fn navigate(&self, route: Route);
}

impl AuthState for bool {
    fn is_authenticated(&self) -> bool {
        *self
    }
}

pub fn decide_route(is_authenticated: bool) -> Route {
    if is_authenticated {
        Route::Checkout
    } else {
        Route::Login
    }
}

/// Decide where "checkout" leads and send the user there.
pub fn proceed_to_checkout<A, N>(auth: &A, nav: &N) -> Route
where
    A: AuthState + ?Sized,
    N: Navigator + ?Sized,
{
    let route = decide_route(auth.is_authenticated());
    log::debug!("checkout gate -> {}", route);
    nav.navigate(route);
    route
}

/// Amount the order would be placed for.
///
/// Fails for an empty cart, and in strict mode for any malformed price.
pub fn checkout_total(cart: &Cart, mode: PriceMode) -> DomainResult<f64> {
    if cart.is_empty() {
        return Err(DomainError::InvalidInput("cart is empty".to_string()));
    }
    cart.subtotal_with(mode)
}

/// Check the cart can be ordered, then pass through the gate.
/// Nothing is navigated when the cart is rejected.
pub fn begin_checkout<A, N>(cart: &Cart, mode: PriceMode, auth: &A, nav: &N) -> DomainResult<Route>
where
    A: AuthState + ?Sized,
    N: Navigator + ?Sized,
{
    checkout_total(cart, mode)?;
    Ok(proceed_to_checkout(auth, nav))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CartItem;
    use std::cell::RefCell;

    fn cart_with(prices: &[&str]) -> Cart {
        Cart::from_items(
            prices
                .iter()
                .enumerate()
                .map(|(n, price)| CartItem::new(format!("i-{}", n), "Item", *price, "", "templates")),
        )
    }

    #[derive(Default)]
    struct RecordingNavigator {
        visited: RefCell<Vec<Route>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, route: Route) {
            self.visited.borrow_mut().push(route);
        }
    }

    #[test]
    fn test_decide_route() {
        assert_eq!(decide_route(false), Route::Login);
        assert_eq!(decide_route(true), Route::Checkout);
        assert_eq!(decide_route(false).as_str(), "login");
        assert_eq!(decide_route(true).as_str(), "checkout");
    }

    #[test]
    fn test_proceed_navigates_once() {
        let nav = RecordingNavigator::default();
        assert_eq!(proceed_to_checkout(&false, &nav), Route::Login);
        assert_eq!(proceed_to_checkout(&true, &nav), Route::Checkout);
        assert_eq!(*nav.visited.borrow(), vec![Route::Login, Route::Checkout]);
    }

    #[test]
    fn test_checkout_total() {
        assert!(matches!(checkout_total(&Cart::new(), PriceMode::Lenient), Err(DomainError::InvalidInput(_))));
        let cart = cart_with(&["$39", "free"]);
        assert_eq!(checkout_total(&cart, PriceMode::Lenient), Ok(39.0));
        assert!(checkout_total(&cart, PriceMode::Strict).is_err());
    }

    #[test]
    fn test_strict_mode_blocks_checkout_with_malformed_price() {
        let nav = RecordingNavigator::default();
        let cart = cart_with(&["$39", "free"]);
        assert!(begin_checkout(&cart, PriceMode::Strict, &true, &nav).is_err());
        assert!(nav.visited.borrow().is_empty());

        assert_eq!(begin_checkout(&cart, PriceMode::Lenient, &true, &nav), Ok(Route::Checkout));
        assert_eq!(begin_checkout(&cart, PriceMode::Lenient, &false, &nav), Ok(Route::Login));
        assert_eq!(*nav.visited.borrow(), vec![Route::Checkout, Route::Login]);
    }

    #[test]
    fn test_empty_cart_never_navigates() {
        let nav = RecordingNavigator::default();
        assert!(begin_checkout(&Cart::new(), PriceMode::Lenient, &true, &nav).is_err());
        assert!(nav.visited.borrow().is_empty());
    }

    #[test]
    fn test_route_from_str() {
        assert_eq!(Route::from_str("checkout"), Route::Checkout);
        assert_eq!(Route::from_str("nowhere"), Route::Catalog);
        assert_eq!(Route::Cart.to_string(), "cart");
    }

    #[test]
    fn test_route_from_hash() {
        assert_eq!(Route::from_hash("#checkout"), Route::Checkout);
        assert_eq!(Route::from_hash("login"), Route::Login);
        assert_eq!(Route::from_hash(""), Route::Catalog);
        assert_eq!(Route::from_hash("#"), Route::Catalog);
        assert_eq!(Route::from_hash(&format!("#{}", Route::Cart)), Route::Cart);
    }
}

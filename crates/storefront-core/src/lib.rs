//! Storefront Core
//!
//! Layered the same way as the rest of the app:
//! - domain: entities and errors
//! - cart / pricing / checkout: the shopping flow
//! - catalog, faq: what the storefront pages browse
//! - storage, config: session persistence and settings

pub mod domain;
pub mod cart;
pub mod pricing;
pub mod checkout;
pub mod catalog;
pub mod faq;
pub mod storage;
pub mod config;


pub use domain::{CartItem, DomainError, DomainResult, ItemId, Product};
pub use cart::Cart;
pub use pricing::{format_amount, parse_amount, subtotal, to_amount, try_subtotal, PriceMode};
pub use checkout::{
    begin_checkout, checkout_total, decide_route, proceed_to_checkout, AuthState, Navigator, Route,
};
pub use catalog::Catalog;
pub use faq::FaqAccordion;
pub use storage::{persist_cart, restore_cart, CartSnapshot, CartStorage, MemoryStorage};
pub use config::StoreConfig;

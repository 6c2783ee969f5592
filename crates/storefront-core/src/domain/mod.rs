//! Domain Layer
//!
//! Entities shared by the cart, catalog and checkout flow.
//! This layer has NO external dependencies (except serde for serialization).

mod error;
mod cart_item;
mod product;

pub use error::{DomainError, DomainResult};
pub use cart_item::{CartItem, ItemId};
pub use product::Product;

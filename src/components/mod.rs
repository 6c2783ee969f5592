//! UI Components
//!
//! Reusable Leptos components.

mod product_card;
pub(crate) mod cart_panel;
mod checkout_button;
mod checkout_summary;
mod faq_list;
mod login_form;

pub use product_card::ProductCard;
pub use cart_panel::CartPanel;
pub use checkout_button::CheckoutButton;
pub use checkout_summary::CheckoutSummary;
pub use faq_list::FaqList;
pub use login_form::LoginForm;

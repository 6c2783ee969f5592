//! Frontend Models
//!
//! Cart and catalog types come from storefront-core; page content lives here.

use serde::{Deserialize, Serialize};

pub use storefront_core::Product;

/// One question/answer pair in the FAQ accordion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// Parse the bundled FAQ list. Bad content yields an empty list.
pub fn parse_faq(json: &str) -> Vec<FaqEntry> {
    match serde_json::from_str(json) {
        Ok(entries) => entries,
        Err(e) => {
            web_sys::console::error_1(&format!("[APP] Bad FAQ content: {}", e).into());
            Vec::new()
        }
    }
}

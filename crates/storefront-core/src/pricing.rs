//! Price normalization
//!
//! Display prices are free-form strings ("$39", "$1,200", "free"). Every
//! character other than a digit, `.` or `-` is dropped before parsing.

use serde::{Deserialize, Serialize};
use crate::domain::{CartItem, DomainError, DomainResult};

/// How malformed price strings are treated when summing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PriceMode {
    /// Malformed prices count as zero
    #[default]
    Lenient,
    /// Malformed prices fail the sum
    Strict,
}

/// Finite amount left after stripping, if any. Overflowing digit runs
/// (which `f64` reads as infinity) count as malformed.
fn numeric_amount(price: &str) -> Option<f64> {
    let digits: String = price
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    digits.parse::<f64>().ok().filter(|amount| amount.is_finite())
}

/// Parse a display price, returning 0 when nothing numeric remains.
pub fn to_amount(price: &str) -> f64 {
    numeric_amount(price).unwrap_or_else(|| {
        log::warn!("unparseable price {:?}, counting as 0", price);
        0.0
    })
}

/// Strict counterpart of [`to_amount`].
pub fn parse_amount(price: &str) -> DomainResult<f64> {
    numeric_amount(price)
        .ok_or_else(|| DomainError::InvalidInput(format!("price {:?} is not a number", price)))
}

/// Sum of item prices in list order; 0 for an empty list.
pub fn subtotal(items: &[CartItem]) -> f64 {
    items.iter().map(|item| to_amount(&item.price)).sum()
}

/// Sum of item prices, failing on the first malformed one.
pub fn try_subtotal(items: &[CartItem]) -> DomainResult<f64> {
    items.iter().try_fold(0.0, |acc, item| Ok(acc + parse_amount(&item.price)?))
}

/// Subtotal under the given mode.
pub fn subtotal_with(items: &[CartItem], mode: PriceMode) -> DomainResult<f64> {
    match mode {
        PriceMode::Lenient => Ok(subtotal(items)),
        PriceMode::Strict => try_subtotal(items),
    }
}

/// "$49.50"
pub fn format_amount(amount: f64, currency_symbol: &str) -> String {
    format!("{}{:.2}", currency_symbol, amount)
}

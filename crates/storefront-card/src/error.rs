//! Card input errors.

use crate::money::{Currency, Money};
use thiserror::Error;

/// Errors raised at the product-card input boundary.
///
/// Classification is total and never fails; every variant here is produced
/// while constructing or validating a [`ProductCard`](crate::ProductCard),
/// before the classifier runs. Malformed catalog entries are rejected at
/// ingestion and never reach rendering.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CardError {
    /// Slug was empty or whitespace-only.
    #[error("slug must not be empty")]
    EmptySlug,

    /// Listed price was negative.
    #[error("price must not be negative: {0}")]
    NegativePrice(Money),

    /// Sale price was negative.
    #[error("sale price must not be negative: {0}")]
    NegativeSalePrice(Money),

    /// Sale price carries a different currency than the listed price.
    #[error("currency mismatch: price is {price}, sale price is {sale}")]
    CurrencyMismatch { price: Currency, sale: Currency },
}

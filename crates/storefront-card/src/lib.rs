//! Product card domain core for a storefront catalog grid.
//!
//! This crate owns the one decision a catalog card makes — which display
//! variant it gets — plus the validated input record and the handoff value
//! a render layer consumes:
//!
//! - **Input**: [`ProductCard`] — immutable per-render record, validated at
//!   construction
//! - **Classification**: [`classify_variant`] — maps a card to exactly one
//!   [`Variant`] (`on-sale`, `new-release`, `default`)
//! - **Handoff**: [`CardView`] — the display fields plus the variant, handed
//!   to a render-tree builder
//! - **Seams**: [`Recency`] (injected date predicate) and [`CardObserver`]
//!   (optional event sink) keep the classifier pure and deterministic
//!
//! Rendering lives elsewhere. This crate has no dependency on any UI
//! toolkit; everything visual happens on the far side of the [`CardView`]
//! boundary.
//!
//! # Example
//!
//! ```
//! use storefront_card::prelude::*;
//! use chrono::NaiveDate;
//!
//! # fn main() -> Result<(), CardError> {
//! let today = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
//!
//! let card = ProductCard::new(
//!     "air-flight-87",
//!     "Air Flight 87",
//!     "/images/air-flight-87.jpg",
//!     Money::from_decimal(160.0, Currency::USD),
//! )?
//! .with_sale_price(Money::from_decimal(129.99, Currency::USD))?
//! .with_release_date(today);
//!
//! // A discounted new release surfaces the sale.
//! let variant = classify_variant(&card, &RecencyWindow::one_month(today));
//! assert_eq!(variant, Variant::OnSale);
//! # Ok(())
//! # }
//! ```

pub mod card;
pub mod error;
pub mod ids;
pub mod money;
pub mod observe;
pub mod recency;

pub use card::{classify, classify_variant, CardPresenter, CardView, ProductCard, Variant};
pub use error::CardError;
pub use ids::Slug;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::card::{
        classify, classify_variant, CardPresenter, CardView, ProductCard, Variant,
    };
    pub use crate::error::CardError;
    pub use crate::ids::Slug;
    pub use crate::money::{Currency, Money};
    pub use crate::observe::{CardObserver, TracingObserver};
    pub use crate::recency::{Recency, RecencyWindow};
}

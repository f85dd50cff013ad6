//! Validated product card input.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CardError;
use crate::ids::Slug;
use crate::money::Money;

/// The data a product card is built from.
///
/// Construction goes through [`ProductCard::new`] and the `with_*` builders,
/// which reject invalid values up front. Classification downstream assumes a
/// well-formed card and never re-validates. Deserialized cards bypass the
/// constructors, so ingestion code must call [`ProductCard::validate`] before
/// handing them on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub slug: Slug,
    pub name: String,
    pub image_src: String,
    /// Regular price. Always shown, struck through while a sale is running.
    pub price: Money,
    /// Current sale price. Presence alone marks the card as on sale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<Money>,
    /// When the product went live. Absent for catalog backfill items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<NaiveDate>,
    pub num_of_colors: u32,
}

impl ProductCard {
    /// Creates a card with the required fields, defaulting to one colorway,
    /// no sale, and no release date.
    pub fn new(
        slug: impl Into<String>,
        name: impl Into<String>,
        image_src: impl Into<String>,
        price: Money,
    ) -> Result<Self, CardError> {
        let card = Self {
            slug: Slug::new(slug)?,
            name: name.into(),
            image_src: image_src.into(),
            price,
            sale_price: None,
            release_date: None,
            num_of_colors: 1,
        };
        card.validate()?;
        Ok(card)
    }

    /// Puts the card on sale. A zero sale price is accepted; being on sale
    /// is about presence, not amount.
    pub fn with_sale_price(mut self, sale_price: Money) -> Result<Self, CardError> {
        self.sale_price = Some(sale_price);
        self.validate()?;
        Ok(self)
    }

    pub fn with_release_date(mut self, release_date: NaiveDate) -> Self {
        self.release_date = Some(release_date);
        self
    }

    pub fn with_colors(mut self, num_of_colors: u32) -> Self {
        self.num_of_colors = num_of_colors;
        self
    }

    /// Checks every field-level invariant. The constructors call this, so
    /// only deserialized or hand-assembled cards need it explicitly.
    pub fn validate(&self) -> Result<(), CardError> {
        if self.slug.as_str().trim().is_empty() {
            return Err(CardError::EmptySlug);
        }
        if self.price.is_negative() {
            return Err(CardError::NegativePrice(self.price));
        }
        if let Some(sale) = self.sale_price {
            if sale.is_negative() {
                return Err(CardError::NegativeSalePrice(sale));
            }
            if sale.currency != self.price.currency {
                return Err(CardError::CurrencyMismatch {
                    price: self.price.currency,
                    sale: sale.currency,
                });
            }
        }
        Ok(())
    }

    /// True while a sale price is attached, whatever its amount.
    pub fn is_discounted(&self) -> bool {
        self.sale_price.is_some()
    }
}

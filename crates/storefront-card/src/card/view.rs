//! Render handoff for a classified card.

use serde::{Deserialize, Serialize};

use crate::card::input::ProductCard;
use crate::card::variant::Variant;
use crate::ids::Slug;
use crate::money::Money;

/// Everything a renderer needs to draw one card.
///
/// The release date is deliberately absent: recency has already been folded
/// into [`Variant`], so renderers decide badges and price treatment from the
/// variant and the sale price alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub slug: Slug,
    pub name: String,
    pub image_src: String,
    pub price: Money,
    /// Drives the strikethrough treatment on the regular price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<Money>,
    pub num_of_colors: u32,
    pub variant: Variant,
}

impl CardView {
    pub fn from_card(card: &ProductCard, variant: Variant) -> Self {
        Self {
            slug: card.slug.clone(),
            name: card.name.clone(),
            image_src: card.image_src.clone(),
            price: card.price,
            sale_price: card.sale_price,
            num_of_colors: card.num_of_colors,
            variant,
        }
    }
}

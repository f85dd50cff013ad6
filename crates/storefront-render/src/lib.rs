//! HTML render layer for storefront product cards.
//!
//! The domain core hands over a [`CardView`]; everything visual happens
//! here. The seam is the [`CardRenderer`] trait, so a different toolkit can
//! stand in without the core noticing. [`HtmlCards`] is the plain-HTML
//! implementation: `format!`-assembled markup, escaped text, and an
//! embedded stylesheet ([`CARD_STYLES`]).
//!
//! Render rules, fixed by contract:
//!
//! - Badge only for `new-release` ("Just released") and `on-sale` ("Sale");
//!   no badge for `default`.
//! - The regular price is struck through whenever a sale price is present,
//!   regardless of variant.
//! - The color count is pluralized (`1 Color`, `3 Colors`).

mod card;
mod escape;
mod format;
mod grid;
mod style;

use storefront_card::CardView;

pub use escape::{escape_attr, escape_html};
pub use format::pluralize;
pub use grid::render_grid_skeleton;
pub use style::CARD_STYLES;

/// Render-tree builder seam the presenter hands [`CardView`]s to.
pub trait CardRenderer {
    /// Render a single card.
    fn render_card(&self, view: &CardView) -> String;

    /// Render the catalog grid, one card per view, in input order.
    fn render_grid(&self, views: &[CardView]) -> String;
}

/// Plain-HTML card renderer.
///
/// Cards link to `{link_prefix}/{slug}`; the prefix defaults to `/shoe`.
#[derive(Debug, Clone)]
pub struct HtmlCards {
    link_prefix: String,
}

impl HtmlCards {
    pub fn new() -> Self {
        Self {
            link_prefix: "/shoe".to_string(),
        }
    }

    /// Override where card links point, e.g. `/products`.
    pub fn with_link_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.link_prefix = prefix.into();
        self
    }
}

impl Default for HtmlCards {
    fn default() -> Self {
        Self::new()
    }
}

impl CardRenderer for HtmlCards {
    fn render_card(&self, view: &CardView) -> String {
        card::render_card(view, &self.link_prefix)
    }

    fn render_grid(&self, views: &[CardView]) -> String {
        grid::render_grid(views, &self.link_prefix)
    }
}

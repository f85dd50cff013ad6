//! Catalog grid section and its skeleton placeholder.

use storefront_card::CardView;

use crate::card::render_card;

/// Render the catalog grid section, one card per view, in input order.
pub(crate) fn render_grid(views: &[CardView], link_prefix: &str) -> String {
    let cards: String = views
        .iter()
        .map(|view| render_card(view, link_prefix))
        .collect();

    format!(
        r#"<section class="catalog-results" data-section="catalog">
    <div class="catalog-grid">
        {}
    </div>
</section>"#,
        cards
    )
}

/// Render skeleton placeholder cards while catalog data is pending.
pub fn render_grid_skeleton(count: usize) -> String {
    let cards: String = (0..count)
        .map(|_| {
            r#"<div class="shoe-card skeleton">
        <div class="skeleton-image"></div>
        <div class="skeleton-text"></div>
        <div class="skeleton-text short"></div>
    </div>"#
        })
        .collect();

    format!(
        r#"<section class="catalog-results skeleton" data-section="catalog">
    <div class="catalog-grid">
        {}
    </div>
</section>"#,
        cards
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skeleton_card_count() {
        let html = render_grid_skeleton(4);
        assert_eq!(html.matches("shoe-card skeleton").count(), 4);
    }

    #[test]
    fn test_empty_grid_still_renders_section() {
        let html = render_grid(&[], "/shoe");
        assert!(html.contains(r#"data-section="catalog""#));
        assert!(!html.contains("card-link"));
    }
}

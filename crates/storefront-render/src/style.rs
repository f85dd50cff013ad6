//! Embedded stylesheet for the card grid.

/// Static styles covering the grid, the card layout, the corner badge, and
/// the struck-through price. No media queries, no theming hooks.
pub const CARD_STYLES: &str = r##"
:root {
    --sale: hsl(340deg 65% 47%);
    --new-release: hsl(240deg 60% 63%);
    --text: hsl(220deg 12% 13%);
    --text-muted: hsl(210deg 9% 40%);
    --frame-bg: hsl(185deg 5% 95%);
    --white: hsl(0deg 0% 100%);
}

.catalog-grid {
    display: flex;
    flex-wrap: wrap;
    gap: 32px;
}

.card-link {
    text-decoration: none;
    color: inherit;
    flex-basis: 235px;
    flex-grow: 1;
    flex-shrink: 1;
    max-width: 378px;
}

.shoe-card {
    display: flex;
    flex-direction: column;
    justify-content: flex-start;
    position: relative;
}

.card-image-frame {
    border-radius: 16px 16px 4px 4px;
    overflow: hidden;
    position: relative;
    background-color: var(--frame-bg);
}

.card-image {
    display: block;
    width: 100%;
    object-fit: scale-down;
}

.card-row {
    display: flex;
    justify-content: space-between;
    font-size: 1rem;
    margin-top: 12px;
}

.card-row + .card-row {
    margin-top: 4px;
}

.card-name {
    font-weight: 600;
    color: var(--text);
}

.card-price--struck {
    text-decoration: line-through;
    color: var(--text-muted);
}

.card-colors {
    color: var(--text-muted);
}

.card-sale-price {
    font-weight: 600;
    color: var(--sale);
}

.card-badge {
    position: absolute;
    top: 12px;
    right: -4px;
    color: var(--white);
    font-size: 0.875rem;
    font-weight: 700;
    border-radius: 2px;
    padding: 7px 9px 9px 10px;
}

.card-badge--new {
    background-color: var(--new-release);
}

.card-badge--sale {
    background-color: var(--sale);
}

.shoe-card.skeleton .skeleton-image {
    border-radius: 16px 16px 4px 4px;
    background-color: var(--frame-bg);
    height: 270px;
}

.shoe-card.skeleton .skeleton-text {
    background-color: var(--frame-bg);
    border-radius: 4px;
    height: 1rem;
    margin-top: 12px;
}

.shoe-card.skeleton .skeleton-text.short {
    width: 40%;
    margin-top: 4px;
}
"##;

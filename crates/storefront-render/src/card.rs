//! Single card markup.

use storefront_card::{CardView, Variant};

use crate::escape::{escape_attr, escape_html};
use crate::format::pluralize;

/// Render one product card as an anchor wrapping the card article.
///
/// The badge follows the variant; the strikethrough on the regular price
/// follows sale-price presence alone. A card whose variant is not `OnSale`
/// but whose view carries a sale price still strikes the regular price.
pub(crate) fn render_card(view: &CardView, link_prefix: &str) -> String {
    let price_class = if view.sale_price.is_some() {
        "card-price card-price--struck"
    } else {
        "card-price"
    };

    let sale_price = match &view.sale_price {
        Some(sale) => format!(
            r#"<span class="card-sale-price">{}</span>"#,
            escape_html(&sale.display())
        ),
        None => String::new(),
    };

    format!(
        r#"<a href="{prefix}/{slug}" class="card-link">
    <article class="shoe-card" data-variant="{variant}">
        <div class="card-image-frame">
            <img class="card-image" alt="" src="{image_src}" loading="lazy">
        </div>
        <div class="card-row">
            <h3 class="card-name">{name}</h3>
            <span class="{price_class}">{price}</span>
        </div>
        <div class="card-row">
            <p class="card-colors">{colors}</p>
            {sale_price}
        </div>
        {badge}
    </article>
</a>"#,
        prefix = link_prefix,
        slug = escape_attr(view.slug.as_str()),
        variant = view.variant.as_str(),
        image_src = escape_attr(&view.image_src),
        name = escape_html(&view.name),
        price_class = price_class,
        price = escape_html(&view.price.display()),
        colors = escape_html(&pluralize("Color", view.num_of_colors)),
        sale_price = sale_price,
        badge = render_badge(view.variant),
    )
}

fn render_badge(variant: Variant) -> String {
    match variant {
        Variant::NewRelease => {
            r#"<div class="card-badge card-badge--new">Just released</div>"#.to_string()
        }
        Variant::OnSale => r#"<div class="card-badge card-badge--sale">Sale</div>"#.to_string(),
        Variant::Default => String::new(),
    }
}

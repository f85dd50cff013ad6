//! Catalog grid demo.
//!
//! Presents a fixture catalog through the card core and prints a complete
//! HTML page to stdout. Run with `RUST_LOG=storefront_card=debug` to watch
//! the observer report each variant assignment.

use anyhow::Result;
use chrono::{Days, NaiveDate, Utc};

use storefront_card::prelude::*;
use storefront_render::{CardRenderer, HtmlCards, CARD_STYLES};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let today = Utc::now().date_naive();
    let catalog = fixture_catalog(today)?;

    let presenter = CardPresenter::new(RecencyWindow::current()).with_observer(TracingObserver);
    let views = presenter.present_all(&catalog);

    let grid = HtmlCards::new().render_grid(&views);
    println!("{}", render_page(&grid));

    Ok(())
}

/// A handful of shoes covering all three variants.
fn fixture_catalog(today: NaiveDate) -> Result<Vec<ProductCard>> {
    let usd = |cents| Money::new(cents, Currency::USD);

    let catalog = vec![
        // Discounted and freshly released: the sale badge must win.
        ProductCard::new(
            "laser-lite-retro",
            "Laser Lite Retro",
            "/images/laser-lite-retro.jpg",
            usd(16_000),
        )?
        .with_sale_price(usd(12_999))?
        .with_release_date(today - Days::new(5))
        .with_colors(4),
        ProductCard::new(
            "terra-trail-mid",
            "Terra Trail Mid",
            "/images/terra-trail-mid.jpg",
            usd(18_500),
        )?
        .with_release_date(today - Days::new(12))
        .with_colors(2),
        ProductCard::new(
            "court-classic",
            "Court Classic",
            "/images/court-classic.jpg",
            usd(9_500),
        )?
        .with_release_date(today - Days::new(400))
        .with_colors(8),
        ProductCard::new(
            "archive-runner",
            "Archive Runner",
            "/images/archive-runner.jpg",
            usd(14_000),
        )?
        .with_sale_price(usd(7_000))?
        .with_colors(1),
        // Catalog backfill item with no release date on record.
        ProductCard::new(
            "heritage-low",
            "Heritage Low",
            "/images/heritage-low.jpg",
            usd(11_000),
        )?
        .with_colors(3),
    ];

    Ok(catalog)
}

fn render_page(grid: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Catalog</title>
<style>{}</style>
</head>
<body>
<main>
{}
</main>
</body>
</html>"#,
        CARD_STYLES, grid
    )
}

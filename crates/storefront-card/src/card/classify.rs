//! Variant classification and the presenter that drives it.

use chrono::NaiveDate;

use crate::card::input::ProductCard;
use crate::card::variant::Variant;
use crate::card::view::CardView;
use crate::money::Money;
use crate::observe::CardObserver;
use crate::recency::Recency;

/// Maps sale-price presence and release date to a [`Variant`].
///
/// Precedence is fixed: a sale price, zero included, always wins over a
/// recent release date. An absent release date classifies as
/// [`Variant::Default`] without consulting the recency predicate.
///
/// This function is total over its inputs. Validation belongs to
/// [`ProductCard`] construction, not here.
pub fn classify(
    sale_price: Option<Money>,
    release_date: Option<NaiveDate>,
    recency: &impl Recency,
) -> Variant {
    if sale_price.is_some() {
        return Variant::OnSale;
    }
    match release_date {
        Some(date) if recency.is_recent(date) => Variant::NewRelease,
        _ => Variant::Default,
    }
}

/// Classifies a whole card. See [`classify`] for the precedence rules.
pub fn classify_variant(card: &ProductCard, recency: &impl Recency) -> Variant {
    classify(card.sale_price, card.release_date, recency)
}

/// Turns validated cards into render-ready [`CardView`]s.
///
/// The presenter owns the recency policy and an optional observer. The
/// observer hears each variant assignment; classification itself stays pure
/// and side-effect free.
pub struct CardPresenter<R> {
    recency: R,
    observer: Option<Box<dyn CardObserver>>,
}

impl<R: Recency> CardPresenter<R> {
    pub fn new(recency: R) -> Self {
        Self {
            recency,
            observer: None,
        }
    }

    /// Attaches an observer that is told about every variant assignment.
    pub fn with_observer(mut self, observer: impl CardObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Classifies one card and packages the handoff for the render layer.
    pub fn present(&self, card: &ProductCard) -> CardView {
        let variant = classify_variant(card, &self.recency);
        if let Some(observer) = &self.observer {
            observer.variant_assigned(&card.slug, variant);
        }
        CardView::from_card(card, variant)
    }

    /// Presents a catalog slice in input order.
    pub fn present_all(&self, cards: &[ProductCard]) -> Vec<CardView> {
        cards.iter().map(|card| self.present(card)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::Slug;
    use crate::money::Currency;
    use crate::recency::RecencyWindow;
    use chrono::Days;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    fn today() -> NaiveDate {
        day(2026, 8, 23)
    }

    fn window() -> RecencyWindow {
        RecencyWindow::one_month(today())
    }

    fn card(slug: &str) -> ProductCard {
        ProductCard::new(slug, "Test Shoe", "/images/test-shoe.jpg", usd(8_999)).unwrap()
    }

    #[test]
    fn test_sale_price_wins_over_old_release() {
        let variant = classify(Some(usd(4_999)), Some(day(2020, 1, 1)), &window());
        assert_eq!(variant, Variant::OnSale);
    }

    #[test]
    fn test_recent_release_without_sale_is_new_release() {
        let released = today() - Days::new(10);
        assert_eq!(classify(None, Some(released), &window()), Variant::NewRelease);
    }

    #[test]
    fn test_stale_release_without_sale_is_default() {
        let released = today() - Days::new(400);
        assert_eq!(classify(None, Some(released), &window()), Variant::Default);
    }

    #[test]
    fn test_nothing_set_is_default() {
        assert_eq!(classify(None, None, &window()), Variant::Default);
    }

    #[test]
    fn test_zero_sale_price_still_counts_as_sale() {
        let released = today() - Days::new(1);
        let variant = classify(Some(Money::zero(Currency::USD)), Some(released), &window());
        assert_eq!(variant, Variant::OnSale);
    }

    #[test]
    fn test_sale_beats_recent_release() {
        let released = today() - Days::new(2);
        let variant = classify(Some(usd(12_000)), Some(released), &window());
        assert_eq!(variant, Variant::OnSale);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let released = today() - Days::new(5);
        let first = classify(None, Some(released), &window());
        let second = classify(None, Some(released), &window());
        assert_eq!(first, second);
    }

    #[test]
    fn test_injected_predicate_decides_recency() {
        let released = day(2023, 6, 1);
        let always = |_: NaiveDate| true;
        let never = |_: NaiveDate| false;
        assert_eq!(classify(None, Some(released), &always), Variant::NewRelease);
        assert_eq!(classify(None, Some(released), &never), Variant::Default);
    }

    #[test]
    fn test_absent_release_date_never_consults_predicate() {
        let panicking = |_: NaiveDate| -> bool { panic!("predicate must not run") };
        assert_eq!(classify(None, None, &panicking), Variant::Default);
    }

    #[test]
    fn test_presenter_packages_handoff() {
        let card = card("laser-lite")
            .with_sale_price(usd(6_500))
            .unwrap()
            .with_colors(5);
        let presenter = CardPresenter::new(window());
        let view = presenter.present(&card);
        assert_eq!(view.slug.as_str(), "laser-lite");
        assert_eq!(view.variant, Variant::OnSale);
        assert_eq!(view.sale_price, Some(usd(6_500)));
        assert_eq!(view.num_of_colors, 5);
    }

    struct Recorder {
        seen: Rc<RefCell<Vec<(String, Variant)>>>,
    }

    impl CardObserver for Recorder {
        fn variant_assigned(&self, slug: &Slug, variant: Variant) {
            self.seen
                .borrow_mut()
                .push((slug.as_str().to_string(), variant));
        }
    }

    #[test]
    fn test_observer_hears_each_assignment_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let presenter = CardPresenter::new(window()).with_observer(Recorder { seen: seen.clone() });

        let cards = vec![
            card("first").with_sale_price(usd(1_000)).unwrap(),
            card("second").with_release_date(today() - Days::new(3)),
            card("third"),
        ];
        let views = presenter.present_all(&cards);

        assert_eq!(views.len(), 3);
        let seen = seen.borrow();
        assert_eq!(
            *seen,
            vec![
                ("first".to_string(), Variant::OnSale),
                ("second".to_string(), Variant::NewRelease),
                ("third".to_string(), Variant::Default),
            ]
        );
    }
}

//! Observability hook for variant assignment.

use crate::card::Variant;
use crate::ids::Slug;

/// Sink for "a card was classified" events.
///
/// The classifier itself performs no logging or I/O. Code that wants the
/// per-card variant signal wires an observer into a
/// [`CardPresenter`](crate::card::CardPresenter); nothing fires when no
/// observer is attached.
pub trait CardObserver {
    /// Called once per presented card, after classification.
    fn variant_assigned(&self, slug: &Slug, variant: Variant);
}

/// Observer that emits a `tracing` debug event per card.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl CardObserver for TracingObserver {
    fn variant_assigned(&self, slug: &Slug, variant: Variant) {
        tracing::debug!(slug = %slug, variant = variant.as_str(), "card variant assigned");
    }
}

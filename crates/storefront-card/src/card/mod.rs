//! Product card module.
//!
//! The input record, its display variant, the pure classifier, and the
//! render-handoff value.

mod classify;
mod input;
mod variant;
mod view;

pub use classify::{classify, classify_variant, CardPresenter};
pub use input::ProductCard;
pub use variant::Variant;
pub use view::CardView;

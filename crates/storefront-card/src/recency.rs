//! Recency predicate for the "newly released" window.

use chrono::{NaiveDate, Utc};

/// Answers whether a release date falls inside the promotional window.
///
/// The classifier never owns a clock or a window length; it asks an
/// injected `Recency` implementation. Production code uses
/// [`RecencyWindow`]; tests inject fixed windows or plain closures.
pub trait Recency {
    /// True when `date` qualifies as recent.
    fn is_recent(&self, date: NaiveDate) -> bool;
}

/// Any `Fn(NaiveDate) -> bool` is a recency predicate.
impl<F> Recency for F
where
    F: Fn(NaiveDate) -> bool,
{
    fn is_recent(&self, date: NaiveDate) -> bool {
        self(date)
    }
}

/// Trailing window of whole days ending at a fixed reference date.
///
/// The reference date is captured once at construction, so a window
/// answers deterministically no matter when it is asked. A date exactly
/// `days` days old falls outside the window; a date after the reference
/// date (not yet released) counts as recent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecencyWindow {
    /// The date the window trails back from, usually "today".
    pub today: NaiveDate,
    /// Window length in days.
    pub days: u32,
}

impl RecencyWindow {
    /// Promotional window length for "just released": one month.
    pub const NEW_RELEASE_DAYS: u32 = 30;

    /// Create a trailing window of `days` days ending at `today`.
    pub fn new(today: NaiveDate, days: u32) -> Self {
        Self { today, days }
    }

    /// The one-month promotional window ending at `today`.
    pub fn one_month(today: NaiveDate) -> Self {
        Self::new(today, Self::NEW_RELEASE_DAYS)
    }

    /// The one-month promotional window ending today (UTC).
    ///
    /// Reads the clock once, here; subsequent checks are deterministic.
    pub fn current() -> Self {
        Self::one_month(Utc::now().date_naive())
    }
}

impl Recency for RecencyWindow {
    fn is_recent(&self, date: NaiveDate) -> bool {
        self.today.signed_duration_since(date).num_days() < i64::from(self.days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_inside_window() {
        let window = RecencyWindow::one_month(day(2026, 8, 23));
        assert!(window.is_recent(day(2026, 8, 13))); // 10 days ago
        assert!(window.is_recent(day(2026, 8, 23))); // today
    }

    #[test]
    fn test_outside_window() {
        let window = RecencyWindow::one_month(day(2026, 8, 23));
        assert!(!window.is_recent(day(2025, 7, 19))); // 400 days ago
    }

    #[test]
    fn test_window_boundary() {
        let window = RecencyWindow::one_month(day(2026, 8, 23));
        assert!(window.is_recent(day(2026, 7, 25))); // 29 days ago
        assert!(!window.is_recent(day(2026, 7, 24))); // exactly 30 days ago
    }

    #[test]
    fn test_future_date_is_recent() {
        let window = RecencyWindow::one_month(day(2026, 8, 23));
        assert!(window.is_recent(day(2026, 9, 1)));
    }

    #[test]
    fn test_custom_length() {
        let window = RecencyWindow::new(day(2026, 8, 23), 7);
        assert!(window.is_recent(day(2026, 8, 17)));
        assert!(!window.is_recent(day(2026, 8, 16)));
    }

    #[test]
    fn test_closure_predicate() {
        let always = |_: NaiveDate| true;
        assert!(always.is_recent(day(1970, 1, 1)));

        let never = |_: NaiveDate| false;
        assert!(!never.is_recent(day(2026, 8, 23)));
    }
}

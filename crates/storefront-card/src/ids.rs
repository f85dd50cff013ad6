//! Slug identifier for catalog products.

use crate::error::CardError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// URL-friendly product identifier (e.g. `"air-flight-87"`).
///
/// A slug is opaque to the card: it is never parsed, only carried through
/// to the render handoff, where it typically becomes part of a link. The
/// only constraint is that it is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slug(String);

impl Slug {
    /// Create a slug, rejecting empty or whitespace-only input.
    pub fn new(slug: impl Into<String>) -> Result<Self, CardError> {
        let slug = slug.into();
        if slug.trim().is_empty() {
            return Err(CardError::EmptySlug);
        }
        Ok(Self(slug))
    }

    /// Get the slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Slug {
    type Error = CardError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Slug {
    type Error = CardError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_creation() {
        let slug = Slug::new("air-flight-87").unwrap();
        assert_eq!(slug.as_str(), "air-flight-87");
    }

    #[test]
    fn test_empty_slug_rejected() {
        assert_eq!(Slug::new("").unwrap_err(), CardError::EmptySlug);
        assert_eq!(Slug::new("   ").unwrap_err(), CardError::EmptySlug);
    }

    #[test]
    fn test_slug_try_from() {
        let slug: Slug = "terra-trail-mid".try_into().unwrap();
        assert_eq!(slug.as_str(), "terra-trail-mid");

        let err: Result<Slug, _> = "".try_into();
        assert!(err.is_err());
    }

    #[test]
    fn test_slug_display() {
        let slug = Slug::new("court-classic").unwrap();
        assert_eq!(format!("{}", slug), "court-classic");
    }
}

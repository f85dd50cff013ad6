//! Display variant for a product card.

use serde::{Deserialize, Serialize};

/// The mutually-exclusive display category assigned to a product card.
///
/// Exactly one variant is produced per input, computed fresh on every
/// render call and consumed immediately by the render step; nothing caches
/// or mutates it. The mapping is a pure function of sale-price presence and
/// release date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Released within the recency window, and not on sale.
    NewRelease,
    /// A sale price is present. Wins over `NewRelease`.
    OnSale,
    /// Neither newly released nor on sale.
    #[default]
    Default,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::NewRelease => "new-release",
            Variant::OnSale => "on-sale",
            Variant::Default => "default",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "new-release" => Some(Variant::NewRelease),
            "on-sale" => Some(Variant::OnSale),
            "default" => Some(Variant::Default),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_str_round_trip() {
        for variant in [Variant::NewRelease, Variant::OnSale, Variant::Default] {
            assert_eq!(Variant::from_str(variant.as_str()), Some(variant));
        }
        assert_eq!(Variant::from_str("clearance"), None);
    }

    #[test]
    fn test_variant_serde_kebab_case() {
        assert_eq!(
            serde_json::to_string(&Variant::NewRelease).unwrap(),
            "\"new-release\""
        );
        assert_eq!(
            serde_json::from_str::<Variant>("\"on-sale\"").unwrap(),
            Variant::OnSale
        );
    }

    #[test]
    fn test_variant_default() {
        assert_eq!(Variant::default(), Variant::Default);
    }
}

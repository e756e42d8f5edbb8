use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

pub const MIN_STRENGTH: u8 = 1;
pub const MAX_STRENGTH: u8 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Qualitative fragrance category. Tags are lowercase and parsed case-sensitively.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScentProfile {
    Strong,
    Sweet,
    Fresh,
    Mild,
}

impl ScentProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Sweet => "sweet",
            Self::Fresh => "fresh",
            Self::Mild => "mild",
        }
    }
}

impl fmt::Display for ScentProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScentProfile {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "strong" => Ok(Self::Strong),
            "sweet" => Ok(Self::Sweet),
            "fresh" => Ok(Self::Fresh),
            "mild" => Ok(Self::Mild),
            other => Err(DomainError::InvariantViolation(format!(
                "unsupported scent profile `{other}` (expected strong|sweet|fresh|mild)"
            ))),
        }
    }
}

/// Top, middle and base notes, in the order the perfumer lists them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScentNotes {
    pub top: Vec<String>,
    pub middle: Vec<String>,
    pub base: Vec<String>,
}

impl ScentNotes {
    pub fn iter_all(&self) -> impl Iterator<Item = &str> {
        self.top.iter().chain(&self.middle).chain(&self.base).map(String::as_str)
    }

    pub fn first_top(&self) -> Option<&str> {
        self.top.first().map(String::as_str)
    }

    pub fn first_base(&self) -> Option<&str> {
        self.base.first().map(String::as_str)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: u32,
    pub notes: ScentNotes,
    pub occasions: Vec<String>,
    pub strength: u8,
    pub profile: ScentProfile,
}

impl Product {
    pub fn has_occasion(&self, key: &str) -> bool {
        self.occasions.iter().any(|occasion| occasion == key)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let tiers =
            [("top", &self.notes.top), ("middle", &self.notes.middle), ("base", &self.notes.base)];
        for (tier, notes) in tiers {
            if notes.is_empty() {
                return Err(DomainError::MissingNotes { product_id: self.id, tier });
            }
        }

        if !(MIN_STRENGTH..=MAX_STRENGTH).contains(&self.strength) {
            return Err(DomainError::StrengthOutOfRange {
                product_id: self.id,
                strength: self.strength,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: ProductId(7),
            name: "Tide Line".to_string(),
            category: "Eau de Toilette".to_string(),
            description: "A clean coastal scent".to_string(),
            price: 2499,
            notes: ScentNotes {
                top: vec!["Bergamot".to_string()],
                middle: vec!["Sea Salt".to_string()],
                base: vec!["White Musk".to_string()],
            },
            occasions: vec!["gym".to_string(), "college".to_string()],
            strength: 2,
            profile: ScentProfile::Fresh,
        }
    }

    #[test]
    fn profile_parse_is_case_sensitive() {
        assert_eq!("fresh".parse::<ScentProfile>(), Ok(ScentProfile::Fresh));
        assert!("Fresh".parse::<ScentProfile>().is_err());
        assert!("woody".parse::<ScentProfile>().is_err());
    }

    #[test]
    fn product_deserializes_from_catalog_json() {
        let raw = r#"{
            "id": 3,
            "name": "Velvet Oud",
            "category": "Eau de Parfum",
            "description": "Smoky and deep",
            "price": 4999,
            "notes": {"top": ["Saffron"], "middle": ["Rose"], "base": ["Oud", "Amber"]},
            "occasions": ["party", "date"],
            "strength": 5,
            "profile": "strong"
        }"#;

        let product: Product = serde_json::from_str(raw).expect("product json should parse");
        assert_eq!(product.id, ProductId(3));
        assert_eq!(product.profile, ScentProfile::Strong);
        assert_eq!(product.notes.first_base(), Some("Oud"));
        assert!(product.has_occasion("date"));
        assert!(!product.has_occasion("Date"));
    }

    #[test]
    fn iter_all_flattens_tiers_in_order() {
        let product = sample();
        let notes: Vec<_> = product.notes.iter_all().collect();
        assert_eq!(notes, vec!["Bergamot", "Sea Salt", "White Musk"]);
    }

    #[test]
    fn validate_rejects_empty_note_tier() {
        let mut product = sample();
        product.notes.base.clear();

        assert_eq!(
            product.validate(),
            Err(DomainError::MissingNotes { product_id: ProductId(7), tier: "base" })
        );
    }

    #[test]
    fn validate_rejects_strength_out_of_range() {
        let mut product = sample();
        product.strength = 6;

        assert!(matches!(
            product.validate(),
            Err(DomainError::StrengthOutOfRange { strength: 6, .. })
        ));
        product.strength = 0;
        assert!(product.validate().is_err());
        product.strength = 5;
        assert!(product.validate().is_ok());
    }
}

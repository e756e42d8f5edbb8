//! Static occasion table driving the recommendation scorer.

use serde::Serialize;

use crate::domain::product::ScentProfile;

/// What a fragrance should look like to suit one occasion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OccasionProfile {
    /// Lowercase occasion key, as found in `Product::occasions`
    pub key: &'static str,
    /// Descriptor used in generated reasoning text
    pub label: &'static str,
    pub matching_profiles: &'static [ScentProfile],
    /// Note keywords characteristic of the occasion, matched as substrings
    pub signature_notes: &'static [&'static str],
    pub matching_strengths: &'static [u8],
}

/// Supported occasions in menu order.
pub const OCCASIONS: &[OccasionProfile] = &[
    OccasionProfile {
        key: "date",
        label: "Romantic & Seductive",
        matching_profiles: &[ScentProfile::Sweet, ScentProfile::Strong],
        signature_notes: &["Rose", "Vanilla", "Amber", "Jasmine", "Tonka"],
        matching_strengths: &[3, 4, 5],
    },
    OccasionProfile {
        key: "college",
        label: "Casual & Youthful",
        matching_profiles: &[ScentProfile::Fresh, ScentProfile::Mild],
        signature_notes: &["Citrus", "Apple", "Green Tea", "Lavender", "Pear"],
        matching_strengths: &[1, 2, 3],
    },
    OccasionProfile {
        key: "party",
        label: "Bold & Energetic",
        matching_profiles: &[ScentProfile::Strong, ScentProfile::Sweet],
        signature_notes: &["Oud", "Leather", "Patchouli", "Pink Pepper", "Tobacco"],
        matching_strengths: &[4, 5],
    },
    OccasionProfile {
        key: "office",
        label: "Professional & Subtle",
        matching_profiles: &[ScentProfile::Mild, ScentProfile::Fresh],
        signature_notes: &["Iris", "Vetiver", "Cedar", "Neroli", "Bergamot"],
        matching_strengths: &[2, 3],
    },
    OccasionProfile {
        key: "gym",
        label: "Fresh & Sporty",
        matching_profiles: &[ScentProfile::Fresh],
        signature_notes: &["Mint", "Lemon", "Aqua", "Marine Notes", "Verbena"],
        matching_strengths: &[1, 2],
    },
    OccasionProfile {
        key: "festival",
        label: "Festive & Traditional",
        matching_profiles: &[ScentProfile::Sweet, ScentProfile::Strong],
        signature_notes: &["Sandalwood", "Saffron", "Oud", "Musk", "Jasmine"],
        matching_strengths: &[3, 4, 5],
    },
];

impl OccasionProfile {
    /// Exact, case-sensitive lookup by occasion key.
    pub fn lookup(key: &str) -> Option<&'static OccasionProfile> {
        OCCASIONS.iter().find(|occasion| occasion.key == key)
    }

    pub fn all() -> &'static [OccasionProfile] {
        OCCASIONS
    }

    pub fn keys() -> impl Iterator<Item = &'static str> {
        OCCASIONS.iter().map(|occasion| occasion.key)
    }

    pub fn matches_profile(&self, profile: ScentProfile) -> bool {
        self.matching_profiles.contains(&profile)
    }

    pub fn matches_strength(&self, strength: u8) -> bool {
        self.matching_strengths.contains(&strength)
    }
}

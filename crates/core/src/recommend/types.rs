//! Types for the recommendation engine

use serde::{Deserialize, Serialize};

use crate::domain::product::Product;

/// Request for occasion-based recommendations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationRequest {
    /// Occasion key, e.g. `gym`
    pub occasion: String,
    /// Maximum number of recommendations to return
    pub limit: usize,
}

impl RecommendationRequest {
    pub fn new(occasion: impl Into<String>) -> Self {
        Self { occasion: occasion.into(), limit: super::DEFAULT_LIMIT }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// A scored product. Serialises as the product's own fields plus
/// `matchPercentage` and `reasoning`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    #[serde(flatten)]
    pub product: Product,
    /// Match score (0 - 100)
    pub match_percentage: u32,
    /// Human-readable reasoning
    pub reasoning: String,
}

/// Per-signal contributions behind a match score
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ComponentScores {
    /// Product is tagged with the occasion
    pub occasion_tag: f64,
    /// Product profile is one the occasion accepts
    pub profile: f64,
    /// Product strength is one the occasion accepts
    pub strength: f64,
    /// Sum of signature note contributions
    pub notes: f64,
    /// Signature notes found in the product's notes
    pub matched_notes: Vec<&'static str>,
}

impl ComponentScores {
    pub fn total(&self) -> f64 {
        self.occasion_tag + self.profile + self.strength + self.notes
    }

    /// Total rounded half-up to a whole percentage.
    pub fn match_percentage(&self) -> u32 {
        self.total().max(0.0).round() as u32
    }
}

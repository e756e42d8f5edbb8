//! Scoring and reasoning for occasion matches

use std::collections::BTreeSet;

use super::occasions::OccasionProfile;
use super::types::ComponentScores;
use crate::domain::product::Product;

/// Points awarded per matching signal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchWeights {
    /// Product is tagged with the occasion (default: 40)
    pub occasion_tag: f64,
    /// Profile match (default: 20)
    pub profile: f64,
    /// Strength match (default: 15)
    pub strength: f64,
    /// Shared evenly across the occasion's signature notes (default: 25)
    pub notes: f64,
}

impl MatchWeights {
    pub fn max_score(&self) -> f64 {
        self.occasion_tag + self.profile + self.strength + self.notes
    }
}

impl Default for MatchWeights {
    fn default() -> Self {
        super::DEFAULT_WEIGHTS
    }
}

/// Score calculator for occasion matches
#[derive(Debug, Clone)]
pub struct MatchScorer {
    weights: MatchWeights,
}

impl MatchScorer {
    pub fn new() -> Self {
        Self { weights: MatchWeights::default() }
    }

    pub fn with_weights(weights: MatchWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &MatchWeights {
        &self.weights
    }

    /// Per-signal contributions, or `None` when the occasion is unknown.
    pub fn breakdown(&self, product: &Product, occasion_key: &str) -> Option<ComponentScores> {
        let occasion = OccasionProfile::lookup(occasion_key)?;
        Some(self.breakdown_for(product, occasion))
    }

    pub fn breakdown_for(&self, product: &Product, occasion: &OccasionProfile) -> ComponentScores {
        let mut scores = ComponentScores::default();

        if product.has_occasion(occasion.key) {
            scores.occasion_tag = self.weights.occasion_tag;
        }
        if occasion.matches_profile(product.profile) {
            scores.profile = self.weights.profile;
        }
        if occasion.matches_strength(product.strength) {
            scores.strength = self.weights.strength;
        }

        if !occasion.signature_notes.is_empty() {
            let per_note = self.weights.notes / occasion.signature_notes.len() as f64;
            let product_notes: BTreeSet<String> =
                product.notes.iter_all().map(str::to_lowercase).collect();

            for keyword in occasion.signature_notes {
                let needle = keyword.to_lowercase();
                if product_notes.iter().any(|note| note.contains(&needle)) {
                    scores.notes += per_note;
                    scores.matched_notes.push(*keyword);
                }
            }
        }

        scores
    }

    /// Match percentage for a product. Unknown occasions score 0.
    pub fn score(&self, product: &Product, occasion_key: &str) -> u32 {
        self.breakdown(product, occasion_key)
            .map(|scores| scores.match_percentage())
            .unwrap_or(0)
    }

    /// One-sentence rationale. `None` when the occasion is unknown or the
    /// product lacks a top or base note.
    pub fn explain(&self, product: &Product, occasion_key: &str) -> Option<String> {
        let occasion = OccasionProfile::lookup(occasion_key)?;
        explain_for(product, occasion)
    }
}

impl Default for MatchScorer {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn explain_for(product: &Product, occasion: &OccasionProfile) -> Option<String> {
    let top = product.notes.first_top()?;
    let base = product.notes.first_base()?;

    Some(format!(
        "The perfect choice for your {}. It opens with refreshing {} and settles into a lasting {} base, making it a very {} fragrance.",
        occasion.key,
        top,
        base,
        occasion.label.to_lowercase()
    ))
}

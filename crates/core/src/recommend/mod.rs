//! Occasion-based recommendations
//!
//! Scores every catalog product against a requested occasion using four
//! weighted signals (occasion tag, profile, strength, signature notes) and
//! returns the best matches with a one-sentence rationale.

mod engine;
mod occasions;
mod scoring;
mod types;

pub use engine::RecommendationEngine;
pub use occasions::{OccasionProfile, OCCASIONS};
pub use scoring::{MatchScorer, MatchWeights};
pub use types::*;

use crate::domain::product::Product;
use crate::errors::DomainError;

/// Result type for recommendation operations
pub type RecommendResult<T> = Result<T, DomainError>;

/// Default scoring weights, summing to 100
pub const DEFAULT_WEIGHTS: MatchWeights =
    MatchWeights { occasion_tag: 40.0, profile: 20.0, strength: 15.0, notes: 25.0 };

/// Recommendations returned when the caller does not ask for a count
pub const DEFAULT_LIMIT: usize = 3;

/// Match percentage of `product` for `occasion_key` with default weights.
pub fn score(product: &Product, occasion_key: &str) -> u32 {
    MatchScorer::new().score(product, occasion_key)
}

pub fn explain(product: &Product, occasion_key: &str) -> Option<String> {
    MatchScorer::new().explain(product, occasion_key)
}

/// Top [`DEFAULT_LIMIT`] matches for `occasion_key`.
pub fn recommend(catalog: &[Product], occasion_key: &str) -> Vec<Recommendation> {
    RecommendationEngine::new().recommend(catalog, &RecommendationRequest::new(occasion_key))
}

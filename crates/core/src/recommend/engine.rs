//! Recommendation engine implementation

use tracing::{debug, warn};

use super::occasions::OccasionProfile;
use super::scoring::{explain_for, MatchScorer, MatchWeights};
use super::types::*;
use super::RecommendResult;
use crate::domain::product::Product;
use crate::errors::DomainError;

/// Ranks a catalog against an occasion
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    scorer: MatchScorer,
    default_limit: usize,
}

impl RecommendationEngine {
    /// Create an engine with default weights and limit
    pub fn new() -> Self {
        Self { scorer: MatchScorer::new(), default_limit: super::DEFAULT_LIMIT }
    }

    /// Create with custom weights
    pub fn with_weights(weights: MatchWeights) -> Self {
        Self { scorer: MatchScorer::with_weights(weights), default_limit: super::DEFAULT_LIMIT }
    }

    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = limit;
        self
    }

    pub fn default_limit(&self) -> usize {
        self.default_limit
    }

    pub fn scorer(&self) -> &MatchScorer {
        &self.scorer
    }

    /// Build a request for `occasion` using this engine's default limit.
    pub fn request(&self, occasion: impl Into<String>) -> RecommendationRequest {
        RecommendationRequest::new(occasion).with_limit(self.default_limit)
    }

    /// Ranked matches, or an empty list when the occasion is unknown.
    pub fn recommend(
        &self,
        catalog: &[Product],
        request: &RecommendationRequest,
    ) -> Vec<Recommendation> {
        match self.try_recommend(catalog, request) {
            Ok(recommendations) => recommendations,
            Err(error) => {
                warn!(
                    event_name = "recommend.unknown_occasion",
                    occasion = %request.occasion,
                    error = %error,
                    "returning no recommendations"
                );
                Vec::new()
            }
        }
    }

    /// Ranked matches. Fails only when the occasion is unknown; products that
    /// violate the catalog invariants are skipped.
    pub fn try_recommend(
        &self,
        catalog: &[Product],
        request: &RecommendationRequest,
    ) -> RecommendResult<Vec<Recommendation>> {
        let occasion = OccasionProfile::lookup(&request.occasion)
            .ok_or_else(|| DomainError::UnknownOccasion(request.occasion.clone()))?;

        let mut recommendations = Vec::with_capacity(catalog.len());
        for product in catalog {
            if let Err(error) = product.validate() {
                warn!(
                    event_name = "recommend.skipped_product",
                    product_id = product.id.0,
                    error = %error,
                    "skipping malformed product"
                );
                continue;
            }

            let Some(reasoning) = explain_for(product, occasion) else {
                continue;
            };
            let match_percentage = self.scorer.breakdown_for(product, occasion).match_percentage();

            recommendations.push(Recommendation {
                product: product.clone(),
                match_percentage,
                reasoning,
            });
        }

        // Stable: equal scores keep catalog order.
        recommendations.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));
        recommendations.truncate(request.limit);

        debug!(
            event_name = "recommend.completed",
            occasion = occasion.key,
            catalog_size = catalog.len(),
            returned = recommendations.len(),
            "recommendations ranked"
        );

        Ok(recommendations)
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

pub mod catalog;
pub mod config;
pub mod domain;
pub mod errors;
pub mod recommend;

pub use catalog::{Catalog, CatalogError};
pub use domain::product::{Product, ProductId, ScentNotes, ScentProfile};
pub use errors::{ApplicationError, DomainError, InterfaceError};
pub use recommend::{
    explain, recommend, score, ComponentScores, MatchScorer, MatchWeights, OccasionProfile,
    Recommendation, RecommendationEngine, RecommendationRequest,
};

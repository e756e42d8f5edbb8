use std::path::PathBuf;

use aroma_core::{DomainError, OccasionProfile, Recommendation, RecommendationEngine};
use serde::Serialize;

use crate::commands::{load_context, CommandResult};

#[derive(Debug, Clone, Default)]
pub struct RecommendArgs {
    pub occasion: String,
    pub limit: Option<usize>,
    pub catalog: Option<PathBuf>,
    pub json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecommendReport<'a> {
    command: &'static str,
    status: &'static str,
    occasion: &'a str,
    catalog_size: usize,
    results: &'a [Recommendation],
}

pub fn run(args: RecommendArgs) -> CommandResult {
    let context = match load_context(args.catalog) {
        Ok(context) => context,
        Err(error) => return CommandResult::from_error("recommend", error),
    };

    let engine = RecommendationEngine::new()
        .with_default_limit(context.config.recommendation.default_limit);
    let limit = args.limit.unwrap_or_else(|| engine.default_limit());
    let request = engine.request(args.occasion.as_str()).with_limit(limit);

    let results = match engine.try_recommend(context.catalog.products(), &request) {
        Ok(results) => results,
        Err(DomainError::UnknownOccasion(occasion)) => {
            let known = OccasionProfile::keys().collect::<Vec<_>>().join("|");
            return CommandResult::failure(
                "recommend",
                "unknown_occasion",
                format!("unknown occasion `{occasion}` (expected {known})"),
                4,
            );
        }
        Err(error) => return CommandResult::from_error("recommend", error),
    };

    if args.json {
        return CommandResult::report(&RecommendReport {
            command: "recommend",
            status: "ok",
            occasion: &request.occasion,
            catalog_size: context.catalog.len(),
            results: &results,
        });
    }

    CommandResult::text(render_human(&request.occasion, &results))
}

fn render_human(occasion: &str, results: &[Recommendation]) -> String {
    if results.is_empty() {
        return format!("no recommendations for {occasion}: the catalog is empty");
    }

    let mut lines = vec![format!("top {} picks for {occasion}:", results.len())];
    for (rank, result) in results.iter().enumerate() {
        lines.push(format!(
            "{}. {} ({}) - {} - {}% match",
            rank + 1,
            result.product.name,
            result.product.category,
            result.product.price,
            result.match_percentage
        ));
        lines.push(format!("   {}", result.reasoning));
    }

    lines.join("\n")
}

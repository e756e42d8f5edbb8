use std::path::PathBuf;

use aroma_core::{ApplicationError, ComponentScores, DomainError, MatchScorer, ProductId};
use serde::Serialize;

use crate::commands::{load_context, CommandResult};

#[derive(Debug, Clone, Default)]
pub struct ScoreArgs {
    pub occasion: String,
    pub product: u32,
    pub catalog: Option<PathBuf>,
    pub json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoreReport<'a> {
    command: &'static str,
    status: &'static str,
    occasion: &'a str,
    product_id: ProductId,
    product_name: &'a str,
    match_percentage: u32,
    components: &'a ComponentScores,
    reasoning: Option<String>,
}

pub fn run(args: ScoreArgs) -> CommandResult {
    let context = match load_context(args.catalog) {
        Ok(context) => context,
        Err(error) => return CommandResult::from_error("score", error),
    };

    let product_id = ProductId(args.product);
    let Some(product) = context.catalog.get(product_id) else {
        return CommandResult::from_error("score", ApplicationError::ProductNotFound(product_id));
    };

    let scorer = MatchScorer::new();
    let Some(components) = scorer.breakdown(product, &args.occasion) else {
        return CommandResult::from_error(
            "score",
            DomainError::UnknownOccasion(args.occasion.clone()),
        );
    };
    let reasoning = scorer.explain(product, &args.occasion);

    if args.json {
        return CommandResult::report(&ScoreReport {
            command: "score",
            status: "ok",
            occasion: &args.occasion,
            product_id,
            product_name: &product.name,
            match_percentage: components.match_percentage(),
            components: &components,
            reasoning,
        });
    }

    let matched = if components.matched_notes.is_empty() {
        "none".to_string()
    } else {
        components.matched_notes.join(", ")
    };
    let mut lines = vec![
        format!("{} for {}: {}% match", product.name, args.occasion, components.match_percentage()),
        format!("- occasion tag: {}", components.occasion_tag),
        format!("- profile ({}): {}", product.profile, components.profile),
        format!("- strength ({}): {}", product.strength, components.strength),
        format!("- notes: {:.2} (matched: {matched})", components.notes),
    ];
    if let Some(reasoning) = reasoning {
        lines.push(reasoning);
    }

    CommandResult::text(lines.join("\n"))
}

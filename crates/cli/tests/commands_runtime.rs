use std::env;
use std::fs;
use std::sync::{Mutex, OnceLock};

use aroma_cli::commands::recommend::{self, RecommendArgs};
use aroma_cli::commands::score::{self, ScoreArgs};
use aroma_cli::commands::{config, doctor, occasions};
use aroma_core::Catalog;
use serde_json::Value;
use tempfile::TempDir;

const TWO_PRODUCT_CATALOG: &str = r#"[
    {
        "id": 11,
        "name": "Harbor",
        "category": "Eau de Toilette",
        "description": "Marine and bright",
        "price": 2100,
        "notes": {"top": ["Lemon"], "middle": ["Marine Notes"], "base": ["Driftwood"]},
        "occasions": ["gym"],
        "strength": 1,
        "profile": "fresh"
    },
    {
        "id": 12,
        "name": "Ember",
        "category": "Eau de Parfum",
        "description": "Warm resin",
        "price": 4100,
        "notes": {"top": ["Cinnamon"], "middle": ["Rose"], "base": ["Amber"]},
        "occasions": ["date"],
        "strength": 4,
        "profile": "sweet"
    }
]"#;

fn recommend_args(occasion: &str) -> RecommendArgs {
    RecommendArgs { occasion: occasion.to_string(), json: true, ..RecommendArgs::default() }
}

#[test]
fn recommend_returns_top_three_from_builtin_catalog() {
    with_env(&[], || {
        let result = recommend::run(recommend_args("gym"));
        assert_eq!(result.exit_code, 0, "expected successful recommendation");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["command"], "recommend");
        assert_eq!(payload["status"], "ok");
        assert_eq!(payload["occasion"], "gym");

        let results = payload["results"].as_array().expect("results should be an array");
        assert_eq!(results.len(), 3);
        assert_eq!(results[0]["name"], "Cool Down");
        assert_eq!(results[1]["name"], "Tide Line");
        assert_eq!(results[1]["matchPercentage"], 75);
        assert_eq!(
            results[1]["reasoning"],
            "The perfect choice for your gym. It opens with refreshing Bergamot and settles into a lasting White Musk base, making it a very fresh & sporty fragrance."
        );
    });
}

#[test]
fn recommend_human_output_lists_ranked_picks() {
    with_env(&[], || {
        let result = recommend::run(RecommendArgs {
            occasion: "gym".to_string(),
            ..RecommendArgs::default()
        });
        assert_eq!(result.exit_code, 0);
        assert!(result.output.starts_with("top 3 picks for gym:"));
        assert!(result.output.contains("1. Cool Down (Body Mist) - 1299 - 95% match"));
    });
}

#[test]
fn recommend_honors_limit_flag_and_env_default() {
    with_env(&[("AROMA_RECOMMENDATION_DEFAULT_LIMIT", "5")], || {
        let from_env = parse_payload(&recommend::run(recommend_args("office")).output);
        assert_eq!(from_env["results"].as_array().map(Vec::len), Some(5));

        let from_flag = parse_payload(
            &recommend::run(RecommendArgs { limit: Some(1), ..recommend_args("office") }).output,
        );
        assert_eq!(from_flag["results"].as_array().map(Vec::len), Some(1));
    });
}

#[test]
fn recommend_rejects_unknown_occasion() {
    with_env(&[], || {
        let result = recommend::run(recommend_args("brunch"));
        assert_eq!(result.exit_code, 4, "expected unknown occasion exit code");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["status"], "error");
        assert_eq!(payload["error_class"], "unknown_occasion");
        assert!(payload["message"].as_str().unwrap_or_default().contains("gym"));
    });
}

#[test]
fn recommend_limit_flag_bypasses_config_range() {
    with_env(&[], || {
        let catalog_size = Catalog::builtin().len();

        let result = recommend::run(RecommendArgs { limit: Some(0), ..recommend_args("gym") });
        assert_eq!(result.exit_code, 0, "limit 0 should succeed: {}", result.output);
        let payload = parse_payload(&result.output);
        assert_eq!(payload["results"].as_array().map(Vec::len), Some(0));

        for limit in [51, 100] {
            let result =
                recommend::run(RecommendArgs { limit: Some(limit), ..recommend_args("gym") });
            assert_eq!(result.exit_code, 0, "limit {limit} should succeed: {}", result.output);
            let payload = parse_payload(&result.output);
            assert_eq!(payload["results"].as_array().map(Vec::len), Some(catalog_size));
        }
    });
}

#[test]
fn recommend_uses_catalog_file_and_returns_all_when_shorter_than_limit() {
    with_env(&[], || {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("catalog.json");
        fs::write(&path, TWO_PRODUCT_CATALOG).expect("catalog should be written");

        let result = recommend::run(RecommendArgs {
            limit: Some(5),
            catalog: Some(path),
            ..recommend_args("gym")
        });
        assert_eq!(result.exit_code, 0);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["catalogSize"], 2);
        let results = payload["results"].as_array().expect("results should be an array");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["id"], 11);
        assert_eq!(results[0]["matchPercentage"], 85);
        assert_eq!(results[1]["matchPercentage"], 0);
    });
}

#[test]
fn recommend_reports_missing_catalog_file() {
    with_env(&[("AROMA_CATALOG_PATH", "/nonexistent/aroma/catalog.json")], || {
        let result = recommend::run(recommend_args("date"));
        assert_eq!(result.exit_code, 3, "expected catalog load failure code");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["error_class"], "catalog_load");
    });
}

#[test]
fn recommend_reports_invalid_config() {
    with_env(&[("AROMA_RECOMMENDATION_DEFAULT_LIMIT", "0")], || {
        let result = recommend::run(recommend_args("date"));
        assert_eq!(result.exit_code, 2, "expected config validation failure code");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["error_class"], "config_validation");
    });
}

#[test]
fn score_reports_component_breakdown() {
    with_env(&[], || {
        let result = score::run(ScoreArgs {
            occasion: "gym".to_string(),
            product: 3,
            catalog: None,
            json: true,
        });
        assert_eq!(result.exit_code, 0);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["productName"], "Tide Line");
        assert_eq!(payload["matchPercentage"], 75);
        assert_eq!(payload["components"]["occasionTag"], 40.0);
        assert_eq!(payload["components"]["notes"], 0.0);
        assert!(payload["components"]["matchedNotes"].is_array());
        assert!(payload["components"].get("occasion_tag").is_none());
    });
}

#[test]
fn score_rejects_unknown_product_and_occasion() {
    with_env(&[], || {
        let missing = score::run(ScoreArgs {
            occasion: "gym".to_string(),
            product: 999,
            catalog: None,
            json: true,
        });
        assert_eq!(missing.exit_code, 4);
        assert_eq!(parse_payload(&missing.output)["error_class"], "not_found");

        let unknown = score::run(ScoreArgs {
            occasion: "brunch".to_string(),
            product: 3,
            catalog: None,
            json: true,
        });
        assert_eq!(unknown.exit_code, 4);
        assert_eq!(parse_payload(&unknown.output)["error_class"], "bad_request");
    });
}

#[test]
fn occasions_lists_six_entries() {
    let result = occasions::run(true);
    assert_eq!(result.exit_code, 0);

    let payload = parse_payload(&result.output);
    let entries = payload["occasions"].as_array().expect("occasions should be an array");
    assert_eq!(entries.len(), 6);
    assert!(entries.iter().any(|entry| entry["key"] == "gym" && entry["label"] == "Fresh & Sporty"));
}

#[test]
fn doctor_passes_with_builtin_catalog() {
    with_env(&[], || {
        let result = doctor::run(true);
        assert_eq!(result.exit_code, 0, "expected all doctor checks to pass");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["overall_status"], "pass");
        assert_eq!(payload["checks"].as_array().map(Vec::len), Some(3));
    });
}

#[test]
fn doctor_fails_when_catalog_missing() {
    with_env(&[("AROMA_CATALOG_PATH", "/nonexistent/aroma/catalog.json")], || {
        let result = doctor::run(true);
        assert_eq!(result.exit_code, 1);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["overall_status"], "fail");
        assert_eq!(payload["checks"][1]["name"], "catalog_load");
        assert_eq!(payload["checks"][1]["status"], "fail");
        assert_eq!(payload["checks"][2]["status"], "skipped");
    });
}

#[test]
fn config_attributes_value_sources() {
    with_env(&[("AROMA_RECOMMENDATION_DEFAULT_LIMIT", "4")], || {
        let output = config::run();

        assert!(output.contains(
            "- recommendation.default_limit = 4 (source: env (AROMA_RECOMMENDATION_DEFAULT_LIMIT))"
        ));
        assert!(output.contains("- catalog.path = <builtin> (source: default)"));
        assert!(output.contains("- logging.level = info (source: default)"));
    });
}

fn parse_payload(output: &str) -> Value {
    serde_json::from_str(output).expect("command output should be valid JSON")
}

fn with_env(vars: &[(&str, &str)], test_fn: impl FnOnce()) {
    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    let _guard =
        ENV_LOCK.get_or_init(|| Mutex::new(())).lock().expect("env mutex should not be poisoned");

    let keys = [
        "AROMA_CATALOG_PATH",
        "AROMA_RECOMMENDATION_DEFAULT_LIMIT",
        "AROMA_LOGGING_LEVEL",
        "AROMA_LOGGING_FORMAT",
        "AROMA_LOG_LEVEL",
        "AROMA_LOG_FORMAT",
    ];

    let previous_values: Vec<(&str, Option<String>)> =
        keys.iter().map(|key| (*key, env::var(key).ok())).collect();

    for key in &keys {
        env::remove_var(key);
    }
    for (key, value) in vars {
        env::set_var(key, value);
    }

    test_fn();

    for (key, value) in previous_values {
        if let Some(value) = value {
            env::set_var(key, value);
        } else {
            env::remove_var(key);
        }
    }
}

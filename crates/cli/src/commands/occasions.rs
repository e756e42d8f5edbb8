use aroma_core::OccasionProfile;
use serde::Serialize;

use crate::commands::CommandResult;

#[derive(Debug, Serialize)]
struct OccasionsReport {
    command: &'static str,
    status: &'static str,
    occasions: &'static [OccasionProfile],
}

pub fn run(json: bool) -> CommandResult {
    if json {
        return CommandResult::report(&OccasionsReport {
            command: "occasions",
            status: "ok",
            occasions: OccasionProfile::all(),
        });
    }

    let mut lines = vec!["supported occasions:".to_string()];
    for occasion in OccasionProfile::all() {
        let profiles = occasion
            .matching_profiles
            .iter()
            .map(|profile| profile.as_str())
            .collect::<Vec<_>>()
            .join("/");
        let strengths = occasion
            .matching_strengths
            .iter()
            .map(|strength| strength.to_string())
            .collect::<Vec<_>>()
            .join(",");
        lines.push(format!(
            "- {} ({}): profiles {profiles}; strengths {strengths}; notes {}",
            occasion.key,
            occasion.label,
            occasion.signature_notes.join(", ")
        ));
    }

    CommandResult::text(lines.join("\n"))
}

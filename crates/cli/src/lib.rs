pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::commands::recommend::RecommendArgs;
use crate::commands::score::ScoreArgs;

#[derive(Debug, Parser)]
#[command(
    name = "aroma",
    about = "Aroma fragrance recommendation CLI",
    long_about = "Rank catalog fragrances for an occasion, explain individual scores, and inspect configuration.",
    after_help = "Examples:\n  aroma recommend --occasion gym\n  aroma score --occasion date --product 2\n  aroma doctor --json"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "List supported occasions and what each one looks for")]
    Occasions {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Rank catalog products for an occasion")]
    Recommend {
        #[arg(long, short, help = "Occasion key, e.g. date, gym, office")]
        occasion: String,
        #[arg(long, short, help = "Number of recommendations (default: recommendation.default_limit)")]
        limit: Option<usize>,
        #[arg(long, help = "JSON catalog file to use instead of the configured one")]
        catalog: Option<PathBuf>,
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Show the per-signal score breakdown for one product")]
    Score {
        #[arg(long, short, help = "Occasion key")]
        occasion: String,
        #[arg(long, short, help = "Product id")]
        product: u32,
        #[arg(long, help = "JSON catalog file to use instead of the configured one")]
        catalog: Option<PathBuf>,
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
    #[command(about = "Validate config, catalog loading, and occasion coverage")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Occasions { json } => commands::occasions::run(json),
        Command::Recommend { occasion, limit, catalog, json } => {
            commands::recommend::run(RecommendArgs { occasion, limit, catalog, json })
        }
        Command::Score { occasion, product, catalog, json } => {
            commands::score::run(ScoreArgs { occasion, product, catalog, json })
        }
        Command::Config => commands::CommandResult::text(commands::config::run()),
        Command::Doctor { json } => commands::doctor::run(json),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}

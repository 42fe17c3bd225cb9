#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line front end for the LocaCash analysis core.
//!
//! Two subcommands wrap the two pure calls: `score` runs the viability
//! scorer on a JSON scoring request, `optimize` runs the portfolio selector
//! over a JSON array of saved analyses. Results go to stdout as JSON so
//! other tools in the pipeline can consume them directly.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use locacash_portfolio_models::AtmLocation;
use locacash_scoring::ScoringConfig;
use locacash_scoring_models::ScoringRequest;

#[derive(Parser)]
#[command(name = "locacash", about = "ATM site scoring and portfolio selection")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a candidate site from a JSON scoring request
    Score {
        /// Path to a JSON file with `location_factors` and optional
        /// `weights`
        #[arg(long)]
        request: PathBuf,
        /// Optional TOML file overriding the scoring policy
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Select the portfolio of saved analyses to fund within a budget
    Optimize {
        /// Path to a JSON array of saved analysis locations
        #[arg(long)]
        locations: PathBuf,
        /// Budget in plain monetary units
        #[arg(long)]
        budget: f64,
        /// Use the exact knapsack solver instead of the greedy baseline
        #[arg(long)]
        exact: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Score { request, config } => run_score(&request, config.as_deref())?,
        Commands::Optimize {
            locations,
            budget,
            exact,
        } => run_optimize(&locations, budget, exact)?,
    }

    Ok(())
}

fn run_score(
    request_path: &Path,
    config_path: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let request: ScoringRequest = serde_json::from_str(&std::fs::read_to_string(request_path)?)?;

    let config = match config_path {
        Some(path) => {
            log::info!("loading scoring config from {}", path.display());
            ScoringConfig::from_toml_str(&std::fs::read_to_string(path)?)?
        }
        None => ScoringConfig::default(),
    };

    let result =
        locacash_scoring::score_location(&request.location_factors, &request.weights, &config)?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn run_optimize(
    locations_path: &Path,
    budget: f64,
    exact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let locations: Vec<AtmLocation> =
        serde_json::from_str(&std::fs::read_to_string(locations_path)?)?;
    log::info!("optimizing {} locations, budget {budget:.2}", locations.len());

    let result = if exact {
        locacash_portfolio::optimize_exact(&locations, budget)?
    } else {
        locacash_portfolio::optimize(&locations, budget)?
    };

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

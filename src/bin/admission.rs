use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use admission_core::catalog::Catalog;
use admission_core::config::{EngineConfig, ScorePolicy, TelemetryConfig};
use admission_core::estimation::{estimate_score_from_rank, RankEstimator};
use admission_core::matching::{
    sort_recommendations, InstitutionMatcher, MatchQuery, QuotaFilter, RecommendationOrder,
    RecommendationViews, StateFilter,
};
use admission_core::scores::ScoreSet;
use admission_core::telemetry;
use admission_core::types::{Category, MatchResult};
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(
    name = "admission",
    about = "Estimate entrance exam ranks and match them against an institution catalog",
    version
)]
struct Cli {
    /// Log level or filter directive; RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate rank range and percentile from subject scores
    Estimate(EstimateArgs),
    /// Match a rank against a JSON institution catalog
    Match(MatchArgs),
    /// Estimate the total score needed for a rank
    Score(ScoreArgs),
}

#[derive(Args, Debug)]
struct EstimateArgs {
    #[arg(long, allow_negative_numbers = true)]
    physics: i64,
    #[arg(long, allow_negative_numbers = true)]
    chemistry: i64,
    #[arg(long, allow_negative_numbers = true)]
    biology: i64,
    /// General, OBC, SC, ST or EWS; anything else counts as General
    #[arg(long, default_value = "General")]
    category: String,
    /// Clamp out-of-range subject scores instead of rejecting them
    #[arg(long)]
    clamp: bool,
}

#[derive(Args, Debug)]
struct MatchArgs {
    #[arg(long)]
    rank: u32,
    #[arg(long, default_value = "General")]
    category: String,
    /// Path to a JSON catalog snapshot
    #[arg(long)]
    catalog: PathBuf,
    #[arg(long, default_value = "All")]
    state: StateFilter,
    #[arg(long, default_value = "All")]
    quota: QuotaFilter,
    /// State used for the home-state view
    #[arg(long)]
    home_state: Option<String>,
    /// cutoff, chance, name, location or fees
    #[arg(long, default_value = "cutoff")]
    order: RecommendationOrder,
}

#[derive(Args, Debug)]
struct ScoreArgs {
    #[arg(long)]
    rank: u32,
    #[arg(long, default_value = "General")]
    category: String,
}

#[derive(Serialize)]
struct MatchOutput {
    #[serde(flatten)]
    result: MatchResult,
    views: RecommendationViews,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("admission error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    telemetry::init(&TelemetryConfig {
        log_level: cli.log_level.clone(),
    })?;

    match cli.command {
        Command::Estimate(args) => estimate(args),
        Command::Match(args) => run_match(args),
        Command::Score(args) => score(args),
    }
}

fn estimate(args: EstimateArgs) -> anyhow::Result<()> {
    let policy = if args.clamp {
        ScorePolicy::Clamp
    } else {
        EngineConfig::v0().score_policy
    };
    let scores = ScoreSet::with_policy(args.physics, args.chemistry, args.biology, policy)?;
    let category = Category::from_label_or_general(&args.category);

    let estimate = RankEstimator::default().estimate(&scores, category);
    println!("{}", serde_json::to_string_pretty(&estimate)?);
    Ok(())
}

fn run_match(args: MatchArgs) -> anyhow::Result<()> {
    let file = File::open(&args.catalog)
        .with_context(|| format!("opening catalog {}", args.catalog.display()))?;
    let catalog = Catalog::from_reader(BufReader::new(file))
        .with_context(|| format!("reading catalog {}", args.catalog.display()))?;

    let category = Category::from_label_or_general(&args.category);
    let query = MatchQuery::new(args.rank, category)?
        .with_state(args.state)
        .with_quota(args.quota);

    let matcher = InstitutionMatcher::default();
    let mut result = matcher.match_catalog(&catalog, &query);

    // Views follow the canonical order; only the top-level list is re-sorted
    let views = RecommendationViews::build(&result.recommendations, args.home_state.as_deref());
    sort_recommendations(&mut result.recommendations, args.order);

    let output = MatchOutput { result, views };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn score(args: ScoreArgs) -> anyhow::Result<()> {
    let category = Category::from_label_or_general(&args.category);
    let score = estimate_score_from_rank(args.rank, category)?;
    println!("{score}");
    Ok(())
}

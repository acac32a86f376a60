use crate::infra::build_engine;
use bid_eval::config::AppConfig;
use bid_eval::error::AppError;
use bid_eval::evaluation::router::AnalysisEnvelope;
use bid_eval::evaluation::{BidEvaluationEngine, BidRanking, BidSubmission};
use bid_eval::import::BidCsvImporter;
use bid_eval::telemetry;
use clap::Args;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// JSON bid payload; reads stdin when omitted
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// JSON file with tuned scoring tables
    #[arg(long)]
    pub(crate) scoring: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct RankArgs {
    /// CSV export with one bid per row and a `bidder` column
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// JSON file with tuned scoring tables
    #[arg(long)]
    pub(crate) scoring: Option<PathBuf>,
    /// Emit the ranking as JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

/// Shared setup for one-shot commands. Logs go to stderr so stdout stays a clean report.
fn command_engine(scoring: Option<&Path>) -> Result<BidEvaluationEngine, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    build_engine(scoring, Some(&config))
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs { input, scoring } = args;

    let raw = match input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let submission: BidSubmission = serde_json::from_str(&raw)?;
    let engine = command_engine(scoring.as_deref())?;
    let analysis = engine.evaluate(&submission)?;

    println!(
        "{}",
        serde_json::to_string_pretty(&AnalysisEnvelope::new(analysis))?
    );
    Ok(())
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), AppError> {
    let RankArgs { csv, scoring, json } = args;

    let entries = BidCsvImporter::from_path(&csv)?;
    let engine = command_engine(scoring.as_deref())?;
    let ranking = engine.rank(entries);

    if json {
        println!("{}", serde_json::to_string_pretty(&ranking)?);
    } else {
        render_ranking(&ranking, &csv);
    }
    Ok(())
}

fn render_ranking(ranking: &BidRanking, source: &Path) {
    println!("Bid ranking");
    println!("Source: {}", source.display());

    if ranking.ranked.is_empty() {
        println!("\nRanked bids: none");
    } else {
        println!("\nRanked bids");
        for entry in &ranking.ranked {
            let analysis = &entry.analysis;
            println!(
                "#{} {} | overall {} | capacity {} | financial {} | risk {} ({})",
                entry.rank,
                entry.bidder,
                analysis.overall_score,
                analysis.capacity_score,
                analysis.financial_score,
                analysis.risk_level,
                analysis.risk_score
            );
            println!("   {}", analysis.recommendation);
            for warning in &analysis.warnings {
                println!("   - warning: {warning}");
            }
        }
    }

    if !ranking.invalid.is_empty() {
        println!("\nSkipped bids");
        for invalid in &ranking.invalid {
            println!("- {}: {}", invalid.bidder, invalid.error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("BID_EVAL_PORT");
        env::remove_var("BID_EVAL_SCORING_FILE");
    }

    #[test]
    fn invalid_environment_fails_instead_of_using_default_tables() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("BID_EVAL_PORT", "not-a-port");
        env::set_var("BID_EVAL_SCORING_FILE", "/etc/bid-eval/tuned.json");
        let result = command_engine(None);
        reset_env();

        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn commands_install_log_subscriber() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let engine = command_engine(None).expect("default environment loads");

        assert!(tracing::dispatcher::has_been_set());
        assert_eq!(engine.config().weights.capacity, 0.4);
    }
}

use bid_eval::config::AppConfig;
use bid_eval::error::AppError;
use bid_eval::evaluation::{BidEvaluationEngine, ScoringConfig};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Build the engine from the first scoring file given: CLI flag, then environment.
pub(crate) fn build_engine(
    override_path: Option<&Path>,
    config: Option<&AppConfig>,
) -> Result<BidEvaluationEngine, AppError> {
    let path = override_path.or_else(|| config.and_then(|config| config.scoring_file.as_deref()));

    let scoring = match path {
        Some(path) => {
            info!(path = %path.display(), "loading tuned scoring tables");
            ScoringConfig::from_path(path)?
        }
        None => ScoringConfig::default(),
    };

    Ok(BidEvaluationEngine::new(scoring))
}

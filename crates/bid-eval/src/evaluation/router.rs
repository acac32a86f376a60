use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::BidSubmission;
use super::ranking::RankEntry;
use super::{BidEvaluationEngine, BidEvaluationResult};

pub const ANALYZE_SUCCESS_MESSAGE: &str = "Bid analyzed successfully";

/// Success envelope returned by the analyze endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisEnvelope {
    pub success: bool,
    pub analysis: BidEvaluationResult,
    pub message: &'static str,
}

impl AnalysisEnvelope {
    pub fn new(analysis: BidEvaluationResult) -> Self {
        Self {
            success: true,
            analysis,
            message: ANALYZE_SUCCESS_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RankRequest {
    pub bids: Vec<RankEntry>,
}

/// Router exposing the evaluation engine. Callers are authenticated upstream.
pub fn bid_router(engine: Arc<BidEvaluationEngine>) -> Router {
    Router::new()
        .route("/api/ml/analyze-bid", post(analyze_handler))
        .route("/api/ml/rank-bids", post(rank_handler))
        .with_state(engine)
}

fn bad_request(error: impl ToString) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
}

pub(crate) async fn analyze_handler(
    State(engine): State<Arc<BidEvaluationEngine>>,
    body: Result<axum::Json<BidSubmission>, JsonRejection>,
) -> Response {
    let submission = match body {
        Ok(axum::Json(submission)) => submission,
        Err(rejection) => return bad_request(rejection.body_text()),
    };

    match engine.evaluate(&submission) {
        Ok(analysis) => {
            (StatusCode::OK, axum::Json(AnalysisEnvelope::new(analysis))).into_response()
        }
        Err(error) => bad_request(error),
    }
}

pub(crate) async fn rank_handler(
    State(engine): State<Arc<BidEvaluationEngine>>,
    body: Result<axum::Json<RankRequest>, JsonRejection>,
) -> Response {
    let request = match body {
        Ok(axum::Json(request)) => request,
        Err(rejection) => return bad_request(rejection.body_text()),
    };

    let ranking = engine.rank(request.bids);
    (StatusCode::OK, axum::Json(ranking)).into_response()
}

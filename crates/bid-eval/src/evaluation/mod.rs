//! Bid evaluation engine: intake, the three independent scorers, the
//! recommendation decision list and the weighted overall score.

mod capacity;
pub mod config;
pub mod domain;
mod financial;
pub mod intake;
mod policy;
mod ranking;
mod risk;
pub mod router;

#[cfg(test)]
mod tests;

pub use capacity::CapacityScorer;
pub use config::{OverallWeights, ScoringConfig, ScoringConfigError};
pub use domain::{
    BidEvaluationInput, BidSubmission, FinancialStability, RawNumeric, RawRating, RiskLevel,
};
pub use financial::FinancialScorer;
pub use intake::{BidIntake, BidValidationError};
pub use policy::{Recommendation, RecommendationEngine, RecommendationSignals, Verdict};
pub use ranking::{BidRanking, InvalidBid, RankEntry, RankedBid};
pub use risk::{RiskAssessment, RiskAssessor};
pub use router::bid_router;

use serde::Serialize;
use tracing::{debug, warn};

/// Complete result of a single evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BidEvaluationResult {
    pub capacity_score: u8,
    pub financial_score: u8,
    pub risk_level: RiskLevel,
    pub risk_score: u32,
    pub warnings: Vec<String>,
    pub strengths: Vec<String>,
    pub recommendation: Recommendation,
    pub verdict: Verdict,
    /// Weighted blend, deliberately not re-clamped after aggregation.
    pub overall_score: i32,
}

/// Stateless evaluator applying the scoring tables to bid submissions.
#[derive(Debug, Clone, Default)]
pub struct BidEvaluationEngine {
    intake: BidIntake,
    config: ScoringConfig,
}

impl BidEvaluationEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            intake: BidIntake,
            config,
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Validate a raw submission and evaluate it. Fails without a partial result.
    pub fn evaluate(
        &self,
        submission: &BidSubmission,
    ) -> Result<BidEvaluationResult, BidValidationError> {
        let input = self
            .intake
            .input_from_submission(submission)
            .map_err(|err| {
                warn!(error = %err, "bid submission rejected at intake");
                err
            })?;
        Ok(self.evaluate_input(&input))
    }

    pub fn evaluate_input(&self, input: &BidEvaluationInput) -> BidEvaluationResult {
        if !input.financial_stability.is_recognized() {
            warn!(
                label = input.financial_stability.label(),
                "unrecognized financial stability rating scored as unknown"
            );
        }

        let capacity_score = CapacityScorer::new(&self.config.capacity).score(input);
        let financial_score = FinancialScorer::new(&self.config.financial).score(input);
        let risk = RiskAssessor::new(&self.config.risk).assess(input);

        let recommendation =
            RecommendationEngine::new(&self.config.recommendation).recommend(&RecommendationSignals {
                capacity_score,
                financial_score,
                risk_level: risk.risk_level,
                budget_ratio: input.budget_ratio(),
            });

        let overall_score = overall_score(
            &self.config.weights,
            capacity_score,
            financial_score,
            risk.score,
        );

        debug!(
            capacity_score,
            financial_score,
            risk_score = risk.score,
            risk_level = %risk.risk_level,
            overall_score,
            recommendation = %recommendation,
            "bid evaluated"
        );

        BidEvaluationResult {
            capacity_score,
            financial_score,
            risk_level: risk.risk_level,
            risk_score: risk.score,
            warnings: risk.warnings,
            strengths: risk.strengths,
            recommendation,
            verdict: recommendation.verdict(),
            overall_score,
        }
    }
}

fn overall_score(weights: &OverallWeights, capacity: u8, financial: u8, risk: u32) -> i32 {
    let blended = f64::from(capacity) * weights.capacity
        + f64::from(financial) * weights.financial
        + f64::from(risk) * weights.risk;
    blended.round() as i32
}

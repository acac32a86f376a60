use axum::response::Response;
use serde_json::Value;

use crate::evaluation::config::ScoringConfig;
use crate::evaluation::domain::{
    BidEvaluationInput, BidSubmission, FinancialStability, RawNumeric, RawRating,
};
use crate::evaluation::BidEvaluationEngine;

/// Builder over the seven scored attributes, starting from a well-resourced bidder.
#[derive(Debug, Clone)]
pub(super) struct Bid {
    pub(super) ongoing_projects: u32,
    pub(super) conflicting_deadlines: u32,
    pub(super) employee_count: u32,
    pub(super) capacity_percent: u8,
    pub(super) stability: &'static str,
    pub(super) bid_amount: f64,
    pub(super) project_budget: f64,
}

impl Default for Bid {
    fn default() -> Self {
        Self {
            ongoing_projects: 1,
            conflicting_deadlines: 0,
            employee_count: 60,
            capacity_percent: 90,
            stability: "excellent",
            bid_amount: 99_000.0,
            project_budget: 100_000.0,
        }
    }
}

impl Bid {
    pub(super) fn overextended() -> Self {
        Self {
            ongoing_projects: 6,
            conflicting_deadlines: 3,
            employee_count: 5,
            capacity_percent: 20,
            stability: "poor",
            bid_amount: 50_000.0,
            project_budget: 100_000.0,
        }
    }

    pub(super) fn ratio(mut self, ratio: f64) -> Self {
        self.bid_amount = self.project_budget * ratio;
        self
    }

    pub(super) fn input(&self) -> BidEvaluationInput {
        BidEvaluationInput {
            bid_amount: self.bid_amount,
            project_budget: self.project_budget,
            ongoing_projects: self.ongoing_projects,
            conflicting_deadlines: self.conflicting_deadlines,
            employee_count: self.employee_count,
            company_capacity_percent: self.capacity_percent,
            financial_stability: FinancialStability::parse(self.stability),
        }
    }

    pub(super) fn submission(&self) -> BidSubmission {
        BidSubmission {
            bid_amount: Some(RawNumeric::Number(self.bid_amount)),
            project_budget: Some(RawNumeric::Number(self.project_budget)),
            ongoing_projects: Some(RawNumeric::Text(self.ongoing_projects.to_string())),
            conflicting_deadlines: Some(RawNumeric::Text(self.conflicting_deadlines.to_string())),
            employee_count: Some(RawNumeric::Number(f64::from(self.employee_count))),
            company_capacity: Some(RawNumeric::Text(self.capacity_percent.to_string())),
            financial_stability: Some(RawRating::from(self.stability)),
            timeline: None,
            experience: None,
        }
    }
}

pub(super) fn scoring_config() -> ScoringConfig {
    ScoringConfig::default()
}

pub(super) fn engine() -> BidEvaluationEngine {
    BidEvaluationEngine::new(scoring_config())
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("body readable");
    serde_json::from_slice(&body).expect("valid json body")
}

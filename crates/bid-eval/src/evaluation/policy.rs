use std::fmt;

use serde::{Serialize, Serializer};

use super::config::RecommendationThresholds;
use super::domain::RiskLevel;

/// Coarse outcome class shared by several recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Approved,
    Rejected,
    ReviewRequired,
}

/// Templated recommendation emitted for a bid. Serializes as its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    RejectedHighRisk,
    RejectedInsufficientCapacity,
    RejectedFinancialConcerns,
    ReviewBelowBudget,
    ReviewAboveBudget,
    ApprovedExcellent,
    ApprovedGood,
    ReviewModerateRisk,
}

impl Recommendation {
    pub const fn message(self) -> &'static str {
        match self {
            Recommendation::RejectedHighRisk => "REJECTED – High risk factors detected",
            Recommendation::RejectedInsufficientCapacity => {
                "REJECTED – Insufficient capacity for project execution"
            }
            Recommendation::RejectedFinancialConcerns => "REJECTED – Financial stability concerns",
            Recommendation::ReviewBelowBudget => {
                "REVIEW REQUIRED – Bid significantly below budget"
            }
            Recommendation::ReviewAboveBudget => {
                "REVIEW REQUIRED – Bid significantly above budget"
            }
            Recommendation::ApprovedExcellent => {
                "APPROVED – Excellent capacity and financial standing"
            }
            Recommendation::ApprovedGood => "APPROVED – Good capacity and financial standing",
            Recommendation::ReviewModerateRisk => {
                "REVIEW REQUIRED – Moderate risk factors present"
            }
        }
    }

    pub const fn verdict(self) -> Verdict {
        match self {
            Recommendation::RejectedHighRisk
            | Recommendation::RejectedInsufficientCapacity
            | Recommendation::RejectedFinancialConcerns => Verdict::Rejected,
            Recommendation::ApprovedExcellent | Recommendation::ApprovedGood => Verdict::Approved,
            Recommendation::ReviewBelowBudget
            | Recommendation::ReviewAboveBudget
            | Recommendation::ReviewModerateRisk => Verdict::ReviewRequired,
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for Recommendation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// Upstream signals the decision list consults.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationSignals {
    pub capacity_score: u8,
    pub financial_score: u8,
    pub risk_level: RiskLevel,
    pub budget_ratio: f64,
}

/// Ordered decision list; the first matching rule wins.
pub struct RecommendationEngine<'a> {
    thresholds: &'a RecommendationThresholds,
}

impl<'a> RecommendationEngine<'a> {
    pub fn new(thresholds: &'a RecommendationThresholds) -> Self {
        Self { thresholds }
    }

    pub fn recommend(&self, signals: &RecommendationSignals) -> Recommendation {
        let t = self.thresholds;

        if signals.risk_level == RiskLevel::High {
            return Recommendation::RejectedHighRisk;
        }

        if signals.capacity_score < t.reject_capacity_below {
            return Recommendation::RejectedInsufficientCapacity;
        }

        if signals.financial_score < t.reject_financial_below {
            return Recommendation::RejectedFinancialConcerns;
        }

        if signals.budget_ratio < t.review_ratio_below {
            return Recommendation::ReviewBelowBudget;
        }

        if signals.budget_ratio > t.review_ratio_above {
            return Recommendation::ReviewAboveBudget;
        }

        if signals.capacity_score >= t.excellent_at_least
            && signals.financial_score >= t.excellent_at_least
            && signals.risk_level == RiskLevel::Low
        {
            return Recommendation::ApprovedExcellent;
        }

        if signals.capacity_score >= t.good_at_least && signals.financial_score >= t.good_at_least
        {
            return Recommendation::ApprovedGood;
        }

        Recommendation::ReviewModerateRisk
    }
}

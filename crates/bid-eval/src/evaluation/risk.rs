use serde::Serialize;

use super::config::{FindingKind, Measure, RiskSignal, RiskTables, RiskTiers};
use super::domain::{BidEvaluationInput, RiskLevel};

/// Qualitative findings plus the risk-aligned score for a bid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub risk_level: RiskLevel,
    pub warnings: Vec<String>,
    pub strengths: Vec<String>,
    /// Floored at zero; bonuses may lift it past 100.
    pub score: u32,
}

/// Re-examines the input factor by factor, independently of the capacity and financial scorers.
pub struct RiskAssessor<'a> {
    tables: &'a RiskTables,
}

impl<'a> RiskAssessor<'a> {
    pub fn new(tables: &'a RiskTables) -> Self {
        Self { tables }
    }

    pub fn assess(&self, input: &BidEvaluationInput) -> RiskAssessment {
        let mut warnings = Vec::new();
        let mut strengths = Vec::new();
        let mut risk_score = self.tables.base_score;

        for factor in &self.tables.factors {
            let measure = measure_for(factor.signal, input);
            let Some(rule) = factor.rules.iter().find(|rule| rule.when.matches(measure)) else {
                continue;
            };

            risk_score += rule.adjustment;
            match rule.finding {
                FindingKind::Warning => warnings.push(rule.message.clone()),
                FindingKind::Strength => strengths.push(rule.message.clone()),
            }
        }

        let score = risk_score.max(0);
        RiskAssessment {
            risk_level: tier_for(score, &self.tables.tiers),
            warnings,
            strengths,
            score: score as u32,
        }
    }
}

fn measure_for(signal: RiskSignal, input: &BidEvaluationInput) -> Measure<'_> {
    match signal {
        RiskSignal::OngoingProjects => Measure::Number(f64::from(input.ongoing_projects)),
        RiskSignal::ConflictingDeadlines => {
            Measure::Number(f64::from(input.conflicting_deadlines))
        }
        RiskSignal::EmployeeCount => Measure::Number(f64::from(input.employee_count)),
        RiskSignal::AvailableCapacity => {
            Measure::Number(f64::from(input.company_capacity_percent))
        }
        RiskSignal::FinancialStability => Measure::Rating(&input.financial_stability),
        RiskSignal::BudgetRatio => Measure::Number(input.budget_ratio()),
    }
}

pub(crate) fn tier_for(score: i32, tiers: &RiskTiers) -> RiskLevel {
    if score < tiers.high_below {
        RiskLevel::High
    } else if score < tiers.medium_below {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

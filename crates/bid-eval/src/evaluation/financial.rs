use super::config::FinancialTables;
use super::domain::BidEvaluationInput;

const BASE_SCORE: i32 = 100;

/// Scores financial fitness from the budget ratio and the declared stability rating.
pub struct FinancialScorer<'a> {
    tables: &'a FinancialTables,
}

impl<'a> FinancialScorer<'a> {
    pub fn new(tables: &'a FinancialTables) -> Self {
        Self { tables }
    }

    pub fn score(&self, input: &BidEvaluationInput) -> u8 {
        let ratio_adjustment = self.tables.budget_ratio.adjustment(input.budget_ratio());
        let stability_adjustment = self.tables.stability.adjustment(&input.financial_stability);

        let score = BASE_SCORE + ratio_adjustment + stability_adjustment;
        score.clamp(0, 100) as u8
    }
}

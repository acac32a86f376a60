use super::config::CapacityTables;
use super::domain::BidEvaluationInput;

const BASE_SCORE: i32 = 100;

/// Scores a bidder's operational bandwidth. Each dimension deducts independently.
pub struct CapacityScorer<'a> {
    tables: &'a CapacityTables,
}

impl<'a> CapacityScorer<'a> {
    pub fn new(tables: &'a CapacityTables) -> Self {
        Self { tables }
    }

    pub fn score(&self, input: &BidEvaluationInput) -> u8 {
        let tables = self.tables;
        let deductions = [
            tables
                .ongoing_projects
                .adjustment(f64::from(input.ongoing_projects)),
            tables
                .conflicting_deadlines
                .adjustment(f64::from(input.conflicting_deadlines)),
            tables
                .employee_count
                .adjustment(f64::from(input.employee_count)),
            tables
                .available_capacity
                .adjustment(f64::from(input.company_capacity_percent)),
        ];

        let score = BASE_SCORE + deductions.iter().sum::<i32>();
        score.clamp(0, 100) as u8
    }
}

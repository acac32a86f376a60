use super::domain::{
    BidEvaluationInput, BidSubmission, FinancialStability, RawNumeric, RawRating,
};

/// Validation errors raised while coercing a raw submission.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BidValidationError {
    #[error("{field} is required")]
    Missing { field: &'static str },
    #[error("{field} must be a finite number (received {raw:?})")]
    NotFinite { field: &'static str, raw: String },
    #[error("projectBudget must be greater than zero (received {0})")]
    NonPositiveBudget(f64),
    #[error("bidAmount must be greater than zero (received {0})")]
    NonPositiveBid(f64),
    #[error("{field} must not be negative (received {value})")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} must be between {min} and {max} (received {value})")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },
}

/// Converts raw submissions into validated evaluation inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct BidIntake;

impl BidIntake {
    /// Coerce and validate every scored field. The first failure in field order wins.
    pub fn input_from_submission(
        &self,
        submission: &BidSubmission,
    ) -> Result<BidEvaluationInput, BidValidationError> {
        let bid_amount = finite("bidAmount", submission.bid_amount.as_ref())?;
        let project_budget = finite("projectBudget", submission.project_budget.as_ref())?;
        if bid_amount <= 0.0 {
            return Err(BidValidationError::NonPositiveBid(bid_amount));
        }
        if project_budget <= 0.0 {
            return Err(BidValidationError::NonPositiveBudget(project_budget));
        }

        let ongoing_projects = count("ongoingProjects", submission.ongoing_projects.as_ref())?;
        let conflicting_deadlines = count(
            "conflictingDeadlines",
            submission.conflicting_deadlines.as_ref(),
        )?;
        let employee_count = count("employeeCount", submission.employee_count.as_ref())?;

        let capacity = finite("companyCapacity", submission.company_capacity.as_ref())?;
        if !(0.0..=100.0).contains(&capacity) {
            return Err(BidValidationError::OutOfRange {
                field: "companyCapacity",
                min: 0.0,
                max: 100.0,
                value: capacity,
            });
        }

        let financial_stability = submission
            .financial_stability
            .as_ref()
            .map(RawRating::to_stability)
            .unwrap_or_else(|| FinancialStability::Unrecognized(String::new()));

        Ok(BidEvaluationInput {
            bid_amount,
            project_budget,
            ongoing_projects,
            conflicting_deadlines,
            employee_count,
            company_capacity_percent: capacity.trunc() as u8,
            financial_stability,
        })
    }
}

fn finite(field: &'static str, raw: Option<&RawNumeric>) -> Result<f64, BidValidationError> {
    let value = match raw {
        None => return Err(BidValidationError::Missing { field }),
        Some(RawNumeric::Number(value)) => *value,
        Some(RawNumeric::Text(text)) => {
            text.trim()
                .parse::<f64>()
                .map_err(|_| BidValidationError::NotFinite {
                    field,
                    raw: text.clone(),
                })?
        }
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(BidValidationError::NotFinite {
            field,
            raw: value.to_string(),
        })
    }
}

fn count(field: &'static str, raw: Option<&RawNumeric>) -> Result<u32, BidValidationError> {
    let value = finite(field, raw)?;
    if value < 0.0 {
        return Err(BidValidationError::Negative { field, value });
    }
    let whole = value.trunc();
    if whole > f64::from(u32::MAX) {
        return Err(BidValidationError::OutOfRange {
            field,
            min: 0.0,
            max: f64::from(u32::MAX),
            value,
        });
    }
    Ok(whole as u32)
}

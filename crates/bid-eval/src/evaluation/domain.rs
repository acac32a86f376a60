use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric field as it arrives over the request boundary: either a JSON number or text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumeric {
    Number(f64),
    Text(String),
}

impl From<f64> for RawNumeric {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawNumeric {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Financial stability rating as it arrives over the request boundary.
///
/// Clients occasionally send numbers or booleans here; those are kept so intake can
/// score them as an unknown rating instead of rejecting the whole bid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawRating {
    Label(String),
    Other(serde_json::Value),
}

impl RawRating {
    pub fn to_stability(&self) -> FinancialStability {
        match self {
            Self::Label(label) => FinancialStability::parse(label),
            Self::Other(value) => FinancialStability::Unrecognized(value.to_string()),
        }
    }
}

impl From<&str> for RawRating {
    fn from(value: &str) -> Self {
        Self::Label(value.to_string())
    }
}

/// Raw bid record supplied by the caller before coercion and validation.
///
/// Unknown fields are ignored; `timeline` and `experience` are accepted for
/// compatibility with existing clients but play no part in scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidSubmission {
    #[serde(default)]
    pub bid_amount: Option<RawNumeric>,
    #[serde(default)]
    pub project_budget: Option<RawNumeric>,
    #[serde(default)]
    pub ongoing_projects: Option<RawNumeric>,
    #[serde(default)]
    pub conflicting_deadlines: Option<RawNumeric>,
    #[serde(default)]
    pub employee_count: Option<RawNumeric>,
    #[serde(default)]
    pub company_capacity: Option<RawNumeric>,
    #[serde(default)]
    pub financial_stability: Option<RawRating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<serde_json::Value>,
}

/// Self-reported financial stability rating of the bidding company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinancialStability {
    Excellent,
    Good,
    Average,
    Fair,
    Poor,
    /// Any label outside the known scale, kept verbatim for logging.
    Unrecognized(String),
}

impl FinancialStability {
    /// Labels match exactly; any other spelling or casing is unrecognized.
    pub fn parse(label: &str) -> Self {
        match label {
            "excellent" => Self::Excellent,
            "good" => Self::Good,
            "average" => Self::Average,
            "fair" => Self::Fair,
            "poor" => Self::Poor,
            _ => Self::Unrecognized(label.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Average => "average",
            Self::Fair => "fair",
            Self::Poor => "poor",
            Self::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl From<&str> for FinancialStability {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for FinancialStability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validated, coerced input consumed by the scorers.
#[derive(Debug, Clone, PartialEq)]
pub struct BidEvaluationInput {
    pub bid_amount: f64,
    pub project_budget: f64,
    pub ongoing_projects: u32,
    pub conflicting_deadlines: u32,
    pub employee_count: u32,
    /// Share of the company's capacity still available, as a whole percentage.
    pub company_capacity_percent: u8,
    pub financial_stability: FinancialStability,
}

impl BidEvaluationInput {
    /// Bid amount divided by project budget; intake guarantees a positive budget.
    pub fn budget_ratio(&self) -> f64 {
        self.bid_amount / self.project_budget
    }
}

/// Risk tier derived from the floored risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

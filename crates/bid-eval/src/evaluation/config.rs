use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::domain::FinancialStability;

/// Scoring tables shared by every scorer. `Default` holds the canonical rubric.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub capacity: CapacityTables,
    pub financial: FinancialTables,
    pub risk: RiskTables,
    pub recommendation: RecommendationThresholds,
    pub weights: OverallWeights,
}

impl ScoringConfig {
    /// Load tuned tables from a JSON document; omitted sections keep their defaults.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ScoringConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ScoringConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ScoringConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.weights.validate()?;
        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScoringConfigError {
    #[error("failed to read scoring tables from {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid scoring tables: {0}")]
    Json(#[from] serde_json::Error),
    #[error("overall weights must be finite and non-negative")]
    InvalidWeights,
}

/// Comparison applied to a measured value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Above(f64),
    AtLeast(f64),
    Below(f64),
    AtMost(f64),
    /// Inclusive on both ends.
    Within { low: f64, high: f64 },
    RatedAs(Vec<FinancialStability>),
}

/// Value a [`Condition`] is tested against.
#[derive(Debug, Clone, Copy)]
pub enum Measure<'a> {
    Number(f64),
    Rating(&'a FinancialStability),
}

impl Condition {
    pub fn matches(&self, measure: Measure<'_>) -> bool {
        match (self, measure) {
            (Condition::Above(bound), Measure::Number(value)) => value > *bound,
            (Condition::AtLeast(bound), Measure::Number(value)) => value >= *bound,
            (Condition::Below(bound), Measure::Number(value)) => value < *bound,
            (Condition::AtMost(bound), Measure::Number(value)) => value <= *bound,
            (Condition::Within { low, high }, Measure::Number(value)) => {
                value >= *low && value <= *high
            }
            (Condition::RatedAs(ratings), Measure::Rating(rating)) => ratings.contains(rating),
            _ => false,
        }
    }
}

/// Single tier of a deduction table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    pub when: Condition,
    pub adjustment: i32,
}

impl Tier {
    pub fn new(when: Condition, adjustment: i32) -> Self {
        Self { when, adjustment }
    }
}

/// Ordered tiers, most severe first. Only the first matching tier applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeductionTable {
    pub tiers: Vec<Tier>,
}

impl DeductionTable {
    pub fn new(tiers: Vec<Tier>) -> Self {
        Self { tiers }
    }

    pub fn adjustment(&self, value: f64) -> i32 {
        self.tiers
            .iter()
            .find(|tier| tier.when.matches(Measure::Number(value)))
            .map(|tier| tier.adjustment)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapacityTables {
    pub ongoing_projects: DeductionTable,
    pub conflicting_deadlines: DeductionTable,
    pub employee_count: DeductionTable,
    pub available_capacity: DeductionTable,
}

impl Default for CapacityTables {
    fn default() -> Self {
        Self {
            ongoing_projects: DeductionTable::new(vec![
                Tier::new(Condition::Above(5.0), -20),
                Tier::new(Condition::Above(3.0), -10),
                Tier::new(Condition::Above(1.0), -5),
            ]),
            conflicting_deadlines: DeductionTable::new(vec![
                Tier::new(Condition::Above(2.0), -25),
                Tier::new(Condition::Above(0.0), -15),
            ]),
            employee_count: DeductionTable::new(vec![
                Tier::new(Condition::Below(10.0), -20),
                Tier::new(Condition::Below(25.0), -10),
            ]),
            available_capacity: DeductionTable::new(vec![
                Tier::new(Condition::Below(30.0), -30),
                Tier::new(Condition::Below(50.0), -20),
                Tier::new(Condition::Below(70.0), -10),
            ]),
        }
    }
}

/// Adjustment per stability rating; unrecognized labels get their own entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StabilityTable {
    pub excellent: i32,
    pub good: i32,
    pub average: i32,
    pub fair: i32,
    pub poor: i32,
    pub unrecognized: i32,
}

impl StabilityTable {
    pub fn adjustment(&self, rating: &FinancialStability) -> i32 {
        match rating {
            FinancialStability::Excellent => self.excellent,
            FinancialStability::Good => self.good,
            FinancialStability::Average => self.average,
            FinancialStability::Fair => self.fair,
            FinancialStability::Poor => self.poor,
            FinancialStability::Unrecognized(_) => self.unrecognized,
        }
    }
}

impl Default for StabilityTable {
    fn default() -> Self {
        Self {
            excellent: 20,
            good: 10,
            average: 0,
            fair: -15,
            poor: -30,
            unrecognized: -10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialTables {
    /// Ratio bands between the penalty thresholds and the optimal band stay unscored.
    pub budget_ratio: DeductionTable,
    pub stability: StabilityTable,
}

impl Default for FinancialTables {
    fn default() -> Self {
        Self {
            budget_ratio: DeductionTable::new(vec![
                Tier::new(Condition::Above(1.2), -30),
                Tier::new(Condition::Below(0.8), -20),
                Tier::new(Condition::Within { low: 0.9, high: 1.1 }, 10),
            ]),
            stability: StabilityTable::default(),
        }
    }
}

/// Input attribute a risk factor inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskSignal {
    OngoingProjects,
    ConflictingDeadlines,
    EmployeeCount,
    AvailableCapacity,
    FinancialStability,
    BudgetRatio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    Warning,
    Strength,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskRule {
    pub when: Condition,
    pub finding: FindingKind,
    pub adjustment: i32,
    pub message: String,
}

impl RiskRule {
    fn warning(when: Condition, penalty: i32, message: &str) -> Self {
        Self {
            when,
            finding: FindingKind::Warning,
            adjustment: -penalty,
            message: message.to_string(),
        }
    }

    fn strength(when: Condition, bonus: i32, message: &str) -> Self {
        Self {
            when,
            finding: FindingKind::Strength,
            adjustment: bonus,
            message: message.to_string(),
        }
    }
}

/// One independently evaluated factor; the first matching rule wins, none may match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub signal: RiskSignal,
    pub rules: Vec<RiskRule>,
}

/// Risk score cut-offs, applied to the floored score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskTiers {
    pub high_below: i32,
    pub medium_below: i32,
}

impl Default for RiskTiers {
    fn default() -> Self {
        Self {
            high_below: 40,
            medium_below: 70,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskTables {
    pub base_score: i32,
    pub factors: Vec<RiskFactor>,
    pub tiers: RiskTiers,
}

impl Default for RiskTables {
    fn default() -> Self {
        use FinancialStability::{Excellent, Fair, Poor};

        let factors = vec![
            RiskFactor {
                signal: RiskSignal::OngoingProjects,
                rules: vec![
                    RiskRule::warning(
                        Condition::Above(5.0),
                        25,
                        "High number of ongoing projects may affect resource allocation",
                    ),
                    RiskRule::strength(
                        Condition::AtMost(2.0),
                        10,
                        "Low ongoing project count indicates good resource availability",
                    ),
                ],
            },
            RiskFactor {
                signal: RiskSignal::ConflictingDeadlines,
                rules: vec![
                    RiskRule::warning(
                        Condition::Above(2.0),
                        30,
                        "Multiple conflicting deadlines detected - high scheduling risk",
                    ),
                    RiskRule::strength(
                        Condition::AtMost(0.0),
                        15,
                        "No conflicting deadlines - good project scheduling",
                    ),
                ],
            },
            RiskFactor {
                signal: RiskSignal::EmployeeCount,
                rules: vec![
                    RiskRule::warning(
                        Condition::Below(10.0),
                        20,
                        "Small team size may limit project execution capacity",
                    ),
                    RiskRule::strength(
                        Condition::Above(50.0),
                        10,
                        "Large team indicates strong execution capability",
                    ),
                ],
            },
            RiskFactor {
                signal: RiskSignal::AvailableCapacity,
                rules: vec![
                    RiskRule::warning(
                        Condition::Below(30.0),
                        35,
                        "Very low available capacity - high resource constraint risk",
                    ),
                    RiskRule::strength(
                        Condition::Above(80.0),
                        15,
                        "High available capacity - excellent resource availability",
                    ),
                ],
            },
            RiskFactor {
                signal: RiskSignal::FinancialStability,
                rules: vec![
                    RiskRule::warning(
                        Condition::RatedAs(vec![Poor, Fair]),
                        25,
                        "Low financial stability rating - payment risk",
                    ),
                    RiskRule::strength(
                        Condition::RatedAs(vec![Excellent]),
                        20,
                        "Excellent financial stability - low payment risk",
                    ),
                ],
            },
            RiskFactor {
                signal: RiskSignal::BudgetRatio,
                rules: vec![
                    RiskRule::warning(
                        Condition::Below(0.8),
                        15,
                        "Bid significantly below budget - potential quality concerns",
                    ),
                    RiskRule::warning(
                        Condition::Above(1.2),
                        10,
                        "Bid significantly above budget - cost efficiency concerns",
                    ),
                ],
            },
        ];

        Self {
            base_score: 100,
            factors,
            tiers: RiskTiers::default(),
        }
    }
}

/// Thresholds consulted by the recommendation decision list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationThresholds {
    pub reject_capacity_below: u8,
    pub reject_financial_below: u8,
    pub review_ratio_below: f64,
    pub review_ratio_above: f64,
    pub excellent_at_least: u8,
    pub good_at_least: u8,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            reject_capacity_below: 50,
            reject_financial_below: 40,
            review_ratio_below: 0.8,
            review_ratio_above: 1.2,
            excellent_at_least: 80,
            good_at_least: 70,
        }
    }
}

/// Blend used for the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverallWeights {
    pub capacity: f64,
    pub financial: f64,
    pub risk: f64,
}

impl OverallWeights {
    fn validate(&self) -> Result<(), ScoringConfigError> {
        let valid = [self.capacity, self.financial, self.risk]
            .iter()
            .all(|weight| weight.is_finite() && *weight >= 0.0);
        if valid {
            Ok(())
        } else {
            Err(ScoringConfigError::InvalidWeights)
        }
    }
}

impl Default for OverallWeights {
    fn default() -> Self {
        Self {
            capacity: 0.4,
            financial: 0.3,
            risk: 0.3,
        }
    }
}

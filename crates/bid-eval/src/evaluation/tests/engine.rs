use super::common::*;
use crate::evaluation::domain::RiskLevel;
use crate::evaluation::{BidValidationError, Recommendation, Verdict};

#[test]
fn overextended_bid_is_rejected_for_high_risk() {
    let result = engine()
        .evaluate(&Bid::overextended().submission())
        .expect("valid submission");

    assert_eq!(result.capacity_score, 5);
    assert_eq!(result.financial_score, 50);
    assert_eq!(result.risk_level, RiskLevel::High);
    assert_eq!(result.risk_score, 0);
    assert_eq!(result.recommendation, Recommendation::RejectedHighRisk);
    assert!(result.recommendation.message().starts_with("REJECTED"));
    assert_eq!(result.verdict, Verdict::Rejected);
    // round(5 * 0.4 + 50 * 0.3 + 0 * 0.3)
    assert_eq!(result.overall_score, 17);
}

#[test]
fn strong_bid_is_approved_as_excellent() {
    let result = engine()
        .evaluate(&Bid::default().submission())
        .expect("valid submission");

    assert_eq!(result.capacity_score, 100);
    assert_eq!(result.financial_score, 100);
    assert_eq!(result.risk_level, RiskLevel::Low);
    assert_eq!(result.strengths.len(), 5);
    assert!(result.warnings.is_empty());
    assert_eq!(
        result.recommendation.message(),
        "APPROVED – Excellent capacity and financial standing"
    );
    // risk bonuses lift the blend past 100; it is not re-clamped
    assert_eq!(result.overall_score, 121);
}

#[test]
fn moderate_bid_requires_review() {
    let bid = Bid {
        ongoing_projects: 2,
        conflicting_deadlines: 1,
        employee_count: 20,
        capacity_percent: 60,
        stability: "good",
        ..Bid::default()
    }
    .ratio(1.15);

    let result = engine().evaluate(&bid.submission()).expect("valid submission");

    assert_eq!(result.capacity_score, 60);
    assert_eq!(result.financial_score, 100);
    assert_eq!(result.risk_score, 110);
    assert_eq!(result.recommendation, Recommendation::ReviewModerateRisk);
    assert_eq!(result.overall_score, 87);
}

#[test]
fn good_bid_is_approved_as_good() {
    let bid = Bid {
        ongoing_projects: 4,
        conflicting_deadlines: 1,
        employee_count: 30,
        capacity_percent: 80,
        stability: "average",
        ..Bid::default()
    }
    .ratio(1.0);

    let result = engine().evaluate(&bid.submission()).expect("valid submission");

    assert_eq!(result.capacity_score, 75);
    assert_eq!(result.financial_score, 100);
    assert_eq!(result.risk_score, 100);
    assert_eq!(result.recommendation, Recommendation::ApprovedGood);
    assert_eq!(result.overall_score, 90);
}

#[test]
fn thin_capacity_is_rejected_before_budget_checks() {
    let bid = Bid {
        ongoing_projects: 6,
        conflicting_deadlines: 3,
        employee_count: 30,
        capacity_percent: 60,
        ..Bid::default()
    }
    .ratio(1.0);

    let result = engine().evaluate(&bid.submission()).expect("valid submission");

    assert_eq!(result.capacity_score, 45);
    assert_eq!(result.risk_level, RiskLevel::Medium);
    assert_eq!(
        result.recommendation,
        Recommendation::RejectedInsufficientCapacity
    );
}

#[test]
fn under_budget_bid_is_flagged_for_review() {
    let result = engine()
        .evaluate(&Bid::default().ratio(0.7).submission())
        .expect("valid submission");

    assert_eq!(result.financial_score, 100);
    assert_eq!(result.recommendation, Recommendation::ReviewBelowBudget);
    assert_eq!(result.verdict, Verdict::ReviewRequired);
    assert_eq!(result.warnings.len(), 1);
}

#[test]
fn over_budget_bid_is_flagged_for_review() {
    let result = engine()
        .evaluate(&Bid::default().ratio(1.3).submission())
        .expect("valid submission");

    assert_eq!(result.financial_score, 90);
    assert_eq!(result.recommendation, Recommendation::ReviewAboveBudget);
}

#[test]
fn zero_or_negative_budget_fails_without_scores() {
    let engine = engine();

    for budget in [0.0, -5_000.0] {
        let bid = Bid {
            project_budget: budget,
            ..Bid::default()
        };
        let err = engine
            .evaluate(&bid.submission())
            .expect_err("budget must be positive");
        assert_eq!(err, BidValidationError::NonPositiveBudget(budget));
    }
}

#[test]
fn repeated_evaluation_is_byte_identical() {
    let engine = engine();
    let submission = Bid::overextended().submission();

    let first = serde_json::to_vec(&engine.evaluate(&submission).expect("valid")).expect("json");
    let second = serde_json::to_vec(&engine.evaluate(&submission).expect("valid")).expect("json");

    assert_eq!(first, second);
}

#[test]
fn result_serializes_with_camel_case_fields() {
    let result = engine()
        .evaluate(&Bid::default().submission())
        .expect("valid submission");

    let json = serde_json::to_value(&result).expect("serializes");

    assert_eq!(json["capacityScore"], 100);
    assert_eq!(json["financialScore"], 100);
    assert_eq!(json["riskLevel"], "LOW");
    assert_eq!(json["riskScore"], 170);
    assert_eq!(json["overallScore"], 121);
    assert_eq!(json["verdict"], "approved");
    assert_eq!(
        json["recommendation"],
        "APPROVED – Excellent capacity and financial standing"
    );
    assert_eq!(json["strengths"].as_array().map(Vec::len), Some(5));
    assert_eq!(json["warnings"].as_array().map(Vec::len), Some(0));
}

#[test]
fn tuned_weights_change_only_the_blend() {
    let mut config = scoring_config();
    config.weights.risk = 0.0;
    let engine = crate::evaluation::BidEvaluationEngine::new(config);

    let result = engine
        .evaluate(&Bid::default().submission())
        .expect("valid submission");

    assert_eq!(result.overall_score, 70);
    assert_eq!(result.risk_score, 170);
}

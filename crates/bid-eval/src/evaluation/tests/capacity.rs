use super::common::*;
use crate::evaluation::CapacityScorer;

fn capacity(bid: &Bid) -> u8 {
    let config = scoring_config();
    CapacityScorer::new(&config.capacity).score(&bid.input())
}

#[test]
fn unconstrained_bidder_keeps_full_score() {
    assert_eq!(capacity(&Bid::default()), 100);
}

#[test]
fn deductions_accumulate_across_dimensions() {
    let bid = Bid {
        ongoing_projects: 4,
        conflicting_deadlines: 1,
        employee_count: 20,
        capacity_percent: 60,
        ..Bid::default()
    };

    assert_eq!(capacity(&bid), 100 - 10 - 15 - 10 - 10);
}

#[test]
fn only_the_most_severe_tier_applies_per_dimension() {
    let six_projects = Bid {
        ongoing_projects: 6,
        ..Bid::default()
    };
    let two_projects = Bid {
        ongoing_projects: 2,
        ..Bid::default()
    };

    assert_eq!(capacity(&six_projects), 80);
    assert_eq!(capacity(&two_projects), 95);
}

#[test]
fn tier_boundaries_are_exclusive() {
    let at_boundaries = Bid {
        ongoing_projects: 5,
        conflicting_deadlines: 2,
        employee_count: 25,
        capacity_percent: 70,
        ..Bid::default()
    };

    assert_eq!(capacity(&at_boundaries), 100 - 10 - 15);
}

#[test]
fn overextended_bidder_scores_sum_of_all_worst_tiers() {
    // 100 - 20 - 25 - 20 - 30
    assert_eq!(capacity(&Bid::overextended()), 5);
}

#[test]
fn score_never_drops_below_zero() {
    let mut config = scoring_config();
    config.capacity.available_capacity.tiers[0].adjustment = -90;

    let score = CapacityScorer::new(&config.capacity).score(&Bid::overextended().input());
    assert_eq!(score, 0);
}

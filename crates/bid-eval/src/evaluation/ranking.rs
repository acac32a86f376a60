use serde::{Deserialize, Serialize};
use tracing::info;

use super::domain::BidSubmission;
use super::{BidEvaluationEngine, BidEvaluationResult};

/// Named bid awaiting ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankEntry {
    pub bidder: String,
    #[serde(flatten)]
    pub submission: BidSubmission,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedBid {
    pub rank: usize,
    pub bidder: String,
    pub analysis: BidEvaluationResult,
}

/// Entry that failed intake validation and was left out of the ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvalidBid {
    pub bidder: String,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BidRanking {
    pub ranked: Vec<RankedBid>,
    pub invalid: Vec<InvalidBid>,
}

impl BidRanking {
    pub fn top(&self) -> Option<&RankedBid> {
        self.ranked.first()
    }
}

impl BidEvaluationEngine {
    /// Evaluate competing bids and order them best first.
    ///
    /// Ordering is by overall score descending, then lower risk tier, then input
    /// order. Invalid entries are reported separately and never abort the batch.
    pub fn rank(&self, entries: Vec<RankEntry>) -> BidRanking {
        let mut evaluated = Vec::with_capacity(entries.len());
        let mut invalid = Vec::new();

        for entry in entries {
            match self.evaluate(&entry.submission) {
                Ok(analysis) => evaluated.push((entry.bidder, analysis)),
                Err(err) => invalid.push(InvalidBid {
                    bidder: entry.bidder,
                    error: err.to_string(),
                }),
            }
        }

        // stable sort keeps input order for ties
        evaluated.sort_by(|(_, a), (_, b)| {
            b.overall_score
                .cmp(&a.overall_score)
                .then_with(|| a.risk_level.cmp(&b.risk_level))
        });

        let ranked: Vec<RankedBid> = evaluated
            .into_iter()
            .enumerate()
            .map(|(index, (bidder, analysis))| RankedBid {
                rank: index + 1,
                bidder,
                analysis,
            })
            .collect();

        info!(
            ranked = ranked.len(),
            invalid = invalid.len(),
            "bid ranking complete"
        );

        BidRanking { ranked, invalid }
    }
}

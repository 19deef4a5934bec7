pub mod curve;

use crate::scores::{ScoreSet, MAX_TOTAL};
use crate::types::{Category, RankEstimate, ValidationError};
pub use curve::{NeetCurve, RankBand, RankCurve, NEET_RANK_BANDS};

/// Optimistic and pessimistic ends of the rank range.
pub const MIN_RANK_FACTOR: f64 = 0.8;
pub const MAX_RANK_FACTOR: f64 = 1.2;

/// Converts subject scores into a category-adjusted rank estimate.
pub struct RankEstimator<C> {
    curve: C,
}

impl Default for RankEstimator<NeetCurve> {
    fn default() -> Self {
        Self { curve: NeetCurve }
    }
}

impl<C> RankEstimator<C>
where
    C: RankCurve,
{
    pub fn new(curve: C) -> Self {
        Self { curve }
    }

    pub fn estimate(&self, scores: &ScoreSet, category: Category) -> RankEstimate {
        let total = scores.total();

        // Stage A: category-neutral rank from the curve
        let base_rank = self.curve.base_rank(total);

        // Stage B: category adjustment, then the range around it
        let expected_rank = round_rank(f64::from(base_rank) * category.multiplier());
        let min_rank = round_rank(f64::from(expected_rank) * MIN_RANK_FACTOR);
        let max_rank = round_rank(f64::from(expected_rank) * MAX_RANK_FACTOR);

        let percentile = self.curve.percentile(total);

        debug_assert!(min_rank <= expected_rank && expected_rank <= max_rank);

        tracing::debug!(
            total,
            category = category.as_str(),
            base_rank,
            expected_rank,
            percentile,
            "rank estimated"
        );

        RankEstimate {
            expected_rank,
            min_rank,
            max_rank,
            percentile,
        }
    }

    /// Approximate total score a candidate of `category` needs for `rank`.
    pub fn score_for_rank(&self, rank: u32, category: Category) -> Result<u32, ValidationError> {
        if rank == 0 {
            return Err(ValidationError::NonPositiveRank);
        }

        let base_rank = f64::from(rank) / category.multiplier();
        let score = self.curve.score_for_base_rank(base_rank).round();

        Ok((score.max(0.0) as u32).min(MAX_TOTAL))
    }
}

/// Estimate rank with the default NEET curve.
pub fn estimate_rank(scores: &ScoreSet, category: Category) -> RankEstimate {
    RankEstimator::default().estimate(scores, category)
}

/// Reverse lookup with the default NEET curve.
pub fn estimate_score_from_rank(rank: u32, category: Category) -> Result<u32, ValidationError> {
    RankEstimator::default().score_for_rank(rank, category)
}

/// Half-up rounding onto the rank scale. Ranks are never below 1.
fn round_rank(value: f64) -> u32 {
    (value.round() as u32).max(1)
}

use crate::scores::MAX_TOTAL;

/// Maps a total score onto the rank and percentile scales.
pub trait RankCurve {
    /// Unadjusted rank for a total score in `0..=720`.
    fn base_rank(&self, total: u32) -> u32;

    /// Estimated percentile for a total score, in `0.0..=99.9`.
    fn percentile(&self, total: u32) -> f64;

    /// Approximate total score for a category-neutral rank.
    fn score_for_base_rank(&self, base_rank: f64) -> f64;
}

/// One linear segment of the score-to-rank curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankBand {
    /// Lowest total score that falls in this band.
    pub score_floor: u32,
    /// Score the slope is measured down from.
    pub score_top: u32,
    pub rank_floor: u32,
    /// Rank increase per point below `score_top`.
    pub slope: u32,
}

impl RankBand {
    fn rank_at(&self, total: u32) -> u32 {
        self.rank_floor + self.slope * (self.score_top - total)
    }
}

/// Bands ordered from the highest score floor down. The last band catches
/// everything below 300.
pub const NEET_RANK_BANDS: [RankBand; 9] = [
    RankBand { score_floor: 650, score_top: 720, rank_floor: 500, slope: 10 },
    RankBand { score_floor: 600, score_top: 650, rank_floor: 1_000, slope: 50 },
    RankBand { score_floor: 550, score_top: 600, rank_floor: 5_000, slope: 100 },
    RankBand { score_floor: 500, score_top: 550, rank_floor: 15_000, slope: 200 },
    RankBand { score_floor: 450, score_top: 500, rank_floor: 50_000, slope: 400 },
    RankBand { score_floor: 400, score_top: 450, rank_floor: 100_000, slope: 800 },
    RankBand { score_floor: 350, score_top: 400, rank_floor: 200_000, slope: 1_000 },
    RankBand { score_floor: 300, score_top: 350, rank_floor: 400_000, slope: 1_500 },
    RankBand { score_floor: 0, score_top: 300, rank_floor: 600_000, slope: 2_000 },
];

/// `(raw percentage floor, percentile floor, ceiling)`; slope is 1.5 in
/// every band.
const PERCENTILE_BANDS: [(f64, f64, f64); 5] = [
    (90.0, 85.0, 99.9),
    (80.0, 70.0, 95.0),
    (70.0, 55.0, 85.0),
    (60.0, 40.0, 75.0),
    (50.0, 25.0, 65.0),
];

const PERCENTILE_SLOPE: f64 = 1.5;
const PERCENTILE_CEILING: f64 = 99.9;

/// `(adjusted rank ceiling, score at ceiling offset, rank per point)`.
const REVERSE_BANDS: [(f64, f64, f64); 5] = [
    (1_000.0, 650.0, 10.0),
    (5_000.0, 600.0, 50.0),
    (15_000.0, 550.0, 100.0),
    (50_000.0, 500.0, 200.0),
    (100_000.0, 450.0, 400.0),
];

/// Frozen NEET score-to-rank curve.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeetCurve;

impl RankCurve for NeetCurve {
    fn base_rank(&self, total: u32) -> u32 {
        let total = total.min(MAX_TOTAL);
        let band = NEET_RANK_BANDS
            .iter()
            .find(|band| total >= band.score_floor)
            .unwrap_or(&NEET_RANK_BANDS[NEET_RANK_BANDS.len() - 1]);
        band.rank_at(total)
    }

    fn percentile(&self, total: u32) -> f64 {
        let raw = (f64::from(total) / f64::from(MAX_TOTAL)) * 100.0;

        let percentile = PERCENTILE_BANDS
            .iter()
            .find(|(floor, _, _)| raw >= *floor)
            .map(|(floor, base, ceiling)| (base + (raw - floor) * PERCENTILE_SLOPE).min(*ceiling))
            .unwrap_or_else(|| (raw * 0.5).max(1.0));

        percentile.clamp(0.0, PERCENTILE_CEILING)
    }

    fn score_for_base_rank(&self, base_rank: f64) -> f64 {
        REVERSE_BANDS
            .iter()
            .find(|(ceiling, _, _)| base_rank <= *ceiling)
            .map(|(ceiling, score, per_point)| score + (ceiling - base_rank) / per_point)
            .unwrap_or_else(|| (400.0 - (base_rank - 100_000.0) / 1_000.0).max(300.0))
    }
}

use serde::{Deserialize, Serialize};

/// `(cutoff factor in tenths, chance)`: a rank at or below
/// `cutoff * tenths / 10` earns `chance`. Upper bounds are inclusive and
/// checked in order.
pub const CHANCE_BANDS: [(u64, u8); 9] = [
    (7, 95),
    (8, 85),
    (9, 75),
    (10, 65),
    (11, 50),
    (12, 35),
    (13, 25),
    (15, 15),
    (20, 5),
];

/// Banded admission chance in percent. Zero means out of reach.
pub fn admission_chance(rank: u32, cutoff: u32) -> u8 {
    // Compare in integer tenths so boundaries such as 63 / 90 stay exact
    let scaled_rank = u64::from(rank) * 10;
    let cutoff = u64::from(cutoff);

    CHANCE_BANDS
        .iter()
        .find(|(tenths, _)| scaled_rank <= cutoff * tenths)
        .map(|(_, chance)| *chance)
        .unwrap_or(0)
}

/// Coarse grouping of admission chances for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChanceBand {
    /// 70 and above.
    High,
    /// 40 to 69.
    Good,
    /// 20 to 39.
    Moderate,
    /// Below 20.
    Low,
}

impl ChanceBand {
    pub fn of(chance: u8) -> Self {
        match chance {
            70.. => ChanceBand::High,
            40..=69 => ChanceBand::Good,
            20..=39 => ChanceBand::Moderate,
            _ => ChanceBand::Low,
        }
    }
}

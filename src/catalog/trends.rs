use serde::{Deserialize, Deserializer, Serialize};

/// Closing cutoff for one admission year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyCutoff {
    #[serde(deserialize_with = "year_from_number_or_string")]
    pub year: i32,
    pub cutoff: u32,
    /// Score that closed at `cutoff`.
    pub score: u32,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum YearLabel {
    Number(i32),
    Text(String),
}

/// Snapshots carry years both as numbers and as strings like `"2023"`.
fn year_from_number_or_string<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    match YearLabel::deserialize(deserializer)? {
        YearLabel::Number(year) => Ok(year),
        YearLabel::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid year: {text}"))),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    /// Direction of the last two years, oldest first. `Stable` with fewer
    /// than two years.
    pub fn from_years(years: &[YearlyCutoff]) -> Self {
        match years {
            [.., previous, latest] if latest.cutoff > previous.cutoff => Trend::Up,
            [.., previous, latest] if latest.cutoff < previous.cutoff => Trend::Down,
            _ => Trend::Stable,
        }
    }
}

/// Cutoff history for one institution, years in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutoffHistory {
    pub name: String,
    pub location: String,
    pub years: Vec<YearlyCutoff>,
    pub trend: Trend,
    #[serde(default, alias = "predictedNext", alias = "predicted2024")]
    pub predicted_next: Option<u32>,
}

impl CutoffHistory {
    /// Latest minus previous cutoff.
    pub fn last_change(&self) -> Option<i64> {
        match self.years.as_slice() {
            [.., previous, latest] => Some(i64::from(latest.cutoff) - i64::from(previous.cutoff)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendAnalysis {
    pub total: usize,
    pub increasing: usize,
    pub decreasing: usize,
    pub stable: usize,
    /// Rounded mean of the last change across upward entries.
    pub average_increase: i64,
}

pub fn analyze_trends(histories: &[CutoffHistory]) -> TrendAnalysis {
    let count = |trend: Trend| histories.iter().filter(|h| h.trend == trend).count();

    // Upward entries with a single year carry no change to average
    let increases: Vec<i64> = histories
        .iter()
        .filter(|h| h.trend == Trend::Up)
        .filter_map(CutoffHistory::last_change)
        .collect();

    let average_increase = if increases.is_empty() {
        0
    } else {
        let sum: i64 = increases.iter().sum();
        // Halves round toward positive infinity
        (sum as f64 / increases.len() as f64 + 0.5).floor() as i64
    };

    TrendAnalysis {
        total: histories.len(),
        increasing: count(Trend::Up),
        decreasing: count(Trend::Down),
        stable: count(Trend::Stable),
        average_increase,
    }
}

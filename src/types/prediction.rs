use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::Institution;
use crate::types::category::Category;
use crate::types::identifiers::CatalogVersion;

/// Estimated rank range and percentile for one score set.
///
/// `min_rank` is the optimistic end of the range, `max_rank` the pessimistic
/// one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankEstimate {
    pub expected_rank: u32,
    pub min_rank: u32,
    pub max_rank: u32,
    pub percentile: f64,
}

/// One institution the candidate has a non-zero chance at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub institution: Institution,
    /// Cutoff for the queried category.
    pub cutoff_rank: u32,
    /// Banded chance in percent, 5 to 95.
    pub admission_chance: u8,
}

/// Bookkeeping describing how a match result was produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchMetadata {
    pub engine_version: String,
    pub catalog_version: CatalogVersion,

    pub rank: u32,
    pub category: Category,
    pub state_filter: String,
    pub quota_filter: String,

    pub institutions_considered: usize,
    pub excluded_by_filter: usize,
    pub excluded_missing_cutoff: usize,
    pub excluded_out_of_reach: usize,
    pub recommended: usize,
}

/// The final result of a catalog match, ordered by ascending cutoff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub recommendations: Vec<Recommendation>,
    pub matching: MatchMetadata,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Subject {
    Physics,
    Chemistry,
    Biology,
}

impl Subject {
    /// Highest obtainable mark for the subject.
    pub fn max_score(self) -> u32 {
        match self {
            Subject::Physics | Subject::Chemistry => 180,
            Subject::Biology => 360,
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Subject::Physics => "physics",
            Subject::Chemistry => "chemistry",
            Subject::Biology => "biology",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{subject} score {value} is outside 0..={max}")]
    ScoreOutOfRange {
        subject: Subject,
        value: i64,
        max: u32,
    },

    #[error("Rank must be at least 1")]
    NonPositiveRank,

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown quota: {0}")]
    UnknownQuota(String),

    #[error("Unknown institution type: {0}")]
    UnknownInstitutionType(String),

    #[error("Unknown recommendation order: {0}")]
    UnknownOrder(String),
}

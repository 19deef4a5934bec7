use serde::Serialize;

use crate::config::ScorePolicy;
use crate::types::prediction::{Subject, ValidationError};

/// Highest obtainable total across all three subjects.
pub const MAX_TOTAL: u32 = 720;

/// Subject marks for one candidate.
///
/// Fields are private: a `ScoreSet` always holds in-bound marks, so the
/// total never leaves `0..=720`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ScoreSet {
    physics: u32,
    chemistry: u32,
    biology: u32,
}

impl ScoreSet {
    /// Build a score set, rejecting any mark outside its subject bound.
    pub fn new(physics: i64, chemistry: i64, biology: i64) -> Result<Self, ValidationError> {
        Ok(ScoreSet {
            physics: checked(Subject::Physics, physics)?,
            chemistry: checked(Subject::Chemistry, chemistry)?,
            biology: checked(Subject::Biology, biology)?,
        })
    }

    /// Build a score set, pulling every mark into its subject bound.
    pub fn clamped(physics: i64, chemistry: i64, biology: i64) -> Self {
        ScoreSet {
            physics: clamp(Subject::Physics, physics),
            chemistry: clamp(Subject::Chemistry, chemistry),
            biology: clamp(Subject::Biology, biology),
        }
    }

    pub fn with_policy(
        physics: i64,
        chemistry: i64,
        biology: i64,
        policy: ScorePolicy,
    ) -> Result<Self, ValidationError> {
        match policy {
            ScorePolicy::Reject => Self::new(physics, chemistry, biology),
            ScorePolicy::Clamp => Ok(Self::clamped(physics, chemistry, biology)),
        }
    }

    pub fn physics(&self) -> u32 {
        self.physics
    }

    pub fn chemistry(&self) -> u32 {
        self.chemistry
    }

    pub fn biology(&self) -> u32 {
        self.biology
    }

    pub fn total(&self) -> u32 {
        let total = self.physics + self.chemistry + self.biology;
        debug_assert!(total <= MAX_TOTAL, "total {total} exceeds {MAX_TOTAL}");
        total
    }
}

fn checked(subject: Subject, value: i64) -> Result<u32, ValidationError> {
    let max = subject.max_score();
    if value < 0 || value > i64::from(max) {
        return Err(ValidationError::ScoreOutOfRange {
            subject,
            value,
            max,
        });
    }
    Ok(value as u32)
}

fn clamp(subject: Subject, value: i64) -> u32 {
    value.clamp(0, i64::from(subject.max_score())) as u32
}

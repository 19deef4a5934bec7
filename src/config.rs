// Key point:
// Serializable
// Comparable
// Explicit defaults

use serde::{Deserialize, Serialize};

/// What to do with a subject score outside its bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScorePolicy {
    /// Fail with `ValidationError::ScoreOutOfRange`.
    Reject,
    /// Pull the score back into `0..=max`.
    Clamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub version: String,
    pub score_policy: ScorePolicy,
    pub top_institutions_limit: usize,
}

impl EngineConfig {
    pub fn v0() -> Self {
        Self {
            version: "1".into(),
            score_policy: ScorePolicy::Reject,
            top_institutions_limit: 10,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::v0()
    }
}

/// Tracing controls for binaries embedding the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    pub log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

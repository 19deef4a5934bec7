pub mod score_set;

pub use crate::types::prediction::{Subject, ValidationError};
pub use score_set::{ScoreSet, MAX_TOTAL};

pub mod category;
pub mod identifiers;
pub mod prediction;

pub use category::{Category, InstitutionType, Quota};
pub use identifiers::CatalogVersion;
pub use prediction::{
    MatchMetadata, MatchResult, RankEstimate, Recommendation, Subject, ValidationError,
};

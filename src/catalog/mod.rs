pub mod catalog;
pub mod institution;
pub mod trends;

pub use catalog::{Catalog, CatalogError};
pub use institution::{CutoffRanks, Institution};
pub use trends::{analyze_trends, CutoffHistory, Trend, TrendAnalysis, YearlyCutoff};

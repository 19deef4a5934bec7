use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::types::{Recommendation, ValidationError};

/// Presentation orders for a recommendation list.
///
/// `CutoffRank` is the canonical order produced by matching. The others
/// fall back to cutoff then name so every order is total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecommendationOrder {
    #[default]
    CutoffRank,
    AdmissionChance,
    Name,
    Location,
    Fees,
}

pub fn sort_recommendations(recommendations: &mut [Recommendation], order: RecommendationOrder) {
    recommendations.sort_by(|a, b| {
        let primary = match order {
            RecommendationOrder::CutoffRank => Ordering::Equal,
            // Descending chance
            RecommendationOrder::AdmissionChance => b.admission_chance.cmp(&a.admission_chance),
            RecommendationOrder::Name => a.institution.name.cmp(&b.institution.name),
            RecommendationOrder::Location => a.institution.location.cmp(&b.institution.location),
            RecommendationOrder::Fees => compare_fees(a, b),
        };
        primary.then_with(|| canonical(a, b))
    });
}

/// Ascending cutoff, then ascending name.
pub(crate) fn canonical(a: &Recommendation, b: &Recommendation) -> Ordering {
    a.cutoff_rank
        .cmp(&b.cutoff_rank)
        .then_with(|| a.institution.name.cmp(&b.institution.name))
}

// Unparseable fees sort last
fn compare_fees(a: &Recommendation, b: &Recommendation) -> Ordering {
    match (a.institution.fee_amount(), b.institution.fee_amount()) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl FromStr for RecommendationOrder {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cutoff" | "cutoff_rank" | "rank" => Ok(RecommendationOrder::CutoffRank),
            "chance" | "admission_chance" => Ok(RecommendationOrder::AdmissionChance),
            "name" => Ok(RecommendationOrder::Name),
            "location" | "state" => Ok(RecommendationOrder::Location),
            "fees" => Ok(RecommendationOrder::Fees),
            _ => Err(ValidationError::UnknownOrder(s.to_string())),
        }
    }
}

impl fmt::Display for RecommendationOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RecommendationOrder::CutoffRank => "cutoff",
            RecommendationOrder::AdmissionChance => "chance",
            RecommendationOrder::Name => "name",
            RecommendationOrder::Location => "location",
            RecommendationOrder::Fees => "fees",
        };
        f.write_str(label)
    }
}

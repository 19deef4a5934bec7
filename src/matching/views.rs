use std::collections::BTreeMap;

use serde::Serialize;

use crate::matching::chance::ChanceBand;
use crate::types::{InstitutionType, Quota, Recommendation};

/// Groupings over one recommendation list. Every view keeps the order of
/// the list it was built from.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecommendationViews {
    pub high: Vec<Recommendation>,
    pub good: Vec<Recommendation>,
    pub moderate: Vec<Recommendation>,

    pub government: Vec<Recommendation>,
    pub private: Vec<Recommendation>,
    pub deemed: Vec<Recommendation>,

    pub by_quota: BTreeMap<Quota, Vec<Recommendation>>,

    pub home_state: Vec<Recommendation>,
}

impl RecommendationViews {
    pub fn build(recommendations: &[Recommendation], home_state: Option<&str>) -> Self {
        let mut views = RecommendationViews::default();

        for rec in recommendations {
            match ChanceBand::of(rec.admission_chance) {
                ChanceBand::High => views.high.push(rec.clone()),
                ChanceBand::Good => views.good.push(rec.clone()),
                ChanceBand::Moderate => views.moderate.push(rec.clone()),
                ChanceBand::Low => {}
            }

            match rec.institution.kind {
                InstitutionType::Government => views.government.push(rec.clone()),
                InstitutionType::Private => views.private.push(rec.clone()),
                InstitutionType::DeemedUniversity => views.deemed.push(rec.clone()),
            }

            views
                .by_quota
                .entry(rec.institution.quota)
                .or_default()
                .push(rec.clone());

            if home_state.is_some_and(|state| rec.institution.location == state) {
                views.home_state.push(rec.clone());
            }
        }

        views
    }

    /// Recommendations in `band`, in list order. `Low` yields nothing.
    pub fn band(&self, band: ChanceBand) -> &[Recommendation] {
        match band {
            ChanceBand::High => &self.high,
            ChanceBand::Good => &self.good,
            ChanceBand::Moderate => &self.moderate,
            ChanceBand::Low => &[],
        }
    }
}

pub mod chance;
pub mod filters;
pub mod lookup;
pub mod ordering;
pub mod views;

use crate::catalog::{Catalog, Institution};
use crate::config::EngineConfig;
use crate::types::{Category, MatchMetadata, MatchResult, Recommendation, ValidationError};
pub use chance::{admission_chance, ChanceBand, CHANCE_BANDS};
pub use filters::{QuotaFilter, StateFilter};
pub use lookup::{institutions_by_cutoff_range, top_institutions_by_state};
pub use ordering::{sort_recommendations, RecommendationOrder};
pub use views::RecommendationViews;

/// A candidate's rank plus the preferences to match it against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchQuery {
	pub rank: u32,
	pub category: Category,
	pub state: StateFilter,
	pub quota: QuotaFilter,
}

impl MatchQuery {
	pub fn new(rank: u32, category: Category) -> Result<Self, ValidationError> {
		if rank == 0 {
			return Err(ValidationError::NonPositiveRank);
		}
		Ok(Self {
			rank,
			category,
			state: StateFilter::All,
			quota: QuotaFilter::All,
		})
	}

	pub fn with_state(mut self, state: StateFilter) -> Self {
		self.state = state;
		self
	}

	pub fn with_quota(mut self, quota: QuotaFilter) -> Self {
		self.quota = quota;
		self
	}
}

#[derive(Debug, Default)]
struct MatchTally {
	excluded_by_filter: usize,
	excluded_missing_cutoff: usize,
	excluded_out_of_reach: usize,
}

pub struct InstitutionMatcher {
	config: EngineConfig,
}

impl Default for InstitutionMatcher {
	fn default() -> Self {
		Self {
			config: EngineConfig::v0(),
		}
	}
}

impl InstitutionMatcher {
	pub fn new(config: EngineConfig) -> Self {
		Self { config }
	}

	pub fn config(&self) -> &EngineConfig {
		&self.config
	}

	pub fn match_catalog(&self, catalog: &Catalog, query: &MatchQuery) -> MatchResult {
		let (recommendations, tally) = evaluate(
			query.rank,
			query.category,
			&query.state,
			&query.quota,
			catalog.institutions(),
		);

		let metadata = MatchMetadata {
			engine_version: self.config.version.clone(),
			catalog_version: catalog.version().clone(),
			rank: query.rank,
			category: query.category,
			state_filter: query.state.to_string(),
			quota_filter: query.quota.to_string(),
			institutions_considered: catalog.len(),
			excluded_by_filter: tally.excluded_by_filter,
			excluded_missing_cutoff: tally.excluded_missing_cutoff,
			excluded_out_of_reach: tally.excluded_out_of_reach,
			recommended: recommendations.len(),
		};

		MatchResult {
			recommendations,
			matching: metadata,
		}
	}

	/// Most selective institutions in `state`, capped at the configured limit.
	pub fn top_institutions<'a>(
		&self,
		state: &str,
		category: Category,
		catalog: &'a Catalog,
	) -> Vec<&'a Institution> {
		top_institutions_by_state(
			state,
			category,
			self.config.top_institutions_limit,
			catalog.institutions(),
		)
	}
}

/// Recommendations for `rank`, ordered by ascending cutoff then name.
///
/// Institutions outside the filters, without a cutoff for `category`, or
/// beyond twice their cutoff are left out. An empty catalog yields an
/// empty list.
pub fn match_institutions(
	rank: u32,
	category: Category,
	state: &StateFilter,
	quota: &QuotaFilter,
	institutions: &[Institution],
) -> Vec<Recommendation> {
	evaluate(rank, category, state, quota, institutions).0
}

fn evaluate(
	rank: u32,
	category: Category,
	state: &StateFilter,
	quota: &QuotaFilter,
	institutions: &[Institution],
) -> (Vec<Recommendation>, MatchTally) {
	let mut tally = MatchTally::default();
	let mut recommendations = Vec::new();

	// 1. Filtering and banding phase
	for institution in institutions {
		if !state.matches(institution) || !quota.matches(institution) {
			tally.excluded_by_filter += 1;
			continue;
		}

		let Some(cutoff_rank) = institution.cutoff_for(category) else {
			tracing::trace!(institution = %institution.name, %category, "no cutoff published");
			tally.excluded_missing_cutoff += 1;
			continue;
		};

		let chance = admission_chance(rank, cutoff_rank);
		if chance == 0 {
			tally.excluded_out_of_reach += 1;
			continue;
		}

		recommendations.push(Recommendation {
			institution: institution.clone(),
			cutoff_rank,
			admission_chance: chance,
		});
	}

	// 2. Ordering phase
	// Sort by (cutoff asc, name asc); stable, so full ties keep catalog order
	recommendations.sort_by(ordering::canonical);

	debug_assert!(recommendations
		.windows(2)
		.all(|w| ordering::canonical(&w[0], &w[1]).is_le()));

	tracing::debug!(
		rank,
		%category,
		state = %state,
		quota = %quota,
		considered = institutions.len(),
		recommended = recommendations.len(),
		"institutions matched"
	);

	(recommendations, tally)
}

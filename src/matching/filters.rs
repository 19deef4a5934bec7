use std::fmt;
use std::str::FromStr;

use crate::catalog::Institution;
use crate::types::{Quota, ValidationError};

const ALL_LABEL: &str = "All";

// "All India" names a quota, so it only means "every state" for states.
fn is_all_states(label: &str) -> bool {
    matches!(
        label.trim().to_ascii_lowercase().as_str(),
        "" | "all" | "all states" | "all india"
    )
}

fn is_all_quotas(label: &str) -> bool {
    matches!(
        label.trim().to_ascii_lowercase().as_str(),
        "" | "all" | "all quotas"
    )
}

/// Restricts matching to one state, or lets every state through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StateFilter {
    #[default]
    All,
    Only(String),
}

impl StateFilter {
    pub fn matches(&self, institution: &Institution) -> bool {
        match self {
            StateFilter::All => true,
            StateFilter::Only(state) => institution.location == *state,
        }
    }
}

impl FromStr for StateFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_all_states(s) {
            Ok(StateFilter::All)
        } else {
            Ok(StateFilter::Only(s.trim().to_string()))
        }
    }
}

impl fmt::Display for StateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateFilter::All => f.write_str(ALL_LABEL),
            StateFilter::Only(state) => f.write_str(state),
        }
    }
}

/// Restricts matching to one quota, or lets every quota through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuotaFilter {
    #[default]
    All,
    Only(Quota),
}

impl QuotaFilter {
    pub fn matches(&self, institution: &Institution) -> bool {
        match self {
            QuotaFilter::All => true,
            QuotaFilter::Only(quota) => institution.quota == *quota,
        }
    }
}

impl FromStr for QuotaFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_all_quotas(s) {
            Ok(QuotaFilter::All)
        } else {
            s.parse().map(QuotaFilter::Only)
        }
    }
}

impl fmt::Display for QuotaFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuotaFilter::All => f.write_str(ALL_LABEL),
            QuotaFilter::Only(quota) => write!(f, "{quota}"),
        }
    }
}

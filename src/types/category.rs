use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::prediction::ValidationError;

/// Reservation category of a candidate.
///
/// Declaration order is the key order of cutoff maps and of serialized
/// output, so it must not be rearranged.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    General,
    OBC,
    SC,
    ST,
    EWS,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::General,
        Category::OBC,
        Category::SC,
        Category::ST,
        Category::EWS,
    ];

    /// Rank adjustment factor applied to the base rank.
    pub fn multiplier(self) -> f64 {
        match self {
            Category::General => 1.0,
            Category::EWS => 0.95,
            Category::OBC => 0.85,
            Category::SC => 0.7,
            Category::ST => 0.65,
        }
    }

    /// Lenient parse used at loosely typed boundaries.
    ///
    /// Unrecognized labels fall back to `General`, which carries the
    /// neutral 1.0 multiplier.
    pub fn from_label_or_general(label: &str) -> Self {
        match label.parse() {
            Ok(category) => category,
            Err(_) => {
                tracing::warn!(label, "unrecognized category, falling back to General");
                Category::General
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::General => "General",
            Category::OBC => "OBC",
            Category::SC => "SC",
            Category::ST => "ST",
            Category::EWS => "EWS",
        }
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "general" | "gen" | "ur" | "unreserved" => Ok(Category::General),
            "obc" => Ok(Category::OBC),
            "sc" => Ok(Category::SC),
            "st" => Ok(Category::ST),
            "ews" => Ok(Category::EWS),
            _ => Err(ValidationError::UnknownCategory(s.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Admission channel a seat is allocated under.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
#[allow(clippy::upper_case_acronyms)]
pub enum Quota {
    #[default]
    AllIndia,
    State,
    Management,
    NRI,
}

impl Quota {
    pub const ALL: [Quota; 4] = [Quota::AllIndia, Quota::State, Quota::Management, Quota::NRI];

    pub fn as_str(self) -> &'static str {
        match self {
            Quota::AllIndia => "AllIndia",
            Quota::State => "State",
            Quota::Management => "Management",
            Quota::NRI => "NRI",
        }
    }
}

impl FromStr for Quota {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Providers write "All India Quota", "all-india", "AIQ" and so on.
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        let key = normalized.strip_suffix("quota").unwrap_or(&normalized);

        match key {
            "allindia" | "aiq" => Ok(Quota::AllIndia),
            "state" => Ok(Quota::State),
            "management" => Ok(Quota::Management),
            "nri" => Ok(Quota::NRI),
            _ => Err(ValidationError::UnknownQuota(s.to_string())),
        }
    }
}

impl TryFrom<String> for Quota {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Quota> for String {
    fn from(value: Quota) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Quota {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ownership class of an institution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum InstitutionType {
    Government,
    Private,
    DeemedUniversity,
}

impl InstitutionType {
    pub fn as_str(self) -> &'static str {
        match self {
            InstitutionType::Government => "Government",
            InstitutionType::Private => "Private",
            InstitutionType::DeemedUniversity => "DeemedUniversity",
        }
    }
}

impl FromStr for InstitutionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();

        match key.as_str() {
            "government" | "govt" => Ok(InstitutionType::Government),
            "private" => Ok(InstitutionType::Private),
            "deemeduniversity" | "deemed" => Ok(InstitutionType::DeemedUniversity),
            _ => Err(ValidationError::UnknownInstitutionType(s.to_string())),
        }
    }
}

impl TryFrom<String> for InstitutionType {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<InstitutionType> for String {
    fn from(value: InstitutionType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for InstitutionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

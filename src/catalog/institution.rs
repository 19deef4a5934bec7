use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::{Category, InstitutionType, Quota};

/// Published cutoff rank per category. Categories without data are absent.
pub type CutoffRanks = BTreeMap<Category, u32>;

/// One catalog entry, read-only reference data for matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Institution {
    pub name: String,
    /// State the institution is located in.
    pub location: String,
    #[serde(rename = "type")]
    pub kind: InstitutionType,
    #[serde(default)]
    pub quota: Quota,
    #[serde(alias = "cutoff_ranks", deserialize_with = "null_cutoffs_as_absent")]
    pub cutoff_ranks: CutoffRanks,
    #[serde(default)]
    pub fees: String,
    #[serde(default)]
    pub seats: u32,
}

impl Institution {
    /// Cutoff for `category`, if the institution publishes a usable one.
    ///
    /// A zero cutoff is treated the same as a missing entry.
    pub fn cutoff_for(&self, category: Category) -> Option<u32> {
        self.cutoff_ranks
            .get(&category)
            .copied()
            .filter(|cutoff| *cutoff > 0)
    }

    /// Numeric value of the fee string, digits only. `None` when the string
    /// holds no digits.
    pub fn fee_amount(&self) -> Option<u64> {
        let digits: String = self.fees.chars().filter(|c| c.is_ascii_digit()).collect();
        digits.parse().ok()
    }
}

/// Providers write `null` for categories they have no data for.
fn null_cutoffs_as_absent<'de, D>(deserializer: D) -> Result<CutoffRanks, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<Category, Option<u32>>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(category, cutoff)| cutoff.map(|cutoff| (category, cutoff)))
        .collect())
}

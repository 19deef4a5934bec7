use std::collections::BTreeSet;
use std::io::Read;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

use crate::catalog::institution::Institution;
use crate::types::CatalogVersion;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Duplicate institution: {0}")]
    DuplicateInstitution(String),
}

/// Immutable snapshot of the institution catalog.
///
/// The engine never fetches or refreshes a catalog; callers build one from
/// whatever their provider returned and pass it in.
#[derive(Debug, Clone)]
pub struct Catalog {
    version: CatalogVersion,
    captured_at: Option<DateTime<Utc>>, // informational only
    institutions: Vec<Institution>,
}

/// Provider payload with a capture timestamp. A bare array of
/// institutions is accepted as well.
#[derive(Deserialize)]
struct CatalogEnvelope {
    #[serde(default, alias = "capturedAt")]
    captured_at: Option<DateTime<Utc>>,
    institutions: Vec<Institution>,
}

impl Catalog {
    pub fn new(institutions: Vec<Institution>) -> Result<Self, CatalogError> {
        // Names identify institutions across derived views
        let mut seen = BTreeSet::new();
        for institution in &institutions {
            if !seen.insert(institution.name.as_str()) {
                return Err(CatalogError::DuplicateInstitution(institution.name.clone()));
            }
        }

        let version = compute_version(&institutions)?;

        tracing::debug!(
            institutions = institutions.len(),
            version = version.as_str(),
            "catalog snapshot built"
        );

        Ok(Catalog {
            version,
            captured_at: None,
            institutions,
        })
    }

    pub fn with_captured_at(mut self, captured_at: DateTime<Utc>) -> Self {
        self.captured_at = Some(captured_at);
        self
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        // Pick the shape from the first token so parse errors keep their
        // line and column
        if json.trim_start().starts_with('[') {
            let institutions: Vec<Institution> = serde_json::from_str(json)?;
            return Self::new(institutions);
        }

        let envelope: CatalogEnvelope = serde_json::from_str(json)?;
        let mut catalog = Self::new(envelope.institutions)?;
        catalog.captured_at = envelope.captured_at;
        Ok(catalog)
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, CatalogError> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json(&json)
    }

    pub fn version(&self) -> &CatalogVersion {
        &self.version
    }

    pub fn captured_at(&self) -> Option<DateTime<Utc>> {
        self.captured_at
    }

    pub fn institutions(&self) -> &[Institution] {
        &self.institutions
    }

    pub fn len(&self) -> usize {
        self.institutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.institutions.is_empty()
    }
}

/// Hash the name-sorted institutions so provider ordering does not change
/// the version.
fn compute_version(institutions: &[Institution]) -> Result<CatalogVersion, CatalogError> {
    let mut sorted: Vec<&Institution> = institutions.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    let bytes = serde_json::to_vec(&sorted)?;
    Ok(CatalogVersion::from_content(&bytes))
}

//! Recommendation results and the errors a recommendation can raise.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{CatalogEntity, CatalogUnavailable, PreferenceError};

/// Where a result's entities came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RecommendationSource {
    /// Ranked from the live catalog.
    #[default]
    Catalog,
    /// Synthesised by an explicit house fallback policy because the catalog
    /// was unavailable. Never a real match.
    HouseFallback,
}

/// The primary pick plus diverse alternates.
///
/// `adjacent` never contains the primary's id and never repeats an id.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RecommendationResult {
    /// Best match.
    pub primary: CatalogEntity,
    /// Diverse alternates in selection order.
    pub adjacent: Vec<CatalogEntity>,
    /// Displayed confidence in `0..=100`.
    pub match_score: u8,
    /// Fuzzy fallback notes for the primary.
    pub fuzzy_labels: Vec<String>,
    /// Whether the primary matched any dimension only through a fallback.
    pub used_fallback: bool,
    /// Provenance of the result.
    #[cfg_attr(feature = "serde", serde(default))]
    pub source: RecommendationSource,
}

impl RecommendationResult {
    /// Iterate the identifiers of the primary followed by the adjacents.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary.id.as_str())
            .chain(self.adjacent.iter().map(|entity| entity.id.as_str()))
    }

    /// Report whether the result came from the live catalog.
    #[must_use]
    pub fn is_from_catalog(&self) -> bool {
        self.source == RecommendationSource::Catalog
    }
}

/// Errors returned by recommendation entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecommendError {
    /// The catalog collaborator supplied no data.
    #[error(transparent)]
    CatalogUnavailable(#[from] CatalogUnavailable),
    /// A raw quiz answer was outside its domain.
    #[error(transparent)]
    InvalidPreference(#[from] PreferenceError),
}

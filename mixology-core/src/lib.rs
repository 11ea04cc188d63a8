//! Core domain types for the Mixology recommendation engine.
//!
//! Catalog entities carry tags derived once at load time, quiz answers are
//! parsed into strongly typed enums at the boundary, and the [`Scorer`] and
//! [`CatalogSource`] traits mark the seams between the catalog, the scoring
//! rules and the recommender.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
pub mod entity;
pub mod preference;
pub mod recommendation;
pub mod scorer;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use catalog::{Catalog, CatalogError, CatalogSource, CatalogUnavailable};
pub use entity::{BalanceProfile, BuildMethod, CatalogEntity, CatalogEntityBuilder, TagSet};
pub use preference::{
    CitrusVsStone, ClassicVsExperimental, Dimension, LightVsBoozy, Mood, PreferenceError,
    PreferenceVector, SweetVsBitter,
};
pub use recommendation::{RecommendError, RecommendationResult, RecommendationSource};
pub use scorer::{MAX_SCORE, ScoredCandidate, Scorer};

//! Facade crate for the Mixology recommendation engine.
//!
//! This crate re-exports the core domain types, the quiz scorer and the
//! recommender, and exposes the JSON catalog loader behind the
//! `catalog-json` feature.
//!
//! ```
//! use std::sync::Arc;
//!
//! use mixology_engine::{Catalog, PreferenceVector, QuizScorer, Recommender, SessionId};
//!
//! let catalog = Arc::new(Catalog::empty());
//! let recommender = Recommender::new(catalog, QuizScorer::new());
//! let outcome = recommender.recommend(&SessionId::new("doc"), &PreferenceVector::new(), None);
//! assert!(outcome.is_err());
//! ```

#![forbid(unsafe_code)]

pub use mixology_core::{
    BuildMethod, Catalog, CatalogEntity, CatalogSource, CatalogUnavailable, PreferenceError,
    PreferenceVector, RecommendError, RecommendationResult, RecommendationSource, ScoredCandidate,
    Scorer,
};
pub use mixology_recommender::{
    FallbackPolicy, PrimaryPick, RecencyTracker, Recommender, RecommenderConfig, SessionId,
};
pub use mixology_scorer::{QuizScorer, ScoringPolicy, rank};

#[cfg(feature = "catalog-json")]
pub use mixology_data::{CatalogLoadError, FileCatalog, load_catalog, parse_catalog};

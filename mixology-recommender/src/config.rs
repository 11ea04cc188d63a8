//! Recommender configuration.

use crate::recency::MAX_RECENT;
use crate::session::MAX_SESSIONS;

/// Default number of adjacent alternates.
pub const DEFAULT_MAX_ADJACENT: usize = 8;

/// Fewest candidates the recency filter may leave before it is bypassed.
pub const DEFAULT_MIN_CANDIDATES: usize = 10;

/// How the primary recommendation is chosen from the ranked list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrimaryPick {
    /// Always the head of the ranking.
    #[default]
    Best,
    /// Uniformly from the top `k` ranked candidates using a seeded RNG.
    ///
    /// Ranking itself stays deterministic; only this step varies. A `k` of
    /// zero behaves like one.
    SeededTopK {
        /// Window size.
        k: usize,
        /// RNG seed.
        seed: u64,
    },
}

/// What to do when the catalog source supplies no data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Return [`CatalogUnavailable`](mixology_core::CatalogUnavailable).
    #[default]
    Surface,
    /// Return the house specials, labelled with
    /// [`RecommendationSource::HouseFallback`](mixology_core::RecommendationSource::HouseFallback).
    HouseSpecials,
}

/// Configuration for [`Recommender`](crate::Recommender).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommenderConfig {
    /// Adjacent count used when a call does not specify one.
    pub max_adjacent: usize,
    /// Minimum candidates left after recency filtering.
    pub min_candidates: usize,
    /// Identifiers remembered per session.
    pub recency_capacity: usize,
    /// Sessions remembered before the least recently served is evicted.
    pub max_sessions: usize,
    /// Primary selection step.
    pub primary_pick: PrimaryPick,
    /// Behaviour when the catalog is unavailable.
    pub fallback: FallbackPolicy,
    /// Seed for `recommend_random`; `None` draws a fresh seed per call.
    pub surprise_seed: Option<u64>,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            max_adjacent: DEFAULT_MAX_ADJACENT,
            min_candidates: DEFAULT_MIN_CANDIDATES,
            recency_capacity: MAX_RECENT,
            max_sessions: MAX_SESSIONS,
            primary_pick: PrimaryPick::Best,
            fallback: FallbackPolicy::Surface,
            surprise_seed: None,
        }
    }
}

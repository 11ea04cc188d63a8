//! Score catalog entities against a user's quiz answers.
//!
//! The `Scorer` trait assigns a compatibility score to a
//! [`CatalogEntity`](crate::CatalogEntity) given a
//! [`PreferenceVector`](crate::PreferenceVector).

use crate::{CatalogEntity, PreferenceVector};

/// Highest score a candidate can carry.
pub const MAX_SCORE: u8 = 100;

/// One entity's result from a scoring pass.
///
/// Ephemeral; produced per ranking pass and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredCandidate {
    /// The scored entity.
    pub entity: CatalogEntity,
    /// Compatibility score in `0..=100`.
    pub score: u8,
    /// Number of preference dimensions that contributed a bonus.
    pub matching_factors: u8,
    /// Human-readable notes for bonuses earned through fuzzy fallbacks.
    pub fuzzy_labels: Vec<String>,
    /// Whether any dimension matched only through a fuzzy fallback.
    pub used_fallback: bool,
}

impl ScoredCandidate {
    /// Wrap an entity with a score and no matching factors.
    #[must_use]
    pub const fn new(entity: CatalogEntity, score: u8) -> Self {
        Self {
            entity,
            score,
            matching_factors: 0,
            fuzzy_labels: Vec::new(),
            used_fallback: false,
        }
    }

    /// Borrow the entity identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.entity.id
    }
}

/// Calculate a compatibility score for a catalog entity.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so a recommender
/// can serve concurrent sessions. Scoring is infallible and must be total
/// over any well-formed entity, including the empty preference vector.
///
/// Implementations must keep `ScoredCandidate::score` within
/// `0..=MAX_SCORE`. Use [`Scorer::sanitise`] to apply the guard.
///
/// # Examples
///
/// ```rust
/// use mixology_core::{CatalogEntity, PreferenceVector, ScoredCandidate, Scorer};
///
/// struct FlatScorer;
///
/// impl Scorer for FlatScorer {
///     fn score(&self, entity: &CatalogEntity, _prefs: &PreferenceVector) -> ScoredCandidate {
///         ScoredCandidate::new(entity.clone(), Self::sanitise(250, 0))
///     }
/// }
///
/// let entity = CatalogEntity::builder("a", "Alpha").build();
/// let scored = FlatScorer.score(&entity, &PreferenceVector::default());
/// assert_eq!(scored.score, 100);
/// ```
pub trait Scorer: Send + Sync {
    /// Return a scored candidate for `entity` according to `prefs`.
    fn score(&self, entity: &CatalogEntity, prefs: &PreferenceVector) -> ScoredCandidate;

    /// Clamp a raw score into `floor..=MAX_SCORE`.
    ///
    /// A floor above [`MAX_SCORE`] is treated as [`MAX_SCORE`].
    #[must_use]
    fn sanitise(raw: i32, floor: u8) -> u8
    where
        Self: Sized,
    {
        let lower = i32::from(floor.min(MAX_SCORE));
        let clamped = raw.clamp(lower, i32::from(MAX_SCORE));
        u8::try_from(clamped).unwrap_or(MAX_SCORE)
    }
}

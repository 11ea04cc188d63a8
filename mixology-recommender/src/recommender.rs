//! The recommendation orchestrator.

use std::sync::Arc;

use log::{debug, warn};
use mixology_core::{
    Catalog, CatalogEntity, CatalogSource, CatalogUnavailable, PreferenceVector, RecommendError,
    RecommendationResult, RecommendationSource, ScoredCandidate, Scorer,
};
use mixology_scorer::rank;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::config::{FallbackPolicy, PrimaryPick, RecommenderConfig};
use crate::diversity::select_adjacent;
use crate::house::house_result;
use crate::session::{SessionId, SessionRecency};

/// Produces recommendations from a catalog source and a scorer.
///
/// The recommender is generic over the engine boundaries: where catalog
/// snapshots come from and how entities are scored. It keeps one recency
/// tracker per session so concurrent callers do not see each other's
/// history.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use mixology_core::test_support::trio_catalog;
/// use mixology_core::{ClassicVsExperimental, PreferenceVector, SweetVsBitter};
/// use mixology_recommender::{Recommender, SessionId};
/// use mixology_scorer::QuizScorer;
///
/// let recommender = Recommender::new(Arc::new(trio_catalog()), QuizScorer::default());
/// let prefs = PreferenceVector {
///     sweet_vs_bitter: Some(SweetVsBitter::Bitter),
///     classic_vs_experimental: Some(ClassicVsExperimental::Classic),
///     ..PreferenceVector::default()
/// };
/// let result = recommender.recommend(&SessionId::from("guest"), &prefs, Some(2))?;
/// assert_eq!(result.primary.id, "a-martini");
/// assert_eq!(result.ids().collect::<Vec<_>>(), ["a-martini", "b-daiquiri", "c-gimlet"]);
/// # Ok::<(), mixology_core::RecommendError>(())
/// ```
#[derive(Debug)]
pub struct Recommender<S, C>
where
    S: CatalogSource,
    C: Scorer,
{
    catalog: S,
    scorer: C,
    sessions: SessionRecency,
    config: RecommenderConfig,
}

impl<S, C> Recommender<S, C>
where
    S: CatalogSource,
    C: Scorer,
{
    /// Construct a recommender using default configuration.
    #[must_use]
    pub fn new(catalog: S, scorer: C) -> Self {
        Self::with_config(catalog, scorer, RecommenderConfig::default())
    }

    /// Construct a recommender with explicit configuration.
    #[must_use]
    pub fn with_config(catalog: S, scorer: C, config: RecommenderConfig) -> Self {
        Self {
            catalog,
            scorer,
            sessions: SessionRecency::with_limits(config.recency_capacity, config.max_sessions),
            config,
        }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    /// Per-session recency state.
    #[must_use]
    pub const fn sessions(&self) -> &SessionRecency {
        &self.sessions
    }

    /// Recommend a primary cocktail and up to `max_adjacent` alternates.
    ///
    /// `None` uses [`RecommenderConfig::max_adjacent`]. The primary and
    /// every adjacent are recorded against `session`.
    ///
    /// # Errors
    /// Returns [`RecommendError::CatalogUnavailable`] when the source fails
    /// or is empty, unless [`FallbackPolicy::HouseSpecials`] is configured.
    pub fn recommend(
        &self,
        session: &SessionId,
        prefs: &PreferenceVector,
        max_adjacent: Option<usize>,
    ) -> Result<RecommendationResult, RecommendError> {
        let limit = max_adjacent.unwrap_or(self.config.max_adjacent);
        let catalog = match self.snapshot() {
            Ok(catalog) => catalog,
            Err(unavailable) => return self.fallback(unavailable, limit),
        };

        let candidates =
            self.sessions
                .candidates(session, catalog.entities(), self.config.min_candidates);
        let mut ranked = rank(&candidates, prefs, &self.scorer);
        let Some(index) = self.primary_index(&ranked) else {
            return self.fallback(CatalogUnavailable::new("no candidates to rank"), limit);
        };
        let primary = ranked.remove(index);
        let adjacent = select_adjacent(&ranked, &primary.entity, limit);

        self.sessions.record(
            session,
            std::iter::once(&primary.entity).chain(adjacent.iter()),
        );
        debug!(
            "recommended {} ({}) with {} adjacents for session '{session}'",
            primary.id(),
            primary.score,
            adjacent.len()
        );

        let ScoredCandidate {
            entity,
            score,
            fuzzy_labels,
            used_fallback,
            ..
        } = primary;
        Ok(RecommendationResult {
            primary: entity,
            adjacent,
            match_score: score,
            fuzzy_labels,
            used_fallback,
            source: RecommendationSource::Catalog,
        })
    }

    /// Parse raw quiz answers and recommend.
    ///
    /// # Errors
    /// Returns [`RecommendError::InvalidPreference`] for an unknown
    /// dimension or out-of-domain value, otherwise as [`Self::recommend`].
    pub fn recommend_answers<'a, I>(
        &self,
        session: &SessionId,
        answers: I,
        max_adjacent: Option<usize>,
    ) -> Result<RecommendationResult, RecommendError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let prefs = PreferenceVector::from_answers(answers)?;
        self.recommend(session, &prefs, max_adjacent)
    }

    /// Pick a cocktail uniformly at random, ignoring preferences.
    ///
    /// Recent picks for `session` are avoided under the same starvation rule
    /// as [`Self::recommend`], and the pick is recorded.
    ///
    /// # Errors
    /// Returns [`RecommendError::CatalogUnavailable`] when the source fails
    /// or is empty. The house fallback never applies here.
    pub fn recommend_random(&self, session: &SessionId) -> Result<CatalogEntity, RecommendError> {
        let catalog = self.snapshot()?;
        let candidates =
            self.sessions
                .candidates(session, catalog.entities(), self.config.min_candidates);
        let seed = self.config.surprise_seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let pick = candidates
            .choose(&mut rng)
            .cloned()
            .ok_or_else(|| CatalogUnavailable::new("no candidates to pick from"))?;
        self.sessions.record(session, [&pick]);
        debug!("surprise pick {} for session '{session}'", pick.id);
        Ok(pick)
    }

    /// Clear recency for one session, or for every session when `None`.
    pub fn reset_recency(&self, session: Option<&SessionId>) {
        self.sessions.reset(session);
    }

    fn snapshot(&self) -> Result<Arc<Catalog>, CatalogUnavailable> {
        let catalog = self.catalog.snapshot()?;
        if catalog.is_empty() {
            return Err(CatalogUnavailable::new("catalog is empty"));
        }
        Ok(catalog)
    }

    fn primary_index(&self, ranked: &[ScoredCandidate]) -> Option<usize> {
        if ranked.is_empty() {
            return None;
        }
        match self.config.primary_pick {
            PrimaryPick::Best => Some(0),
            PrimaryPick::SeededTopK { k, seed } => {
                let window: Vec<usize> = (0..ranked.len().min(k.max(1))).collect();
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                window.choose(&mut rng).copied()
            }
        }
    }

    fn fallback(
        &self,
        unavailable: CatalogUnavailable,
        max_adjacent: usize,
    ) -> Result<RecommendationResult, RecommendError> {
        match self.config.fallback {
            FallbackPolicy::Surface => Err(unavailable.into()),
            FallbackPolicy::HouseSpecials => {
                warn!("{unavailable}; serving house specials");
                house_result(max_adjacent).ok_or_else(|| unavailable.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mixology_core::test_support::{FixedScorer, numbered_entities, trio_catalog};
    use mixology_core::{ClassicVsExperimental, SweetVsBitter};
    use mixology_scorer::QuizScorer;
    use rstest::{fixture, rstest};

    #[fixture]
    fn session() -> SessionId {
        SessionId::from("test")
    }

    #[fixture]
    fn bitter_classic() -> PreferenceVector {
        PreferenceVector {
            sweet_vs_bitter: Some(SweetVsBitter::Bitter),
            classic_vs_experimental: Some(ClassicVsExperimental::Classic),
            ..PreferenceVector::default()
        }
    }

    fn large_catalog(count: usize) -> Arc<Catalog> {
        let entities = numbered_entities(count, &["gin", "rum", "mezcal", "rye"]);
        Arc::new(Catalog::new(entities).unwrap_or_default())
    }

    #[rstest]
    fn recommender_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Recommender<Arc<Catalog>, QuizScorer>>();
    }

    #[rstest]
    fn trio_example(session: SessionId, bitter_classic: PreferenceVector) {
        let recommender = Recommender::new(Arc::new(trio_catalog()), QuizScorer::default());
        let result = recommender
            .recommend(&session, &bitter_classic, Some(2))
            .expect("catalog is available");
        assert_eq!(result.primary.id, "a-martini");
        assert_eq!(result.match_score, 100);
        assert!(result.is_from_catalog());
        let adjacent: Vec<_> = result.adjacent.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(adjacent, ["b-daiquiri", "c-gimlet"]);
    }

    #[rstest]
    fn empty_preferences_pick_lowest_id(session: SessionId) {
        let recommender = Recommender::new(Arc::new(trio_catalog()), QuizScorer::default());
        let result = recommender
            .recommend(&session, &PreferenceVector::default(), None)
            .expect("catalog is available");
        assert_eq!(result.primary.id, "a-martini");
        assert_eq!(result.adjacent.len(), 2);
        assert_eq!(result.match_score, 80);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(Arc::new(Catalog::empty())))]
    fn unavailable_catalog_is_surfaced(#[case] source: Option<Arc<Catalog>>, session: SessionId) {
        let recommender = Recommender::new(source, QuizScorer::default());
        let err = recommender
            .recommend(&session, &PreferenceVector::default(), None)
            .expect_err("no catalog");
        assert!(matches!(err, RecommendError::CatalogUnavailable(_)));
        assert!(recommender.recommend_random(&session).is_err());
    }

    #[rstest]
    fn house_fallback_is_labelled(session: SessionId) {
        let config = RecommenderConfig {
            fallback: FallbackPolicy::HouseSpecials,
            ..RecommenderConfig::default()
        };
        let recommender =
            Recommender::with_config(None::<Arc<Catalog>>, QuizScorer::default(), config);
        let result = recommender
            .recommend(&session, &PreferenceVector::default(), Some(1))
            .expect("house fallback");
        assert_eq!(result.source, RecommendationSource::HouseFallback);
        assert!(!result.is_from_catalog());
        assert_eq!(result.match_score, 0);
        assert_eq!(result.adjacent.len(), 1);
    }

    #[rstest]
    fn repeated_calls_rotate_through_the_catalog(session: SessionId) {
        let recommender = Recommender::new(large_catalog(40), FixedScorer::new(90));
        let first = recommender
            .recommend(&session, &PreferenceVector::default(), Some(3))
            .expect("first call");
        let second = recommender
            .recommend(&session, &PreferenceVector::default(), Some(3))
            .expect("second call");
        for id in first.ids() {
            assert!(!second.ids().any(|other| other == id), "{id} repeated");
        }
        recommender.reset_recency(Some(&session));
        let third = recommender
            .recommend(&session, &PreferenceVector::default(), Some(3))
            .expect("third call");
        assert_eq!(third.primary, first.primary);
    }

    #[rstest]
    fn recency_starvation_uses_the_full_catalog(session: SessionId) {
        let recommender = Recommender::new(large_catalog(12), FixedScorer::new(90));
        let first = recommender
            .recommend(&session, &PreferenceVector::default(), Some(3))
            .expect("first call");
        let second = recommender
            .recommend(&session, &PreferenceVector::default(), Some(3))
            .expect("second call");
        assert_eq!(first.primary, second.primary);
    }

    #[rstest]
    fn seeded_top_k_is_reproducible(session: SessionId) {
        let config = RecommenderConfig {
            primary_pick: PrimaryPick::SeededTopK { k: 5, seed: 7 },
            ..RecommenderConfig::default()
        };
        let pick = || {
            let recommender =
                Recommender::with_config(large_catalog(20), FixedScorer::new(90), config);
            recommender
                .recommend(&session, &PreferenceVector::default(), Some(0))
                .expect("available")
                .primary
                .id
        };
        let first = pick();
        assert_eq!(first, pick());
        let top_five: Vec<String> = (0..5).map(|i| format!("e{i:02}")).collect();
        assert!(top_five.contains(&first));
    }

    #[rstest]
    fn invalid_answers_fail_fast(session: SessionId) {
        let recommender = Recommender::new(Arc::new(trio_catalog()), QuizScorer::default());
        let err = recommender
            .recommend_answers(&session, [("mood", "sleepy")], None)
            .expect_err("invalid mood");
        assert!(matches!(err, RecommendError::InvalidPreference(_)));
    }

    #[rstest]
    fn seeded_surprise_is_reproducible(session: SessionId) {
        let config = RecommenderConfig {
            surprise_seed: Some(42),
            ..RecommenderConfig::default()
        };
        let pick = || {
            Recommender::with_config(Arc::new(trio_catalog()), QuizScorer::default(), config)
                .recommend_random(&session)
                .expect("available")
        };
        assert_eq!(pick(), pick());
    }
}

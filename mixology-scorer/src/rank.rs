//! Deterministic ranking of scored candidates.

use std::cmp::Ordering;

use log::debug;
use mixology_core::{CatalogEntity, PreferenceVector, ScoredCandidate, Scorer};

/// Total order used by [`rank`]: score descending, then matching factors
/// descending, then id ascending.
#[must_use]
pub fn compare_candidates(left: &ScoredCandidate, right: &ScoredCandidate) -> Ordering {
    right
        .score
        .cmp(&left.score)
        .then_with(|| right.matching_factors.cmp(&left.matching_factors))
        .then_with(|| left.id().cmp(right.id()))
}

/// Score every entity and order the results best-first.
///
/// The order is total, so the output does not depend on the order of
/// `entities`. The head of the result is the deterministic primary pick.
///
/// # Examples
/// ```
/// use mixology_core::{CatalogEntity, PreferenceVector};
/// use mixology_scorer::{QuizScorer, rank};
///
/// let entities = vec![
///     CatalogEntity::builder("b", "Beta").build(),
///     CatalogEntity::builder("a", "Alpha").build(),
/// ];
/// let ranked = rank(&entities, &PreferenceVector::default(), &QuizScorer::default());
/// let ids: Vec<_> = ranked.iter().map(|c| c.id()).collect();
/// assert_eq!(ids, ["a", "b"]);
/// ```
#[must_use]
pub fn rank<S>(
    entities: &[CatalogEntity],
    prefs: &PreferenceVector,
    scorer: &S,
) -> Vec<ScoredCandidate>
where
    S: Scorer + ?Sized,
{
    let mut ranked: Vec<ScoredCandidate> = entities
        .iter()
        .map(|entity| scorer.score(entity, prefs))
        .collect();
    ranked.sort_by(compare_candidates);
    if let Some(head) = ranked.first() {
        debug!(
            "ranked {} candidates; head {} scored {}",
            ranked.len(),
            head.id(),
            head.score
        );
    }
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use mixology_core::test_support::{FixedScorer, numbered_entities};
    use rstest::rstest;

    #[rstest]
    fn ties_break_by_id() {
        let mut entities = numbered_entities(4, &["gin"]);
        entities.reverse();
        let scorer = FixedScorer::new(80).with_score("e02", 95);
        let ranked = rank(&entities, &PreferenceVector::default(), &scorer);
        let ids: Vec<_> = ranked.iter().map(ScoredCandidate::id).collect();
        assert_eq!(ids, ["e02", "e00", "e01", "e03"]);
    }

    #[rstest]
    fn matching_factors_break_score_ties() {
        let entity = |id: &str| CatalogEntity::builder(id, id).build();
        let mut fewer = ScoredCandidate::new(entity("a"), 90);
        fewer.matching_factors = 1;
        let mut more = ScoredCandidate::new(entity("b"), 90);
        more.matching_factors = 2;
        assert_eq!(compare_candidates(&more, &fewer), Ordering::Less);
    }

    #[rstest]
    fn empty_input_ranks_nothing() {
        let ranked = rank(&[], &PreferenceVector::default(), &FixedScorer::new(80));
        assert!(ranked.is_empty());
    }
}

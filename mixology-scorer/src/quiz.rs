//! Quiz-driven candidate scoring.

use mixology_core::{CatalogEntity, PreferenceVector, ScoredCandidate, Scorer};

use crate::rules::{Outcome, active_rules};

/// Starting score before any dimension bonus.
pub const BASE_SCORE: u8 = 75;

/// Default lower clamp applied to every final score.
pub const DEFAULT_FLOOR: u8 = 80;

const PREMIUM_MOOD_TAGS: &[&str] = &["sophisticated", "elegant", "refined", "luxurious"];
const PREMIUM_MOOD_BONUS: i32 = 3;

/// Holistic bonuses keyed by the matching-factor count that unlocks them.
/// They accumulate, so five factors earn all three.
const HOLISTIC_BONUSES: [(u8, i32); 3] = [(3, 2), (4, 3), (5, 5)];

/// Tunable scoring behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringPolicy {
    /// Try ingredient and build heuristics when no exact tag matches.
    pub fuzzy_fallback: bool,
    /// Lowest score any candidate can receive. Values above 100 act as 100.
    pub floor: u8,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            fuzzy_fallback: true,
            floor: DEFAULT_FLOOR,
        }
    }
}

/// Scores catalog entities against quiz answers.
///
/// Every answered dimension tries an exact tag match first and, when the
/// policy allows it, a fuzzy fallback over ingredients, build method or
/// base spirit. Scoring is integer-only and deterministic.
///
/// # Examples
/// ```
/// use mixology_core::{CatalogEntity, PreferenceVector, Scorer, SweetVsBitter, TagSet};
/// use mixology_scorer::QuizScorer;
///
/// let negroni = CatalogEntity::builder("negroni", "Negroni")
///     .flavor_tags(TagSet::from_iter(["bitter"]))
///     .build();
/// let prefs = PreferenceVector {
///     sweet_vs_bitter: Some(SweetVsBitter::Bitter),
///     ..PreferenceVector::default()
/// };
/// let scored = QuizScorer::default().score(&negroni, &prefs);
/// assert_eq!(scored.score, 90);
/// assert_eq!(scored.matching_factors, 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuizScorer {
    policy: ScoringPolicy,
}

impl QuizScorer {
    /// Construct a scorer with the default policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a scorer with an explicit policy.
    #[must_use]
    pub const fn with_policy(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    /// The active policy.
    #[must_use]
    pub const fn policy(&self) -> ScoringPolicy {
        self.policy
    }
}

impl Scorer for QuizScorer {
    fn score(&self, entity: &CatalogEntity, prefs: &PreferenceVector) -> ScoredCandidate {
        let mut raw = i32::from(BASE_SCORE);
        let mut matching_factors: u8 = 0;
        let mut fuzzy_labels = Vec::new();

        for rule in active_rules(prefs) {
            match rule.evaluate(entity, self.policy.fuzzy_fallback) {
                Outcome::Exact => {
                    raw += rule.exact_bonus;
                    matching_factors += 1;
                }
                Outcome::Fuzzy(note) => {
                    raw += rule.fuzzy_bonus;
                    matching_factors += 1;
                    fuzzy_labels.push(format!("{} (via {note})", rule.label));
                }
                Outcome::Miss => raw -= rule.penalty(entity),
            }
        }

        if entity.mood_tags.contains_any(PREMIUM_MOOD_TAGS) {
            raw += PREMIUM_MOOD_BONUS;
        }
        raw += HOLISTIC_BONUSES
            .iter()
            .filter(|(threshold, _)| matching_factors >= *threshold)
            .map(|(_, bonus)| bonus)
            .sum::<i32>();

        let used_fallback = !fuzzy_labels.is_empty();
        ScoredCandidate {
            entity: entity.clone(),
            score: Self::sanitise(raw, self.policy.floor),
            matching_factors,
            fuzzy_labels,
            used_fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mixology_core::test_support::{daiquiri, gimlet, martini};
    use mixology_core::{
        BuildMethod, CitrusVsStone, ClassicVsExperimental, LightVsBoozy, Mood, SweetVsBitter,
        TagSet,
    };
    use rstest::{fixture, rstest};

    #[fixture]
    fn bitter_classic() -> PreferenceVector {
        PreferenceVector {
            sweet_vs_bitter: Some(SweetVsBitter::Bitter),
            classic_vs_experimental: Some(ClassicVsExperimental::Classic),
            ..PreferenceVector::default()
        }
    }

    #[rstest]
    fn exact_matches_on_both_dimensions_reach_the_ceiling(bitter_classic: PreferenceVector) {
        let scored = QuizScorer::new().score(&martini(), &bitter_classic);
        assert_eq!(scored.score, 100);
        assert_eq!(scored.matching_factors, 2);
        assert!(!scored.used_fallback);
    }

    #[rstest]
    fn single_exact_match(bitter_classic: PreferenceVector) {
        let scored = QuizScorer::new().score(&gimlet(), &bitter_classic);
        assert_eq!(scored.score, 85);
        assert_eq!(scored.matching_factors, 1);
    }

    #[rstest]
    fn fuzzy_match_is_labelled(bitter_classic: PreferenceVector) {
        let scored = QuizScorer::new().score(&daiquiri(), &bitter_classic);
        assert_eq!(scored.score, 82);
        assert_eq!(scored.matching_factors, 1);
        assert_eq!(scored.fuzzy_labels, vec!["classic (via 3-ingredient recipe)"]);
        assert!(scored.used_fallback);
    }

    #[rstest]
    fn disabling_fuzzy_fallback_leaves_only_exact_matches(bitter_classic: PreferenceVector) {
        let scorer = QuizScorer::with_policy(ScoringPolicy {
            fuzzy_fallback: false,
            ..ScoringPolicy::default()
        });
        let scored = scorer.score(&daiquiri(), &bitter_classic);
        assert_eq!(scored.score, DEFAULT_FLOOR);
        assert_eq!(scored.matching_factors, 0);
        assert!(scored.fuzzy_labels.is_empty());
    }

    #[rstest]
    fn empty_preferences_land_on_the_floor() {
        let scored = QuizScorer::new().score(&martini(), &PreferenceVector::default());
        assert_eq!(scored.score, DEFAULT_FLOOR);
        assert_eq!(scored.matching_factors, 0);
    }

    #[rstest]
    #[case(0, 75)]
    #[case(70, 75)]
    #[case(100, 100)]
    #[case(200, 100)]
    fn floor_is_configurable(#[case] floor: u8, #[case] expected: u8) {
        let scorer = QuizScorer::with_policy(ScoringPolicy {
            floor,
            ..ScoringPolicy::default()
        });
        let scored = scorer.score(&martini(), &PreferenceVector::default());
        assert_eq!(scored.score, expected);
    }

    #[rstest]
    fn contradicting_tags_are_penalised() {
        let scorer = QuizScorer::with_policy(ScoringPolicy {
            fuzzy_fallback: false,
            floor: 0,
        });
        let prefs = PreferenceVector {
            sweet_vs_bitter: Some(SweetVsBitter::Sweet),
            ..PreferenceVector::default()
        };
        assert_eq!(scorer.score(&martini(), &prefs).score, 70);
        assert_eq!(scorer.score(&gimlet(), &prefs).score, 75);
    }

    #[rstest]
    fn premium_mood_and_holistic_bonuses_stack() {
        let entity = CatalogEntity::builder("vesper", "Vesper")
            .base_spirit("gin")
            .build_method(BuildMethod::Stirred)
            .flavor_tags(TagSet::from_iter(["bitter", "citrus"]))
            .style_tags(TagSet::from_iter(["boozy", "classic"]))
            .mood_tags(TagSet::from_iter(["elegant"]))
            .build();
        let prefs = PreferenceVector {
            sweet_vs_bitter: Some(SweetVsBitter::Bitter),
            citrus_vs_stone: Some(CitrusVsStone::Citrus),
            light_vs_boozy: Some(LightVsBoozy::Boozy),
            classic_vs_experimental: Some(ClassicVsExperimental::Classic),
            mood: Some(Mood::Elegant),
        };
        let scorer = QuizScorer::with_policy(ScoringPolicy {
            floor: 0,
            ..ScoringPolicy::default()
        });
        let scored = scorer.score(&entity, &prefs);
        assert_eq!(scored.matching_factors, 5);
        // Clamped from 75 + 72 + 3 + 10.
        assert_eq!(scored.score, 100);
    }
}

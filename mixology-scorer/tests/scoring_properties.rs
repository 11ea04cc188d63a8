//! Property-based tests for scoring and ranking.
//!
//! # Invariants tested
//!
//! - **Score bounds:** every score lies within `floor..=100`.
//! - **Determinism:** scoring the same entity twice gives the same result.
//! - **Order independence:** ranking a shuffled catalog yields the same order.

use mixology_core::{
    BuildMethod, CatalogEntity, CitrusVsStone, ClassicVsExperimental, LightVsBoozy, Mood,
    PreferenceVector, Scorer, SweetVsBitter, TagSet,
};
use mixology_scorer::{QuizScorer, ScoringPolicy, rank};
use proptest::prelude::*;
use proptest::sample::{select, subsequence};

const TAGS: &[&str] = &[
    "sweet",
    "bitter",
    "citrus",
    "stone",
    "tropical",
    "light",
    "boozy",
    "strong",
    "classic",
    "modern",
    "experimental",
    "cozy",
    "elegant",
    "celebratory",
    "adventurous",
    "sophisticated",
];

const INGREDIENTS: &[&str] = &[
    "2 oz Gin",
    "1 oz Campari",
    "0.75 oz Lime Juice",
    "0.5 oz Honey Syrup",
    "Pineapple",
    "Soda Water",
    "Maraschino",
    "Hot Water",
];

const SPIRITS: &[&str] = &["gin", "rum", "mezcal", "bourbon", "vodka"];

fn tag_set() -> impl Strategy<Value = TagSet> {
    subsequence(TAGS.to_vec(), 0..=4).prop_map(|tags| tags.into_iter().collect::<TagSet>())
}

fn build_method() -> impl Strategy<Value = BuildMethod> {
    select(vec![
        BuildMethod::BuiltInGlass,
        BuildMethod::Shaken,
        BuildMethod::Stirred,
        BuildMethod::Blended,
    ])
}

fn entity(id: String) -> impl Strategy<Value = CatalogEntity> {
    (
        select(SPIRITS.to_vec()),
        build_method(),
        tag_set(),
        tag_set(),
        tag_set(),
        subsequence(INGREDIENTS.to_vec(), 0..=5),
    )
        .prop_map(move |(spirit, method, flavor, style, mood, ingredients)| {
            CatalogEntity::builder(id.clone(), id.clone())
                .base_spirit(spirit)
                .build_method(method)
                .flavor_tags(flavor)
                .style_tags(style)
                .mood_tags(mood)
                .ingredients(ingredients)
                .build()
        })
}

fn preferences() -> impl Strategy<Value = PreferenceVector> {
    (
        proptest::option::of(select(SweetVsBitter::ALL.to_vec())),
        proptest::option::of(select(CitrusVsStone::ALL.to_vec())),
        proptest::option::of(select(LightVsBoozy::ALL.to_vec())),
        proptest::option::of(select(ClassicVsExperimental::ALL.to_vec())),
        proptest::option::of(select(Mood::ALL.to_vec())),
    )
        .prop_map(
            |(sweet_vs_bitter, citrus_vs_stone, light_vs_boozy, classic_vs_experimental, mood)| {
                PreferenceVector {
                    sweet_vs_bitter,
                    citrus_vs_stone,
                    light_vs_boozy,
                    classic_vs_experimental,
                    mood,
                }
            },
        )
}

fn catalog() -> impl Strategy<Value = Vec<CatalogEntity>> {
    (1_usize..12).prop_flat_map(|count| {
        (0..count)
            .map(|index| entity(format!("c{index:02}")))
            .collect::<Vec<_>>()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: scores never leave `floor..=100`.
    #[test]
    fn scores_stay_within_bounds(
        entity in entity("x".to_owned()),
        prefs in preferences(),
        floor in 0_u8..=120,
        fuzzy_fallback in any::<bool>(),
    ) {
        let scorer = QuizScorer::with_policy(ScoringPolicy { fuzzy_fallback, floor });
        let scored = scorer.score(&entity, &prefs);
        prop_assert!(scored.score <= 100);
        prop_assert!(scored.score >= floor.min(100));
        prop_assert!(usize::from(scored.matching_factors) <= prefs.answered());
        prop_assert_eq!(scored.used_fallback, !scored.fuzzy_labels.is_empty());
        if !fuzzy_fallback {
            prop_assert!(!scored.used_fallback);
        }
    }

    /// Property: scoring is a pure function of its inputs.
    #[test]
    fn scoring_is_deterministic(entity in entity("x".to_owned()), prefs in preferences()) {
        let scorer = QuizScorer::default();
        prop_assert_eq!(scorer.score(&entity, &prefs), scorer.score(&entity, &prefs));
    }

    /// Property: the ranked order ignores input order.
    #[test]
    fn ranking_ignores_input_order(entities in catalog(), prefs in preferences()) {
        let scorer = QuizScorer::default();
        let forward: Vec<String> = rank(&entities, &prefs, &scorer)
            .into_iter()
            .map(|c| c.entity.id)
            .collect();
        let mut reversed_input = entities.clone();
        reversed_input.reverse();
        let backward: Vec<String> = rank(&reversed_input, &prefs, &scorer)
            .into_iter()
            .map(|c| c.entity.id)
            .collect();
        prop_assert_eq!(forward, backward);
    }
}

//! Hardcoded house specials served under [`FallbackPolicy::HouseSpecials`].
//!
//! [`FallbackPolicy::HouseSpecials`]: crate::FallbackPolicy::HouseSpecials

use mixology_core::{
    BalanceProfile, BuildMethod, CatalogEntity, RecommendationResult, RecommendationSource, TagSet,
};

/// The two drinks a bar can always make.
#[must_use]
pub fn house_specials() -> Vec<CatalogEntity> {
    vec![
        CatalogEntity::builder("house-negroni", "Negroni")
            .style("Classic aperitivo")
            .base_spirit("gin")
            .build_method(BuildMethod::Stirred)
            .flavor_tags(TagSet::from_iter(["bitter", "sophisticated"]))
            .style_tags(TagSet::from_iter(["boozy", "spirit-forward", "classic"]))
            .mood_tags(TagSet::from_iter(["sophisticated", "cozy"]))
            .occasion_tags(TagSet::from_iter(["nightcap", "dinner"]))
            .ingredients(["1 oz Gin", "1 oz Campari", "1 oz Sweet Vermouth"])
            .balance(BalanceProfile {
                sweet: 5,
                bitter: 8,
                aromatic: 6,
                alcoholic: 8,
                ..BalanceProfile::default()
            })
            .build(),
        CatalogEntity::builder("house-daiquiri", "Daiquiri")
            .style("Sour")
            .base_spirit("rum")
            .build_method(BuildMethod::Shaken)
            .flavor_tags(TagSet::from_iter(["citrus", "bright"]))
            .style_tags(TagSet::from_iter(["medium", "classic"]))
            .mood_tags(TagSet::from_iter(["celebratory"]))
            .occasion_tags(TagSet::from_iter(["daytime", "party"]))
            .ingredients(["2 oz White Rum", "1 oz Lime Juice", "0.75 oz Simple Syrup"])
            .balance(BalanceProfile {
                sweet: 4,
                sour: 7,
                alcoholic: 5,
                ..BalanceProfile::default()
            })
            .build(),
    ]
}

/// Labelled fallback result; `match_score` is zero because nothing was
/// matched.
pub(crate) fn house_result(max_adjacent: usize) -> Option<RecommendationResult> {
    let mut specials = house_specials().into_iter();
    let primary = specials.next()?;
    Some(RecommendationResult {
        primary,
        adjacent: specials.take(max_adjacent).collect(),
        match_score: 0,
        fuzzy_labels: Vec::new(),
        used_fallback: false,
        source: RecommendationSource::HouseFallback,
    })
}

//! Test-only fixtures: a handful of well-known cocktails and a scorer that
//! returns fixed scores.

use std::collections::HashMap;

use crate::{
    BuildMethod, Catalog, CatalogEntity, PreferenceVector, ScoredCandidate, Scorer, TagSet,
};

/// Gin martini: stirred, bitter and classic.
#[must_use]
pub fn martini() -> CatalogEntity {
    CatalogEntity::builder("a-martini", "Martini")
        .style("Martini")
        .base_spirit("gin")
        .build_method(BuildMethod::Stirred)
        .flavor_tags(TagSet::from_iter(["bitter"]))
        .style_tags(TagSet::from_iter(["classic"]))
        .ingredients(["2.5 oz Gin", "0.5 oz Dry Vermouth", "1 dash Orange Bitters"])
        .build()
}

/// Rum daiquiri: shaken, citrus and light.
#[must_use]
pub fn daiquiri() -> CatalogEntity {
    CatalogEntity::builder("b-daiquiri", "Daiquiri")
        .style("Daiquiri")
        .base_spirit("rum")
        .build_method(BuildMethod::Shaken)
        .flavor_tags(TagSet::from_iter(["citrus"]))
        .style_tags(TagSet::from_iter(["light"]))
        .ingredients(["2 oz White Rum", "1 oz Lime Juice", "0.75 oz Simple Syrup"])
        .build()
}

/// Gin gimlet: shaken, citrus and classic.
#[must_use]
pub fn gimlet() -> CatalogEntity {
    CatalogEntity::builder("c-gimlet", "Gimlet")
        .style("Gimlet")
        .base_spirit("gin")
        .build_method(BuildMethod::Shaken)
        .flavor_tags(TagSet::from_iter(["citrus"]))
        .style_tags(TagSet::from_iter(["classic"]))
        .ingredients(["2 oz Gin", "0.75 oz Lime Juice", "0.75 oz Simple Syrup"])
        .build()
}

/// Catalog holding the martini, daiquiri and gimlet.
#[must_use]
pub fn trio_catalog() -> Catalog {
    Catalog::new(vec![martini(), daiquiri(), gimlet()]).unwrap_or_default()
}

/// Build `count` plain entities with ids `e00`, `e01`, ... cycling through
/// `spirits` for their base spirit.
#[must_use]
pub fn numbered_entities(count: usize, spirits: &[&str]) -> Vec<CatalogEntity> {
    (0..count)
        .map(|index| {
            let spirit = spirits
                .get(index.checked_rem(spirits.len()).unwrap_or(0))
                .copied()
                .unwrap_or("gin");
            CatalogEntity::builder(format!("e{index:02}"), format!("Entity {index}"))
                .style(format!("Style {index}"))
                .base_spirit(spirit)
                .build()
        })
        .collect()
}

/// `Scorer` that returns a preset score per entity id.
///
/// Unknown ids score `default_score`.
#[derive(Debug, Clone, Default)]
pub struct FixedScorer {
    scores: HashMap<String, u8>,
    default_score: u8,
}

impl FixedScorer {
    /// Construct a scorer where unknown ids receive `default_score`.
    #[must_use]
    pub fn new(default_score: u8) -> Self {
        Self {
            scores: HashMap::new(),
            default_score,
        }
    }

    /// Preset the score for `id`.
    #[must_use]
    pub fn with_score(mut self, id: &str, score: u8) -> Self {
        self.scores.insert(id.to_owned(), score);
        self
    }
}

impl Scorer for FixedScorer {
    fn score(&self, entity: &CatalogEntity, _prefs: &PreferenceVector) -> ScoredCandidate {
        let raw = self
            .scores
            .get(&entity.id)
            .copied()
            .unwrap_or(self.default_score);
        ScoredCandidate::new(entity.clone(), Self::sanitise(i32::from(raw), 0))
    }
}

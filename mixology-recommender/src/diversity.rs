//! Greedy selection of diverse adjacent recommendations.
//!
//! Adjacents are chosen from the ranked remainder in up to three passes:
//!
//! 1. Candidates scoring at least [`PASS_ONE_MIN_SCORE`] that differ from
//!    everything chosen so far in base spirit, style or build method, or
//!    that bring a new accent ingredient. Candidates introducing an unused
//!    spirit go first, then the highest `score + boost`, then the lowest id.
//!    Boosts are recomputed after every pick.
//! 2. Any remaining candidate scoring at least [`PASS_TWO_MIN_SCORE`], in
//!    rank order.
//! 3. Any remaining candidate scoring at least [`PASS_THREE_MIN_SCORE`], in
//!    rank order.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};

use log::debug;
use mixology_core::{BuildMethod, CatalogEntity, ScoredCandidate};

/// Minimum score for the diversity pass.
pub const PASS_ONE_MIN_SCORE: u8 = 65;
/// Minimum score for the first relaxed pass.
pub const PASS_TWO_MIN_SCORE: u8 = 70;
/// Minimum score for the final relaxed pass.
pub const PASS_THREE_MIN_SCORE: u8 = 55;

const UNUSED_SPIRIT_BOOST: u32 = 15;
const PREMIUM_SPIRIT_BOOST: u32 = 10;
const ACCENT_BOOST: u32 = 5;

/// Spirits uncommon enough to earn a boost.
const PREMIUM_SPIRITS: &[&str] = &[
    "mezcal", "cognac", "armagnac", "pisco", "calvados", "rye", "scotch", "cachaça", "cachaca",
    "aquavit", "genever", "sotol",
];

/// Liqueurs, amari and modifiers that give a drink its accent.
const ACCENT_KEYWORDS: &[&str] = &[
    "amaro",
    "campari",
    "aperol",
    "chartreuse",
    "maraschino",
    "cointreau",
    "triple sec",
    "curaçao",
    "curacao",
    "vermouth",
    "benedictine",
    "bénédictine",
    "absinthe",
    "st-germain",
    "elderflower",
    "falernum",
    "orgeat",
    "crème de",
    "creme de",
    "cynar",
    "fernet",
    "lillet",
    "drambuie",
    "galliano",
];

/// Accent keywords present in `entity`'s ingredients.
///
/// Variants collapse onto their keyword, so "Sweet Vermouth" and "Dry
/// Vermouth" both yield `vermouth`.
#[must_use]
pub fn accent_ingredients(entity: &CatalogEntity) -> BTreeSet<&'static str> {
    ACCENT_KEYWORDS
        .iter()
        .copied()
        .filter(|keyword| entity.has_ingredient(keyword))
        .collect()
}

#[derive(Debug, Default)]
struct UsedSets {
    spirits: HashSet<String>,
    styles: HashSet<String>,
    builds: HashSet<BuildMethod>,
    accents: BTreeSet<&'static str>,
}

impl UsedSets {
    fn seeded(primary: &CatalogEntity) -> Self {
        let mut used = Self::default();
        used.absorb(primary);
        used
    }

    fn absorb(&mut self, entity: &CatalogEntity) {
        self.spirits.insert(entity.base_spirit.clone());
        self.styles.insert(style_key(entity));
        self.builds.insert(entity.build_method);
        self.accents.extend(accent_ingredients(entity));
    }

    fn new_spirit(&self, entity: &CatalogEntity) -> bool {
        !self.spirits.contains(&entity.base_spirit)
    }

    fn new_accents(&self, entity: &CatalogEntity) -> usize {
        accent_ingredients(entity)
            .iter()
            .filter(|accent| !self.accents.contains(*accent))
            .count()
    }

    fn is_novel(&self, entity: &CatalogEntity) -> bool {
        self.new_spirit(entity)
            || !self.styles.contains(&style_key(entity))
            || !self.builds.contains(&entity.build_method)
            || self.new_accents(entity) > 0
    }

    fn boost(&self, entity: &CatalogEntity) -> u32 {
        let mut boost = 0;
        if self.new_spirit(entity) {
            boost += UNUSED_SPIRIT_BOOST;
        }
        if PREMIUM_SPIRITS.contains(&entity.base_spirit.as_str()) {
            boost += PREMIUM_SPIRIT_BOOST;
        }
        let accents = u32::try_from(self.new_accents(entity)).unwrap_or(u32::MAX);
        boost.saturating_add(accents.saturating_mul(ACCENT_BOOST))
    }

    /// Pass-one preference: `Less` means `left` should be picked first.
    fn compare(&self, left: &ScoredCandidate, right: &ScoredCandidate) -> Ordering {
        let total = |candidate: &ScoredCandidate| {
            u32::from(candidate.score).saturating_add(self.boost(&candidate.entity))
        };
        self.new_spirit(&right.entity)
            .cmp(&self.new_spirit(&left.entity))
            .then_with(|| total(right).cmp(&total(left)))
            .then_with(|| left.id().cmp(right.id()))
    }
}

fn style_key(entity: &CatalogEntity) -> String {
    entity.style.trim().to_lowercase()
}

/// Select up to `max_count` adjacents for `primary` from `ranked`.
///
/// `ranked` must already be in rank order. The result never contains the
/// primary or the same id twice.
///
/// # Examples
/// ```
/// use mixology_core::ScoredCandidate;
/// use mixology_core::test_support::{daiquiri, gimlet, martini};
/// use mixology_recommender::select_adjacent;
///
/// let ranked = vec![
///     ScoredCandidate::new(gimlet(), 85),
///     ScoredCandidate::new(daiquiri(), 82),
/// ];
/// let adjacent = select_adjacent(&ranked, &martini(), 2);
/// let ids: Vec<_> = adjacent.iter().map(|e| e.id.as_str()).collect();
/// assert_eq!(ids, ["b-daiquiri", "c-gimlet"]);
/// ```
#[must_use]
pub fn select_adjacent(
    ranked: &[ScoredCandidate],
    primary: &CatalogEntity,
    max_count: usize,
) -> Vec<CatalogEntity> {
    let mut taken: HashSet<&str> = HashSet::from([primary.id.as_str()]);
    let mut selected: Vec<CatalogEntity> = Vec::new();
    let mut used = UsedSets::seeded(primary);

    while selected.len() < max_count {
        let next = ranked
            .iter()
            .filter(|c| !taken.contains(c.id()))
            .filter(|c| c.score >= PASS_ONE_MIN_SCORE && used.is_novel(&c.entity))
            .min_by(|left, right| used.compare(left, right));
        let Some(candidate) = next else {
            break;
        };
        taken.insert(candidate.id());
        used.absorb(&candidate.entity);
        selected.push(candidate.entity.clone());
    }
    let diverse = selected.len();

    for threshold in [PASS_TWO_MIN_SCORE, PASS_THREE_MIN_SCORE] {
        for candidate in ranked {
            if selected.len() >= max_count {
                break;
            }
            if candidate.score >= threshold && taken.insert(candidate.id()) {
                selected.push(candidate.entity.clone());
            }
        }
    }

    debug!(
        "selected {} adjacents for {} ({diverse} by diversity)",
        selected.len(),
        primary.id
    );
    selected
}

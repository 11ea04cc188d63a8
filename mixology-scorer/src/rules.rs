//! Per-dimension scoring rules.
//!
//! Each quiz option maps to one [`Rule`]: the tags that count as an exact
//! match, a fuzzy predicate tried when no tag matches, and an optional
//! contradiction penalty.

use mixology_core::{
    BuildMethod, CatalogEntity, CitrusVsStone, ClassicVsExperimental, LightVsBoozy, Mood,
    PreferenceVector, SweetVsBitter, TagSet,
};

/// Which of an entity's tag sets a rule inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TagField {
    Flavor,
    Style,
    Mood,
}

impl TagField {
    const fn tags(self, entity: &CatalogEntity) -> &TagSet {
        match self {
            Self::Flavor => &entity.flavor_tags,
            Self::Style => &entity.style_tags,
            Self::Mood => &entity.mood_tags,
        }
    }
}

/// Heuristic tried when an entity carries none of a rule's exact tags.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Fuzzy {
    /// Any ingredient contains one of the keywords.
    Ingredients(&'static [&'static str]),
    /// The entity is assembled with this method.
    Build(BuildMethod),
    /// The base spirit is one of the listed categories.
    Spirits(&'static [&'static str]),
    /// The recipe lists between one and this many ingredients.
    ShortRecipe(usize),
    /// The first predicate that holds.
    Any(&'static [Self]),
}

impl Fuzzy {
    /// Return a short note naming what satisfied the predicate.
    fn matches(self, entity: &CatalogEntity) -> Option<String> {
        match self {
            Self::Ingredients(keywords) => {
                entity.first_ingredient_match(keywords).map(str::to_owned)
            }
            Self::Build(method) => {
                (entity.build_method == method).then(|| format!("{method} build"))
            }
            Self::Spirits(spirits) => spirits
                .contains(&entity.base_spirit.as_str())
                .then(|| format!("{} base", entity.base_spirit)),
            Self::ShortRecipe(max) => {
                let count = entity.ingredients.len();
                (count > 0 && count <= max).then(|| format!("{count}-ingredient recipe"))
            }
            Self::Any(options) => options.iter().find_map(|option| option.matches(entity)),
        }
    }
}

/// Points deducted when an entity's tags contradict the chosen option.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Penalty {
    field: TagField,
    tags: &'static [&'static str],
    points: i32,
}

/// Scoring rule for one quiz option.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Rule {
    /// Option label used in fuzzy notes.
    pub(crate) label: &'static str,
    field: TagField,
    exact: &'static [&'static str],
    /// Bonus for an exact tag match.
    pub(crate) exact_bonus: i32,
    fuzzy: Fuzzy,
    /// Bonus for a fuzzy match.
    pub(crate) fuzzy_bonus: i32,
    penalty: Option<Penalty>,
}

/// How an entity fared against one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Outcome {
    Exact,
    Fuzzy(String),
    Miss,
}

impl Rule {
    /// Evaluate `entity`, trying the fuzzy predicate only when `fuzzy` is set.
    pub(crate) fn evaluate(&self, entity: &CatalogEntity, fuzzy: bool) -> Outcome {
        if self.field.tags(entity).contains_any(self.exact) {
            return Outcome::Exact;
        }
        if !fuzzy {
            return Outcome::Miss;
        }
        self.fuzzy
            .matches(entity)
            .map_or(Outcome::Miss, Outcome::Fuzzy)
    }

    /// Points to deduct from `entity`, or zero when nothing contradicts.
    pub(crate) fn penalty(&self, entity: &CatalogEntity) -> i32 {
        self.penalty
            .filter(|penalty| penalty.field.tags(entity).contains_any(penalty.tags))
            .map_or(0, |penalty| penalty.points)
    }
}

const SWEET_INGREDIENTS: &[&str] = &[
    "syrup", "honey", "cream", "liqueur", "grenadine", "agave", "sugar",
];
const BITTER_INGREDIENTS: &[&str] = &[
    "bitters", "campari", "amaro", "fernet", "cynar", "aperol", "gentian", "vermouth",
];
const CITRUS_INGREDIENTS: &[&str] = &["lemon", "lime", "grapefruit", "orange", "yuzu"];
const STONE_INGREDIENTS: &[&str] = &[
    "cherry", "peach", "apricot", "plum", "maraschino", "amaretto", "kirsch",
];
const TROPICAL_INGREDIENTS: &[&str] = &[
    "pineapple", "coconut", "passion", "mango", "banana", "guava", "orgeat", "falernum",
];
const LIGHT_INGREDIENTS: &[&str] = &[
    "soda", "tonic", "prosecco", "champagne", "ginger beer", "sparkling",
];
const MODERN_INGREDIENTS: &[&str] = &[
    "elderflower", "st-germain", "espresso", "puree", "aperol", "shrub",
];
const EXPERIMENTAL_INGREDIENTS: &[&str] = &[
    "smoke", "infused", "fat-washed", "chili", "jalapeño", "jalapeno", "habanero", "tincture",
];
const EXPERIMENTAL_SPIRITS: &[&str] = &["mezcal", "sotol", "aquavit", "baijiu"];
const CELEBRATORY_INGREDIENTS: &[&str] = &["champagne", "prosecco", "sparkling", "cava"];
const ELEGANT_INGREDIENTS: &[&str] = &["vermouth", "lillet", "champagne", "st-germain"];
const COZY_INGREDIENTS: &[&str] = &[
    "cinnamon", "nutmeg", "hot water", "hot tea", "hot cider", "coffee", "honey", "maple",
];
const COZY_SPIRITS: &[&str] = &["bourbon", "whiskey", "whisky", "rye", "scotch", "brandy"];
const ADVENTUROUS_INGREDIENTS: &[&str] = &["absinthe", "chili", "smoke", "habanero", "chartreuse"];
const ADVENTUROUS_SPIRITS: &[&str] = &["mezcal", "absinthe", "aquavit", "sotol"];

const SWEET: Rule = Rule {
    label: "sweet",
    field: TagField::Flavor,
    exact: &["sweet", "luxurious"],
    exact_bonus: 15,
    fuzzy: Fuzzy::Ingredients(SWEET_INGREDIENTS),
    fuzzy_bonus: 10,
    penalty: Some(Penalty {
        field: TagField::Flavor,
        tags: &["bitter"],
        points: 5,
    }),
};

const BITTER: Rule = Rule {
    label: "bitter",
    field: TagField::Flavor,
    exact: &["bitter", "sophisticated"],
    exact_bonus: 15,
    fuzzy: Fuzzy::Ingredients(BITTER_INGREDIENTS),
    fuzzy_bonus: 10,
    penalty: Some(Penalty {
        field: TagField::Flavor,
        tags: &["sweet"],
        points: 5,
    }),
};

const BALANCED: Rule = Rule {
    label: "balanced",
    field: TagField::Flavor,
    exact: &["balanced", "harmonious"],
    exact_bonus: 15,
    fuzzy: Fuzzy::Build(BuildMethod::Shaken),
    fuzzy_bonus: 10,
    penalty: None,
};

const CITRUS: Rule = Rule {
    label: "citrus",
    field: TagField::Flavor,
    exact: &["citrus", "bright"],
    exact_bonus: 15,
    fuzzy: Fuzzy::Ingredients(CITRUS_INGREDIENTS),
    fuzzy_bonus: 10,
    penalty: None,
};

const STONE: Rule = Rule {
    label: "stone",
    field: TagField::Flavor,
    exact: &["stone"],
    exact_bonus: 15,
    fuzzy: Fuzzy::Ingredients(STONE_INGREDIENTS),
    fuzzy_bonus: 10,
    penalty: None,
};

const TROPICAL: Rule = Rule {
    label: "tropical",
    field: TagField::Flavor,
    exact: &["tropical"],
    exact_bonus: 15,
    fuzzy: Fuzzy::Any(&[
        Fuzzy::Ingredients(TROPICAL_INGREDIENTS),
        Fuzzy::Spirits(&["rum", "cachaça", "cachaca"]),
    ]),
    fuzzy_bonus: 10,
    penalty: None,
};

const LIGHT: Rule = Rule {
    label: "light",
    field: TagField::Style,
    exact: &["light", "refreshing", "approachable"],
    exact_bonus: 12,
    fuzzy: Fuzzy::Any(&[
        Fuzzy::Ingredients(LIGHT_INGREDIENTS),
        Fuzzy::Build(BuildMethod::BuiltInGlass),
    ]),
    fuzzy_bonus: 8,
    penalty: Some(Penalty {
        field: TagField::Style,
        tags: &["strong"],
        points: 5,
    }),
};

const BOOZY: Rule = Rule {
    label: "boozy",
    field: TagField::Style,
    exact: &["boozy", "spirit-forward", "strong"],
    exact_bonus: 12,
    fuzzy: Fuzzy::Build(BuildMethod::Stirred),
    fuzzy_bonus: 8,
    penalty: Some(Penalty {
        field: TagField::Style,
        tags: &["light"],
        points: 5,
    }),
};

const MEDIUM: Rule = Rule {
    label: "medium",
    field: TagField::Style,
    exact: &["medium", "versatile", "balanced"],
    exact_bonus: 12,
    fuzzy: Fuzzy::Build(BuildMethod::Shaken),
    fuzzy_bonus: 8,
    penalty: None,
};

const CLASSIC: Rule = Rule {
    label: "classic",
    field: TagField::Style,
    exact: &["classic", "timeless"],
    exact_bonus: 10,
    fuzzy: Fuzzy::ShortRecipe(4),
    fuzzy_bonus: 7,
    penalty: None,
};

const MODERN: Rule = Rule {
    label: "modern",
    field: TagField::Style,
    exact: &["modern", "contemporary"],
    exact_bonus: 10,
    fuzzy: Fuzzy::Ingredients(MODERN_INGREDIENTS),
    fuzzy_bonus: 7,
    penalty: None,
};

const EXPERIMENTAL: Rule = Rule {
    label: "experimental",
    field: TagField::Style,
    exact: &["experimental", "bold"],
    exact_bonus: 10,
    fuzzy: Fuzzy::Any(&[
        Fuzzy::Ingredients(EXPERIMENTAL_INGREDIENTS),
        Fuzzy::Spirits(EXPERIMENTAL_SPIRITS),
    ]),
    fuzzy_bonus: 7,
    penalty: None,
};

const CELEBRATORY: Rule = Rule {
    label: "celebratory",
    field: TagField::Mood,
    exact: &["celebratory", "festive"],
    exact_bonus: 20,
    fuzzy: Fuzzy::Ingredients(CELEBRATORY_INGREDIENTS),
    fuzzy_bonus: 12,
    penalty: None,
};

const ELEGANT: Rule = Rule {
    label: "elegant",
    field: TagField::Mood,
    exact: &["elegant", "refined", "sophisticated"],
    exact_bonus: 20,
    fuzzy: Fuzzy::Ingredients(ELEGANT_INGREDIENTS),
    fuzzy_bonus: 12,
    penalty: None,
};

const COZY: Rule = Rule {
    label: "cozy",
    field: TagField::Mood,
    exact: &["cozy", "warming"],
    exact_bonus: 20,
    fuzzy: Fuzzy::Any(&[
        Fuzzy::Ingredients(COZY_INGREDIENTS),
        Fuzzy::Spirits(COZY_SPIRITS),
    ]),
    fuzzy_bonus: 12,
    penalty: None,
};

const ADVENTUROUS: Rule = Rule {
    label: "adventurous",
    field: TagField::Mood,
    exact: &["adventurous", "daring"],
    exact_bonus: 20,
    fuzzy: Fuzzy::Any(&[
        Fuzzy::Spirits(ADVENTUROUS_SPIRITS),
        Fuzzy::Ingredients(ADVENTUROUS_INGREDIENTS),
    ]),
    fuzzy_bonus: 12,
    penalty: None,
};

const fn sweet_vs_bitter(option: SweetVsBitter) -> &'static Rule {
    match option {
        SweetVsBitter::Sweet => &SWEET,
        SweetVsBitter::Bitter => &BITTER,
        SweetVsBitter::Balanced => &BALANCED,
    }
}

const fn citrus_vs_stone(option: CitrusVsStone) -> &'static Rule {
    match option {
        CitrusVsStone::Citrus => &CITRUS,
        CitrusVsStone::Stone => &STONE,
        CitrusVsStone::Tropical => &TROPICAL,
    }
}

const fn light_vs_boozy(option: LightVsBoozy) -> &'static Rule {
    match option {
        LightVsBoozy::Light => &LIGHT,
        LightVsBoozy::Boozy => &BOOZY,
        LightVsBoozy::Medium => &MEDIUM,
    }
}

const fn classic_vs_experimental(option: ClassicVsExperimental) -> &'static Rule {
    match option {
        ClassicVsExperimental::Classic => &CLASSIC,
        ClassicVsExperimental::Modern => &MODERN,
        ClassicVsExperimental::Experimental => &EXPERIMENTAL,
    }
}

const fn mood(option: Mood) -> &'static Rule {
    match option {
        Mood::Celebratory => &CELEBRATORY,
        Mood::Elegant => &ELEGANT,
        Mood::Cozy => &COZY,
        Mood::Adventurous => &ADVENTUROUS,
    }
}

/// Rules for every answered dimension, in quiz order.
pub(crate) fn active_rules(prefs: &PreferenceVector) -> impl Iterator<Item = &'static Rule> {
    [
        prefs.sweet_vs_bitter.map(sweet_vs_bitter),
        prefs.citrus_vs_stone.map(citrus_vs_stone),
        prefs.light_vs_boozy.map(light_vs_boozy),
        prefs.classic_vs_experimental.map(classic_vs_experimental),
        prefs.mood.map(mood),
    ]
    .into_iter()
    .flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mixology_core::test_support::{daiquiri, gimlet, martini};
    use rstest::rstest;

    #[rstest]
    fn exact_tags_win_over_fuzzy() {
        assert_eq!(BITTER.evaluate(&martini(), true), Outcome::Exact);
    }

    #[rstest]
    fn fuzzy_notes_name_the_matching_ingredient() {
        assert_eq!(
            SWEET.evaluate(&daiquiri(), true),
            Outcome::Fuzzy("syrup".to_owned())
        );
        assert_eq!(SWEET.evaluate(&daiquiri(), false), Outcome::Miss);
    }

    #[rstest]
    #[case(&BOOZY, "stirred build")]
    #[case(&CLASSIC, "3-ingredient recipe")]
    fn structural_fallbacks_describe_themselves(#[case] rule: &Rule, #[case] note: &str) {
        let entity = CatalogEntity::builder("x", "X")
            .build_method(BuildMethod::Stirred)
            .ingredients(["2 oz Gin", "1 oz Vermouth", "1 dash Bitters"])
            .build();
        assert_eq!(rule.evaluate(&entity, true), Outcome::Fuzzy(note.to_owned()));
    }

    #[rstest]
    fn tropical_falls_back_to_rum_base() {
        assert_eq!(
            TROPICAL.evaluate(&daiquiri(), true),
            Outcome::Fuzzy("rum base".to_owned())
        );
        assert_eq!(TROPICAL.evaluate(&gimlet(), true), Outcome::Miss);
    }

    #[rstest]
    #[case("1 shot Espresso", Outcome::Miss)]
    #[case("4 oz Hot Water", Outcome::Fuzzy("hot water".to_owned()))]
    fn cozy_keywords_match_whole_phrases(#[case] ingredient: &str, #[case] expected: Outcome) {
        let entity = CatalogEntity::builder("x", "X")
            .base_spirit("vodka")
            .ingredients(["1.5 oz Vodka", ingredient])
            .build();
        assert_eq!(COZY.evaluate(&entity, true), expected);
    }

    #[rstest]
    fn penalties_apply_only_to_contradicting_tags() {
        assert_eq!(SWEET.penalty(&martini()), 5);
        assert_eq!(SWEET.penalty(&daiquiri()), 0);
        assert_eq!(CITRUS.penalty(&martini()), 0);
    }

    #[rstest]
    fn active_rules_follow_answered_dimensions() {
        let prefs = PreferenceVector {
            sweet_vs_bitter: Some(SweetVsBitter::Bitter),
            mood: Some(Mood::Cozy),
            ..PreferenceVector::default()
        };
        let labels: Vec<_> = active_rules(&prefs).map(|rule| rule.label).collect();
        assert_eq!(labels, vec!["bitter", "cozy"]);
        assert_eq!(active_rules(&PreferenceVector::default()).count(), 0);
    }
}

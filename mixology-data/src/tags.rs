//! Tag derivation for raw catalog records.
//!
//! Converts numeric flavour intensities, ingredient names, the build
//! method and free-text labels into flavour, style, mood and occasion
//! tags. Derivation is pure and total: every record yields four tag sets,
//! with mood and occasion falling back to defaults when no rule fires.

use mixology_core::{BalanceProfile, BuildMethod, TagSet};

use crate::RawCocktail;

const CITRUS_INGREDIENTS: &[&str] = &[
    "lemon",
    "lime",
    "grapefruit",
    "orange juice",
    "yuzu",
    "citrus",
];
const TROPICAL_INGREDIENTS: &[&str] = &[
    "pineapple",
    "coconut",
    "passion fruit",
    "passionfruit",
    "mango",
    "banana",
    "guava",
    "falernum",
];
const STONE_INGREDIENTS: &[&str] = &[
    "cherry", "peach", "apricot", "plum", "maraschino", "amaretto", "kirsch",
];
const SWEET_INGREDIENTS: &[&str] = &[
    "syrup", "honey", "cream", "liqueur", "grenadine", "sugar", "agave",
];
const BITTER_INGREDIENTS: &[&str] = &[
    "bitters", "campari", "amaro", "fernet", "cynar", "aperol", "gentian",
];
const HERBAL_INGREDIENTS: &[&str] = &[
    "chartreuse",
    "absinthe",
    "benedictine",
    "bénédictine",
    "mint",
    "basil",
    "sage",
    "thyme",
];
const CLASSIC_KEYWORDS: &[&str] = &[
    "classic",
    "old fashioned",
    "martini",
    "manhattan",
    "negroni",
    "daiquiri",
    "sazerac",
    "gimlet",
    "collins",
    "julep",
    "sidecar",
    "sour",
];
const MODERN_KEYWORDS: &[&str] = &["modern", "contemporary", "twist", "riff", "new-wave"];
const EXPERIMENTAL_KEYWORDS: &[&str] = &[
    "experimental",
    "smoked",
    "infused",
    "fat-washed",
    "clarified",
    "molecular",
];

/// The four tag sets derived for one record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DerivedTags {
    /// Flavour labels.
    pub flavor: TagSet,
    /// Style labels.
    pub style: TagSet,
    /// Mood labels.
    pub mood: TagSet,
    /// Occasion labels.
    pub occasion: TagSet,
}

/// Derive all tag sets for `raw` given its parsed build method.
///
/// # Examples
/// ```
/// use mixology_core::BuildMethod;
/// use mixology_data::{FlavorProfile, RawCocktail, derive_tags};
///
/// let raw = RawCocktail {
///     id: "negroni".into(),
///     name: "Negroni".into(),
///     base_spirit: "Gin".into(),
///     style: "Classic".into(),
///     build_method: "stirred".into(),
///     flavor: FlavorProfile { bitter: 8.0, alcoholic: 8.0, ..FlavorProfile::default() },
///     ingredients: vec!["1 oz Gin".into(), "1 oz Campari".into(), "1 oz Sweet Vermouth".into()],
///     garnish: None,
///     glassware: None,
///     notes: None,
/// };
/// let tags = derive_tags(&raw, BuildMethod::Stirred);
/// assert!(tags.flavor.contains("bitter"));
/// assert!(tags.style.contains("spirit-forward"));
/// assert!(tags.style.contains("classic"));
/// ```
#[must_use]
pub fn derive_tags(raw: &RawCocktail, method: BuildMethod) -> DerivedTags {
    let balance = raw.flavor.to_balance();
    let flavor = flavor_tags(&balance, &raw.ingredients);
    let style = style_tags(raw, &balance, method);
    let mood = mood_tags(&flavor, &style);
    let occasion = occasion_tags(&style, &mood);
    DerivedTags {
        flavor,
        style,
        mood,
        occasion,
    }
}

fn flavor_tags(balance: &BalanceProfile, ingredients: &[String]) -> TagSet {
    let mut tags = TagSet::new();
    if balance.sweet >= 7 {
        tags.extend(["sweet", "luxurious"]);
    }
    if balance.bitter >= 7 {
        tags.extend(["bitter", "sophisticated"]);
    }
    if (3..=6).contains(&balance.sweet) && (3..=6).contains(&balance.bitter) {
        tags.extend(["balanced", "harmonious"]);
    }
    if balance.sour >= 6 {
        tags.extend(["citrus", "bright"]);
    }
    if balance.spicy >= 6 {
        tags.extend(["spicy", "warming"]);
    }
    if balance.aromatic >= 6 {
        tags.extend(["aromatic", "floral"]);
    }

    let lowered: Vec<String> = ingredients.iter().map(|i| i.to_lowercase()).collect();
    let mentions = |keywords: &[&str]| {
        lowered
            .iter()
            .any(|ingredient| keywords.iter().any(|k| ingredient.contains(k)))
    };
    for (keywords, label) in [
        (CITRUS_INGREDIENTS, "citrus"),
        (TROPICAL_INGREDIENTS, "tropical"),
        (STONE_INGREDIENTS, "stone"),
        (SWEET_INGREDIENTS, "sweet"),
        (BITTER_INGREDIENTS, "bitter"),
        (HERBAL_INGREDIENTS, "herbal"),
    ] {
        if mentions(keywords) {
            tags.insert(label);
        }
    }
    tags
}

fn style_tags(raw: &RawCocktail, balance: &BalanceProfile, method: BuildMethod) -> TagSet {
    let mut tags = TagSet::new();
    match method {
        BuildMethod::BuiltInGlass => tags.extend(["light", "refreshing"]),
        BuildMethod::Stirred => tags.extend(["boozy", "spirit-forward", "strong"]),
        BuildMethod::Shaken => tags.extend(["medium", "versatile", "balanced"]),
        BuildMethod::Blended => tags.extend(["frozen", "refreshing"]),
    }
    if balance.alcoholic >= 8 {
        tags.extend(["boozy", "strong"]);
    } else if balance.alcoholic <= 3 {
        tags.extend(["light", "approachable"]);
    }

    let text = [
        raw.name.as_str(),
        raw.style.as_str(),
        raw.notes.as_deref().unwrap_or_default(),
    ]
    .join(" ")
    .to_lowercase();
    let mentions = |keywords: &[&str]| keywords.iter().any(|k| text.contains(k));
    // Experimental wins over modern, which wins over classic.
    if mentions(EXPERIMENTAL_KEYWORDS) {
        tags.extend(["experimental", "bold"]);
    } else if mentions(MODERN_KEYWORDS) {
        tags.extend(["modern", "contemporary"]);
    } else if mentions(CLASSIC_KEYWORDS) {
        tags.extend(["classic", "timeless"]);
    }
    tags
}

fn mood_tags(flavor: &TagSet, style: &TagSet) -> TagSet {
    let mut tags = TagSet::new();
    if flavor.contains("sweet") && flavor.contains("luxurious") {
        tags.extend(["elegant", "refined"]);
    }
    if flavor.contains("bitter") && flavor.contains("sophisticated") {
        tags.extend(["sophisticated", "contemplative"]);
    }
    if flavor.contains_any(&["citrus", "tropical"]) && style.contains_any(&["light", "refreshing"])
    {
        tags.extend(["celebratory", "festive"]);
    }
    if style.contains_any(&["boozy", "spirit-forward"]) && flavor.contains_any(&["bitter", "spicy"])
    {
        tags.extend(["cozy", "warming"]);
    }
    if flavor.contains("spicy") || style.contains_any(&["experimental", "bold"]) {
        tags.extend(["adventurous", "daring"]);
    }
    if tags.is_empty() {
        tags.extend(["elegant", "sophisticated"]);
    }
    tags
}

fn occasion_tags(style: &TagSet, mood: &TagSet) -> TagSet {
    let mut tags = TagSet::new();
    if mood.contains("celebratory") {
        tags.extend(["party", "brunch"]);
    }
    if style.contains_any(&["light", "refreshing"]) {
        tags.extend(["daytime", "aperitif"]);
    }
    if style.contains("boozy") || mood.contains("cozy") {
        tags.insert("nightcap");
    }
    if mood.contains_any(&["elegant", "refined"]) {
        tags.insert("dinner");
    }
    if tags.is_empty() {
        tags.insert("evening");
    }
    tags
}

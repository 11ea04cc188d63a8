//! Catalog entities: cocktails carrying pre-derived semantic tags.
//!
//! Entities are immutable once built. Tags are attached by the catalog
//! loader and never re-derived while scoring.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};

/// How a drink is assembled.
///
/// # Examples
/// ```
/// use mixology_core::BuildMethod;
///
/// let method: BuildMethod = "stirred".parse().unwrap();
/// assert_eq!(method, BuildMethod::Stirred);
/// assert_eq!(BuildMethod::BuiltInGlass.as_str(), "built");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BuildMethod {
    /// Poured and mixed directly in the serving glass.
    BuiltInGlass,
    /// Shaken over ice.
    Shaken,
    /// Stirred over ice.
    Stirred,
    /// Blended or otherwise frozen.
    Blended,
}

impl BuildMethod {
    /// Return the canonical lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BuiltInGlass => "built",
            Self::Shaken => "shaken",
            Self::Stirred => "stirred",
            Self::Blended => "blended",
        }
    }
}

impl fmt::Display for BuildMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "built" | "build" | "built-in-glass" | "built_in_glass" | "built in glass" => {
                Ok(Self::BuiltInGlass)
            }
            "shaken" | "shake" => Ok(Self::Shaken),
            "stirred" | "stir" => Ok(Self::Stirred),
            "blended" | "blend" | "frozen" => Ok(Self::Blended),
            _ => Err(format!("unknown build method '{s}'")),
        }
    }
}

/// Integer flavour intensities, conventionally `0..=10`.
///
/// Values are not bounded; upstream sources occasionally exceed the
/// conventional range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BalanceProfile {
    /// Perceived sweetness.
    pub sweet: i16,
    /// Perceived sourness.
    pub sour: i16,
    /// Perceived bitterness.
    pub bitter: i16,
    /// Perceived heat or spice.
    pub spicy: i16,
    /// Aromatic or floral intensity.
    pub aromatic: i16,
    /// Alcohol intensity.
    pub alcoholic: i16,
}

/// A deduplicated set of lowercase labels.
///
/// Labels are normalised on insertion, so lookups are case-insensitive.
///
/// # Examples
/// ```
/// use mixology_core::TagSet;
///
/// let tags = TagSet::from_iter(["Citrus", "citrus", "light"]);
/// assert_eq!(tags.len(), 2);
/// assert!(tags.contains("CITRUS"));
/// assert!(tags.contains_any(&["bitter", "light"]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<String>", into = "Vec<String>"))]
pub struct TagSet(BTreeSet<String>);

impl TagSet {
    /// Construct an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Insert a label, normalising case and surrounding whitespace.
    ///
    /// Blank labels are ignored.
    pub fn insert(&mut self, label: &str) {
        let normalised = label.trim().to_lowercase();
        if !normalised.is_empty() {
            self.0.insert(normalised);
        }
    }

    /// Report whether `label` is present.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.0.contains(label.trim().to_lowercase().as_str())
    }

    /// Report whether any of `labels` is present.
    #[must_use]
    pub fn contains_any(&self, labels: &[&str]) -> bool {
        labels.iter().any(|label| self.contains(label))
    }

    /// Iterate labels in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Report whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tags = Self::new();
        for label in iter {
            tags.insert(label.as_ref());
        }
        tags
    }
}

impl From<Vec<String>> for TagSet {
    fn from(labels: Vec<String>) -> Self {
        labels.into_iter().collect()
    }
}

impl From<TagSet> for Vec<String> {
    fn from(tags: TagSet) -> Self {
        tags.0.into_iter().collect()
    }
}

impl<S: AsRef<str>> Extend<S> for TagSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for label in iter {
            self.insert(label.as_ref());
        }
    }
}

/// A recommendable cocktail with its semantic tags.
///
/// # Examples
/// ```
/// use mixology_core::{BuildMethod, CatalogEntity, TagSet};
///
/// let martini = CatalogEntity::builder("martini", "Martini")
///     .base_spirit("Gin")
///     .build_method(BuildMethod::Stirred)
///     .style_tags(TagSet::from_iter(["classic"]))
///     .build();
/// assert_eq!(martini.base_spirit, "gin");
/// assert!(martini.style_tags.contains("classic"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CatalogEntity {
    /// Stable identifier, unique within a catalog.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Display style label, e.g. "Martini" or "Sour".
    pub style: String,
    /// Assembly technique.
    pub build_method: BuildMethod,
    /// Lowercase base spirit category, e.g. "gin".
    #[cfg_attr(feature = "serde", serde(deserialize_with = "normalised_spirit"))]
    pub base_spirit: String,
    /// Flavour labels such as "citrus" or "bitter".
    pub flavor_tags: TagSet,
    /// Style labels such as "classic" or "boozy".
    pub style_tags: TagSet,
    /// Mood labels such as "cozy" or "elegant".
    pub mood_tags: TagSet,
    /// Occasion labels such as "brunch" or "nightcap".
    pub occasion_tags: TagSet,
    /// Ingredient display strings (quantity and name).
    pub ingredients: Vec<String>,
    /// Numeric flavour balance.
    pub balance: BalanceProfile,
}

#[cfg(feature = "serde")]
fn normalised_spirit<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().to_lowercase())
}

impl CatalogEntity {
    /// Start building an entity with the given identifier and name.
    #[must_use]
    pub fn builder(id: impl Into<String>, name: impl Into<String>) -> CatalogEntityBuilder {
        CatalogEntityBuilder::new(id.into(), name.into())
    }

    /// Report whether any ingredient contains `needle`, ignoring case.
    #[must_use]
    pub fn has_ingredient(&self, needle: &str) -> bool {
        let needle_lower = needle.to_lowercase();
        self.ingredients
            .iter()
            .any(|ingredient| ingredient.to_lowercase().contains(&needle_lower))
    }

    /// Return the first of `needles` found in the ingredient list.
    #[must_use]
    pub fn first_ingredient_match<'a>(&self, needles: &[&'a str]) -> Option<&'a str> {
        needles
            .iter()
            .copied()
            .find(|needle| self.has_ingredient(needle))
    }
}

/// Incremental constructor for [`CatalogEntity`].
#[derive(Debug, Clone)]
pub struct CatalogEntityBuilder {
    entity: CatalogEntity,
}

impl CatalogEntityBuilder {
    fn new(id: String, name: String) -> Self {
        Self {
            entity: CatalogEntity {
                id,
                style: name.clone(),
                name,
                build_method: BuildMethod::Shaken,
                base_spirit: String::new(),
                flavor_tags: TagSet::new(),
                style_tags: TagSet::new(),
                mood_tags: TagSet::new(),
                occasion_tags: TagSet::new(),
                ingredients: Vec::new(),
                balance: BalanceProfile::default(),
            },
        }
    }

    /// Set the display style label. Defaults to the name.
    #[must_use]
    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.entity.style = style.into();
        self
    }

    /// Set the build method. Defaults to [`BuildMethod::Shaken`].
    #[must_use]
    pub const fn build_method(mut self, method: BuildMethod) -> Self {
        self.entity.build_method = method;
        self
    }

    /// Set the base spirit category; stored lowercase.
    #[must_use]
    pub fn base_spirit(mut self, spirit: &str) -> Self {
        self.entity.base_spirit = spirit.trim().to_lowercase();
        self
    }

    /// Replace the flavour tags.
    #[must_use]
    pub fn flavor_tags(mut self, tags: TagSet) -> Self {
        self.entity.flavor_tags = tags;
        self
    }

    /// Replace the style tags.
    #[must_use]
    pub fn style_tags(mut self, tags: TagSet) -> Self {
        self.entity.style_tags = tags;
        self
    }

    /// Replace the mood tags.
    #[must_use]
    pub fn mood_tags(mut self, tags: TagSet) -> Self {
        self.entity.mood_tags = tags;
        self
    }

    /// Replace the occasion tags.
    #[must_use]
    pub fn occasion_tags(mut self, tags: TagSet) -> Self {
        self.entity.occasion_tags = tags;
        self
    }

    /// Replace the ingredient list.
    #[must_use]
    pub fn ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entity.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    /// Set the numeric balance profile.
    #[must_use]
    pub const fn balance(mut self, balance: BalanceProfile) -> Self {
        self.entity.balance = balance;
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> CatalogEntity {
        self.entity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("built", BuildMethod::BuiltInGlass)]
    #[case("Built-In-Glass", BuildMethod::BuiltInGlass)]
    #[case(" shaken ", BuildMethod::Shaken)]
    #[case("STIR", BuildMethod::Stirred)]
    #[case("frozen", BuildMethod::Blended)]
    fn build_method_parses_aliases(#[case] raw: &str, #[case] expected: BuildMethod) {
        assert_eq!(raw.parse::<BuildMethod>(), Ok(expected));
    }

    #[rstest]
    fn build_method_rejects_unknown() {
        let err = "thrown".parse::<BuildMethod>().unwrap_err();
        assert!(err.contains("unknown build method"));
    }

    #[rstest]
    fn tag_set_ignores_blank_labels() {
        let tags = TagSet::from_iter(["", "  ", "Bold"]);
        assert_eq!(tags.iter().collect::<Vec<_>>(), vec!["bold"]);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialised_tags_are_normalised() {
        let tags: TagSet = serde_json::from_str(r#"["Bitter", " bitter ", "", "Citrus"]"#)
            .expect("tag set should deserialise");
        assert_eq!(tags.iter().collect::<Vec<_>>(), vec!["bitter", "citrus"]);
        assert!(tags.contains("bitter"));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialised_entities_normalise_spirit_and_tags() {
        let json = r#"{
            "id": "negroni",
            "name": "Negroni",
            "style": "Aperitivo",
            "build_method": "stirred",
            "base_spirit": " Gin ",
            "flavor_tags": ["Bitter"],
            "style_tags": ["Boozy"],
            "mood_tags": ["Sophisticated"],
            "occasion_tags": [],
            "ingredients": ["1 oz Gin"],
            "balance": {"sweet": 5, "sour": 0, "bitter": 8, "spicy": 0, "aromatic": 6, "alcoholic": 8}
        }"#;
        let entity: CatalogEntity = serde_json::from_str(json).expect("entity should deserialise");
        assert_eq!(entity.base_spirit, "gin");
        assert!(entity.flavor_tags.contains("bitter"));
        assert_eq!(entity.style_tags.iter().collect::<Vec<_>>(), vec!["boozy"]);
        let round_trip = serde_json::to_string(&entity).expect("entity should serialise");
        assert!(round_trip.contains(r#""flavor_tags":["bitter"]"#));
    }

    #[rstest]
    fn ingredient_lookup_is_case_insensitive() {
        let entity = CatalogEntity::builder("sour", "Whiskey Sour")
            .ingredients(["2 oz Bourbon", "0.75 oz Fresh Lemon Juice"])
            .build();
        assert!(entity.has_ingredient("lemon"));
        assert_eq!(entity.first_ingredient_match(&["lime", "LEMON"]), Some("LEMON"));
        assert!(!entity.has_ingredient("honey"));
    }
}

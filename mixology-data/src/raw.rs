//! Raw catalog records as supplied by the upstream catalog source.

use mixology_core::BalanceProfile;
use serde::{Deserialize, Serialize};

/// Float-valued flavour intensities from the raw catalog.
///
/// Missing fields default to `0.0`. Source data uses a few different names
/// for the same axis, so common aliases are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FlavorProfile {
    /// Sweetness.
    pub sweet: f32,
    /// Bitterness.
    pub bitter: f32,
    /// Sourness or citrus intensity.
    #[serde(alias = "citrus")]
    pub sour: f32,
    /// Heat or spice.
    pub spicy: f32,
    /// Aromatic or floral intensity.
    #[serde(alias = "floral")]
    pub aromatic: f32,
    /// Alcohol intensity or overall complexity.
    #[serde(alias = "complex", alias = "strength")]
    pub alcoholic: f32,
}

impl FlavorProfile {
    /// Round the intensities into an integer [`BalanceProfile`].
    ///
    /// Non-finite values become `0`; magnitudes are capped at `100`.
    #[must_use]
    pub fn to_balance(self) -> BalanceProfile {
        BalanceProfile {
            sweet: round_intensity(self.sweet),
            sour: round_intensity(self.sour),
            bitter: round_intensity(self.bitter),
            spicy: round_intensity(self.spicy),
            aromatic: round_intensity(self.aromatic),
            alcoholic: round_intensity(self.alcoholic),
        }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "value is rounded and clamped into i16 range before casting"
)]
fn round_intensity(value: f32) -> i16 {
    if !value.is_finite() {
        return 0;
    }
    value.round().clamp(-100.0_f32, 100.0_f32) as i16
}

/// One cocktail record in the upstream catalog schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCocktail {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Base spirit category, e.g. "Gin".
    #[serde(alias = "spirit")]
    pub base_spirit: String,
    /// Display style label.
    #[serde(default)]
    pub style: String,
    /// Build method label such as "shaken" or "built".
    #[serde(alias = "method")]
    pub build_method: String,
    /// Flavour intensities.
    #[serde(default)]
    pub flavor: FlavorProfile,
    /// Ingredient display strings.
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Garnish display string.
    #[serde(default)]
    pub garnish: Option<String>,
    /// Glassware display string.
    #[serde(default)]
    pub glassware: Option<String>,
    /// Free-text notes.
    #[serde(default)]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(6.5, 7)]
    #[case(-0.4, 0)]
    #[case(f32::NAN, 0)]
    #[case(f32::INFINITY, 0)]
    #[case(1.0e9, 100)]
    fn intensities_round_into_balance(#[case] raw: f32, #[case] expected: i16) {
        let profile = FlavorProfile {
            sweet: raw,
            ..FlavorProfile::default()
        };
        assert_eq!(profile.to_balance().sweet, expected);
    }
}

//! Quiz answers: up to five optional categorical preference dimensions.
//!
//! Every dimension is independently optional and any subset, including the
//! empty set, is valid input. Values outside a dimension's domain are
//! rejected at the boundary with [`PreferenceError`].

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while parsing quiz answers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferenceError {
    /// A dimension held a value outside its enumerated domain.
    #[error("invalid value '{value}' for {dimension}; expected one of: {expected}")]
    InvalidValue {
        /// Dimension being parsed.
        dimension: Dimension,
        /// Offending raw value.
        value: String,
        /// Comma-separated list of accepted values.
        expected: String,
    },
    /// The answer named a dimension the quiz does not define.
    #[error("unknown preference dimension '{name}'")]
    UnknownDimension {
        /// Offending dimension name.
        name: String,
    },
}

/// The five quiz dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Dimension {
    /// Sweet versus bitter palate.
    SweetVsBitter,
    /// Citrus versus stone fruit versus tropical.
    CitrusVsStone,
    /// Light versus boozy strength.
    LightVsBoozy,
    /// Classic versus modern versus experimental.
    ClassicVsExperimental,
    /// Desired mood.
    Mood,
}

impl Dimension {
    /// Every dimension in quiz order.
    pub const ALL: [Self; 5] = [
        Self::SweetVsBitter,
        Self::CitrusVsStone,
        Self::LightVsBoozy,
        Self::ClassicVsExperimental,
        Self::Mood,
    ];

    /// Return the snake-case dimension name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SweetVsBitter => "sweet_vs_bitter",
            Self::CitrusVsStone => "citrus_vs_stone",
            Self::LightVsBoozy => "light_vs_boozy",
            Self::ClassicVsExperimental => "classic_vs_experimental",
            Self::Mood => "mood",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept snake, kebab and camel case spellings alike.
        let key: String = s
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self::ALL
            .into_iter()
            .find(|dimension| dimension.as_str().replace('_', "") == key)
            .or_else(|| (key == "moodpreference").then_some(Self::Mood))
            .ok_or_else(|| PreferenceError::UnknownDimension { name: s.to_owned() })
    }
}

macro_rules! preference_options {
    (
        $(#[$meta:meta])*
        $name:ident => $dimension:expr, {
            $($(#[$variant_meta:meta])* $variant:ident = $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
        pub enum $name {
            $($(#[$variant_meta])* $variant,)+
        }

        impl $name {
            /// Every option in quiz order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Return the lowercase option label.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = PreferenceError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = s.trim().to_lowercase();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|option| option.as_str() == value)
                    .ok_or_else(|| PreferenceError::InvalidValue {
                        dimension: $dimension,
                        value: s.to_owned(),
                        expected: Self::ALL
                            .iter()
                            .map(|option| option.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }
    };
}

preference_options! {
    /// Sweet versus bitter palate.
    SweetVsBitter => Dimension::SweetVsBitter, {
        /// Prefers sweet drinks.
        Sweet = "sweet",
        /// Prefers bitter drinks.
        Bitter = "bitter",
        /// Wants neither extreme.
        Balanced = "balanced",
    }
}

preference_options! {
    /// Preferred fruit character.
    CitrusVsStone => Dimension::CitrusVsStone, {
        /// Lemon, lime and grapefruit.
        Citrus = "citrus",
        /// Cherry, peach, apricot and plum.
        Stone = "stone",
        /// Pineapple, coconut and passion fruit.
        Tropical = "tropical",
    }
}

preference_options! {
    /// Preferred strength.
    LightVsBoozy => Dimension::LightVsBoozy, {
        /// Low alcohol, refreshing.
        Light = "light",
        /// Spirit-forward.
        Boozy = "boozy",
        /// Somewhere in between.
        Medium = "medium",
    }
}

preference_options! {
    /// Appetite for novelty.
    ClassicVsExperimental => Dimension::ClassicVsExperimental, {
        /// Time-tested recipes.
        Classic = "classic",
        /// Contemporary riffs.
        Modern = "modern",
        /// Unusual techniques and pairings.
        Experimental = "experimental",
    }
}

preference_options! {
    /// Desired mood.
    Mood => Dimension::Mood, {
        /// Something festive.
        Celebratory = "celebratory",
        /// Something refined.
        Elegant = "elegant",
        /// Something warming.
        Cozy = "cozy",
        /// Something daring.
        Adventurous = "adventurous",
    }
}

/// A user's quiz answers.
///
/// # Examples
/// ```
/// use mixology_core::{Mood, PreferenceVector, SweetVsBitter};
///
/// let prefs = PreferenceVector::from_answers([("sweet_vs_bitter", "bitter"), ("mood", "cozy")])?;
/// assert_eq!(prefs.sweet_vs_bitter, Some(SweetVsBitter::Bitter));
/// assert_eq!(prefs.mood, Some(Mood::Cozy));
/// assert_eq!(prefs.answered(), 2);
/// assert!(PreferenceVector::default().is_empty());
/// # Ok::<(), mixology_core::PreferenceError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PreferenceVector {
    /// Sweet versus bitter answer.
    #[cfg_attr(feature = "serde", serde(default))]
    pub sweet_vs_bitter: Option<SweetVsBitter>,
    /// Fruit character answer.
    #[cfg_attr(feature = "serde", serde(default))]
    pub citrus_vs_stone: Option<CitrusVsStone>,
    /// Strength answer.
    #[cfg_attr(feature = "serde", serde(default))]
    pub light_vs_boozy: Option<LightVsBoozy>,
    /// Novelty answer.
    #[cfg_attr(feature = "serde", serde(default))]
    pub classic_vs_experimental: Option<ClassicVsExperimental>,
    /// Mood answer.
    #[cfg_attr(feature = "serde", serde(default))]
    pub mood: Option<Mood>,
}

impl PreferenceVector {
    /// Construct an empty answer set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sweet_vs_bitter: None,
            citrus_vs_stone: None,
            light_vs_boozy: None,
            classic_vs_experimental: None,
            mood: None,
        }
    }

    /// Parse raw `(dimension, value)` answer pairs.
    ///
    /// Blank values leave the dimension unanswered. Later answers for the
    /// same dimension replace earlier ones.
    ///
    /// # Errors
    /// Returns [`PreferenceError::UnknownDimension`] for unrecognised
    /// dimension names and [`PreferenceError::InvalidValue`] for values
    /// outside a dimension's domain.
    pub fn from_answers<'a, I>(answers: I) -> Result<Self, PreferenceError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut prefs = Self::new();
        for (name, value) in answers {
            prefs.set_answer(name, value)?;
        }
        Ok(prefs)
    }

    /// Parse and store one answer.
    ///
    /// # Errors
    /// See [`PreferenceVector::from_answers`].
    pub fn set_answer(&mut self, name: &str, value: &str) -> Result<(), PreferenceError> {
        let dimension = name.parse::<Dimension>()?;
        if value.trim().is_empty() {
            return Ok(());
        }
        match dimension {
            Dimension::SweetVsBitter => self.sweet_vs_bitter = Some(value.parse()?),
            Dimension::CitrusVsStone => self.citrus_vs_stone = Some(value.parse()?),
            Dimension::LightVsBoozy => self.light_vs_boozy = Some(value.parse()?),
            Dimension::ClassicVsExperimental => {
                self.classic_vs_experimental = Some(value.parse()?);
            }
            Dimension::Mood => self.mood = Some(value.parse()?),
        }
        Ok(())
    }

    /// Number of answered dimensions.
    #[must_use]
    pub fn answered(&self) -> usize {
        [
            self.sweet_vs_bitter.is_some(),
            self.citrus_vs_stone.is_some(),
            self.light_vs_boozy.is_some(),
            self.classic_vs_experimental.is_some(),
            self.mood.is_some(),
        ]
        .into_iter()
        .filter(|answered| *answered)
        .count()
    }

    /// Report whether no dimension is answered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answered() == 0
    }
}

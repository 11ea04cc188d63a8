//! Candidate scoring and ranking for the Mixology engine.
//!
//! [`QuizScorer`] implements [`Scorer`](mixology_core::Scorer): it starts
//! every entity at [`BASE_SCORE`], adds a bonus for each answered quiz
//! dimension the entity satisfies (exactly through its tags, or through a
//! labelled fuzzy fallback), applies contradiction penalties and holistic
//! bonuses, and clamps into `floor..=100`. [`rank`] orders scored
//! candidates deterministically.
//!
//! # Examples
//!
//! ```
//! use mixology_core::test_support::trio_catalog;
//! use mixology_core::{ClassicVsExperimental, PreferenceVector, SweetVsBitter};
//! use mixology_scorer::{QuizScorer, rank};
//!
//! let catalog = trio_catalog();
//! let prefs = PreferenceVector {
//!     sweet_vs_bitter: Some(SweetVsBitter::Bitter),
//!     classic_vs_experimental: Some(ClassicVsExperimental::Classic),
//!     ..PreferenceVector::default()
//! };
//! let ranked = rank(catalog.entities(), &prefs, &QuizScorer::default());
//! assert_eq!(ranked.first().map(|c| c.id()), Some("a-martini"));
//! ```

#![forbid(unsafe_code)]

mod quiz;
mod rank;
mod rules;

pub use quiz::{BASE_SCORE, DEFAULT_FLOOR, QuizScorer, ScoringPolicy};
pub use rank::{compare_candidates, rank};

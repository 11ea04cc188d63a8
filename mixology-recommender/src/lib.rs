//! Recommendation orchestration for the Mixology engine.
//!
//! A [`Recommender`] takes a catalog snapshot from a
//! [`CatalogSource`](mixology_core::CatalogSource), drops the session's
//! recent picks (unless that would starve the candidate pool), ranks what is
//! left with a [`Scorer`](mixology_core::Scorer), picks a primary and then
//! greedily selects diverse adjacent alternates. Recency is tracked per
//! [`SessionId`].

#![forbid(unsafe_code)]

mod config;
mod diversity;
mod house;
mod recency;
mod recommender;
mod session;

pub use config::{
    DEFAULT_MAX_ADJACENT, DEFAULT_MIN_CANDIDATES, FallbackPolicy, PrimaryPick, RecommenderConfig,
};
pub use diversity::{
    PASS_ONE_MIN_SCORE, PASS_THREE_MIN_SCORE, PASS_TWO_MIN_SCORE, accent_ingredients,
    select_adjacent,
};
pub use house::house_specials;
pub use recency::{MAX_RECENT, RecencyTracker};
pub use recommender::Recommender;
pub use session::{MAX_SESSIONS, SessionId, SessionRecency};

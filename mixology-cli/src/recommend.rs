//! Recommend command implementation for the Mixology CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use log::debug;
use mixology_core::{Dimension, PreferenceVector, RecommendationResult};
use mixology_data::FileCatalog;
use mixology_recommender::{
    DEFAULT_MAX_ADJACENT, PrimaryPick, Recommender, RecommenderConfig, SessionId,
};
use mixology_scorer::{QuizScorer, ScoringPolicy};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_CATALOG, ARG_MAX_ADJACENT, ARG_NO_FUZZY, ARG_SEED, ARG_TOP_K, CLI_SESSION, CliError,
    ENV_RECOMMEND_CATALOG, write_json,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score every cocktail in the catalog against the quiz \
                 answers, pick the best match and select diverse \
                 alternates. Unanswered dimensions are simply skipped. \
                 Values can come from CLI flags, configuration files, or \
                 environment variables.",
    about = "Recommend cocktails from quiz answers"
)]
#[ortho_config(prefix = "MIXOLOGY")]
pub(crate) struct RecommendArgs {
    /// Path to the JSON cocktail catalog.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Sweet versus bitter: sweet, bitter or balanced.
    #[arg(long, value_name = "answer")]
    #[serde(default)]
    pub(crate) sweet_vs_bitter: Option<String>,
    /// Fruit character: citrus, stone or tropical.
    #[arg(long, value_name = "answer")]
    #[serde(default)]
    pub(crate) citrus_vs_stone: Option<String>,
    /// Strength: light, medium or boozy.
    #[arg(long, value_name = "answer")]
    #[serde(default)]
    pub(crate) light_vs_boozy: Option<String>,
    /// Novelty: classic, modern or experimental.
    #[arg(long, value_name = "answer")]
    #[serde(default)]
    pub(crate) classic_vs_experimental: Option<String>,
    /// Mood: celebratory, elegant, cozy or adventurous.
    #[arg(long, value_name = "answer")]
    #[serde(default)]
    pub(crate) mood: Option<String>,
    /// Number of adjacent alternates to return (default 8).
    #[arg(long = ARG_MAX_ADJACENT, value_name = "count")]
    #[serde(default)]
    pub(crate) max_adjacent: Option<usize>,
    /// Seed for the top-K primary pick.
    #[arg(long = ARG_SEED, value_name = "seed")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// Pick the primary at random from the best `k` candidates.
    #[arg(long = ARG_TOP_K, value_name = "k")]
    #[serde(default)]
    pub(crate) top_k: Option<usize>,
    /// Disable the ingredient and build heuristics used when tags miss.
    #[arg(
        long = ARG_NO_FUZZY,
        num_args = 0..=1,
        default_missing_value = "true",
        value_name = "bool"
    )]
    #[serde(default)]
    pub(crate) no_fuzzy: Option<bool>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }

    fn answers(&self) -> [(Dimension, Option<&str>); 5] {
        [
            (Dimension::SweetVsBitter, self.sweet_vs_bitter.as_deref()),
            (Dimension::CitrusVsStone, self.citrus_vs_stone.as_deref()),
            (Dimension::LightVsBoozy, self.light_vs_boozy.as_deref()),
            (
                Dimension::ClassicVsExperimental,
                self.classic_vs_experimental.as_deref(),
            ),
            (Dimension::Mood, self.mood.as_deref()),
        ]
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    /// Path to the JSON catalog.
    pub(crate) catalog: Utf8PathBuf,
    /// Parsed quiz answers.
    pub(crate) prefs: PreferenceVector,
    /// Adjacent alternates requested.
    pub(crate) max_adjacent: usize,
    /// How the primary is chosen.
    pub(crate) primary_pick: PrimaryPick,
    /// Whether fuzzy fallbacks may award partial credit.
    pub(crate) fuzzy_fallback: bool,
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let mut prefs = PreferenceVector::new();
        for (dimension, answer) in args.answers() {
            if let Some(value) = answer {
                prefs.set_answer(dimension.as_str(), value)?;
            }
        }
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: ENV_RECOMMEND_CATALOG,
        })?;
        let primary_pick = args.top_k.map_or(PrimaryPick::Best, |k| PrimaryPick::SeededTopK {
            k,
            seed: args.seed.unwrap_or_default(),
        });
        Ok(Self {
            catalog,
            prefs,
            max_adjacent: args.max_adjacent.unwrap_or(DEFAULT_MAX_ADJACENT),
            primary_pick,
            fuzzy_fallback: !args.no_fuzzy.unwrap_or(false),
        })
    }
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &mut stdout)
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let result = execute_recommend(&config)?;
    write_json(writer, &result)
}

pub(crate) fn execute_recommend(
    config: &RecommendConfig,
) -> Result<RecommendationResult, CliError> {
    debug!("recommending from {} with {:?}", config.catalog, config.prefs);
    let catalog = FileCatalog::open(&config.catalog)?;
    let scorer = QuizScorer::with_policy(ScoringPolicy {
        fuzzy_fallback: config.fuzzy_fallback,
        ..ScoringPolicy::default()
    });
    let recommender = Recommender::with_config(
        catalog,
        scorer,
        RecommenderConfig {
            max_adjacent: config.max_adjacent,
            primary_pick: config.primary_pick,
            ..RecommenderConfig::default()
        },
    );
    let session = SessionId::new(CLI_SESSION);
    Ok(recommender.recommend(&session, &config.prefs, None)?)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}

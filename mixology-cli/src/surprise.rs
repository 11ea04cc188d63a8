//! Surprise command implementation for the Mixology CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use mixology_core::CatalogEntity;
use mixology_data::FileCatalog;
use mixology_recommender::{Recommender, RecommenderConfig, SessionId};
use mixology_scorer::QuizScorer;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{ARG_CATALOG, ARG_SEED, CLI_SESSION, CliError, ENV_SURPRISE_CATALOG, write_json};

/// CLI arguments for the `surprise` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Pick one cocktail uniformly at random from the catalog. \
                 Pass a seed for a repeatable pick.",
    about = "Pick a random cocktail"
)]
#[ortho_config(prefix = "MIXOLOGY")]
pub(crate) struct SurpriseArgs {
    /// Path to the JSON cocktail catalog.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Seed for a repeatable pick.
    #[arg(long = ARG_SEED, value_name = "seed")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
}

impl SurpriseArgs {
    pub(crate) fn into_config(self) -> Result<SurpriseConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SurpriseConfig::try_from(merged)
    }
}

/// Resolved `surprise` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SurpriseConfig {
    /// Path to the JSON catalog.
    pub(crate) catalog: Utf8PathBuf,
    /// Seed for the pick; `None` draws a fresh one.
    pub(crate) seed: Option<u64>,
}

impl TryFrom<SurpriseArgs> for SurpriseConfig {
    type Error = CliError;

    fn try_from(args: SurpriseArgs) -> Result<Self, Self::Error> {
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: ENV_SURPRISE_CATALOG,
        })?;
        Ok(Self {
            catalog,
            seed: args.seed,
        })
    }
}

pub(crate) fn run_surprise(args: SurpriseArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_surprise_with(args, &mut stdout)
}

pub(crate) fn run_surprise_with(
    args: SurpriseArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let pick = execute_surprise(&config)?;
    write_json(writer, &pick)
}

pub(crate) fn execute_surprise(config: &SurpriseConfig) -> Result<CatalogEntity, CliError> {
    let catalog = FileCatalog::open(&config.catalog)?;
    let recommender = Recommender::with_config(
        catalog,
        QuizScorer::new(),
        RecommenderConfig {
            surprise_seed: config.seed,
            ..RecommenderConfig::default()
        },
    );
    Ok(recommender.recommend_random(&SessionId::new(CLI_SESSION))?)
}

//! Command-line interface for the Mixology recommendation engine.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};
use serde::Serialize;

mod error;
mod recommend;
mod surprise;

pub use error::CliError;

use recommend::{RecommendArgs, run_recommend};
use surprise::{SurpriseArgs, run_surprise};

pub(crate) const ARG_CATALOG: &str = "catalog";
pub(crate) const ARG_MAX_ADJACENT: &str = "max-adjacent";
pub(crate) const ARG_SEED: &str = "seed";
pub(crate) const ARG_TOP_K: &str = "top-k";
pub(crate) const ARG_NO_FUZZY: &str = "no-fuzzy";
pub(crate) const ENV_RECOMMEND_CATALOG: &str = "MIXOLOGY_CMDS_RECOMMEND_CATALOG";
pub(crate) const ENV_SURPRISE_CATALOG: &str = "MIXOLOGY_CMDS_SURPRISE_CATALOG";

/// Session key used for one-shot CLI invocations.
pub(crate) const CLI_SESSION: &str = "cli";

/// Run the Mixology CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration merging,
/// catalog loading or the recommendation itself fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
        Command::Surprise(args) => run_surprise(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "mixology",
    about = "Quiz-driven cocktail recommendations from a JSON catalog",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Recommend a primary cocktail and diverse alternates from quiz answers.
    Recommend(RecommendArgs),
    /// Pick a cocktail at random, ignoring preferences.
    Surprise(SurpriseArgs),
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;

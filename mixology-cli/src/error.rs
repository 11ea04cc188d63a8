//! Error types emitted by the Mixology CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use mixology_core::{PreferenceError, RecommendError};
use mixology_data::CatalogLoadError;
use thiserror::Error;

/// Errors emitted by the Mixology CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name without the leading dashes.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// A quiz answer supplied on the command line was rejected.
    #[error(transparent)]
    Preference(#[from] PreferenceError),
    /// Loading the catalog file failed.
    #[error("failed to load catalog: {0}")]
    LoadCatalog(#[from] CatalogLoadError),
    /// The recommender could not produce a result.
    #[error("recommendation failed: {0}")]
    Recommend(#[from] RecommendError),
    /// Serialising the command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing the command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}

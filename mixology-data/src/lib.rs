//! Catalog ingestion for the Mixology engine.
//!
//! Reads raw cocktail records in the upstream JSON schema, derives their
//! semantic tags once, and produces a validated
//! [`Catalog`](mixology_core::Catalog) snapshot. Scoring never re-derives
//! tags; everything it needs is attached here.
//!
//! # Examples
//!
//! ```no_run
//! use camino::Utf8Path;
//! use mixology_data::load_catalog;
//!
//! let catalog = load_catalog(Utf8Path::new("data/cocktails.json")).expect("load catalog");
//! assert!(!catalog.is_empty());
//! ```

#![forbid(unsafe_code)]

use std::io::{BufReader, Read};
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use log::{debug, warn};
use mixology_core::{
    BuildMethod, Catalog, CatalogEntity, CatalogError, CatalogSource, CatalogUnavailable,
};
use thiserror::Error;

mod raw;
mod tags;

pub use raw::{FlavorProfile, RawCocktail};
pub use tags::{DerivedTags, derive_tags};

/// Errors raised while loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    /// Opening the catalog file failed.
    #[error("failed to open catalog at {path}")]
    Open {
        /// Requested catalog path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The file was not a JSON array of raw cocktail records.
    #[error("failed to parse catalog JSON")]
    Parse {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// A record named an unknown build method.
    #[error("record '{id}' has unknown build method '{method}'")]
    InvalidBuildMethod {
        /// Identifier of the affected record.
        id: String,
        /// Raw build method label.
        method: String,
    },
    /// The records did not form a valid catalog.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Convert one raw record into a tagged catalog entity.
///
/// # Errors
/// Returns [`CatalogLoadError::InvalidBuildMethod`] when the build method
/// label is not recognised.
pub fn build_entity(raw: &RawCocktail) -> Result<CatalogEntity, CatalogLoadError> {
    let method = raw.build_method.parse::<BuildMethod>().map_err(|_| {
        CatalogLoadError::InvalidBuildMethod {
            id: raw.id.clone(),
            method: raw.build_method.clone(),
        }
    })?;
    let tags = derive_tags(raw, method);
    let style = if raw.style.trim().is_empty() {
        raw.name.clone()
    } else {
        raw.style.clone()
    };
    Ok(CatalogEntity::builder(raw.id.trim(), raw.name.trim())
        .style(style)
        .base_spirit(&raw.base_spirit)
        .build_method(method)
        .flavor_tags(tags.flavor)
        .style_tags(tags.style)
        .mood_tags(tags.mood)
        .occasion_tags(tags.occasion)
        .ingredients(raw.ingredients.iter().cloned())
        .balance(raw.flavor.to_balance())
        .build())
}

/// Build a catalog from already-parsed raw records.
///
/// Records with a blank id or name, or an unknown build method, are
/// skipped with a warning.
///
/// # Errors
/// Returns [`CatalogLoadError::Catalog`] when two records share an id.
pub fn catalog_from_records(records: &[RawCocktail]) -> Result<Catalog, CatalogLoadError> {
    let mut entities = Vec::with_capacity(records.len());
    for record in records {
        if record.id.trim().is_empty() || record.name.trim().is_empty() {
            warn!("skipping catalog record without id or name: {record:?}");
            continue;
        }
        match build_entity(record) {
            Ok(entity) => entities.push(entity),
            Err(err) => warn!("skipping catalog record: {err}"),
        }
    }
    let catalog = Catalog::new(entities)?;
    debug!("built catalog with {} entities", catalog.len());
    Ok(catalog)
}

/// Parse a JSON array of raw records from `reader`.
///
/// # Errors
/// Returns [`CatalogLoadError::Parse`] for malformed JSON and propagates
/// [`catalog_from_records`] failures.
pub fn parse_catalog<R: Read>(reader: R) -> Result<Catalog, CatalogLoadError> {
    let records: Vec<RawCocktail> =
        serde_json::from_reader(reader).map_err(|source| CatalogLoadError::Parse { source })?;
    catalog_from_records(&records)
}

/// Load a catalog from a JSON file on disk.
///
/// # Errors
/// Returns [`CatalogLoadError::Open`] when the file cannot be opened and
/// propagates [`parse_catalog`] failures.
pub fn load_catalog(path: &Utf8Path) -> Result<Catalog, CatalogLoadError> {
    let file = fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| {
        CatalogLoadError::Open {
            path: path.to_path_buf(),
            source,
        }
    })?;
    parse_catalog(BufReader::new(file))
}

/// Catalog loaded once from a JSON file.
///
/// An empty file yields a source that reports [`CatalogUnavailable`].
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: Utf8PathBuf,
    catalog: Arc<Catalog>,
}

impl FileCatalog {
    /// Load the catalog at `path`.
    ///
    /// # Errors
    /// Propagates [`load_catalog`] failures.
    pub fn open(path: &Utf8Path) -> Result<Self, CatalogLoadError> {
        let catalog = load_catalog(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            catalog: Arc::new(catalog),
        })
    }

    /// Path the catalog was loaded from.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl CatalogSource for FileCatalog {
    fn snapshot(&self) -> Result<Arc<Catalog>, CatalogUnavailable> {
        if self.catalog.is_empty() {
            return Err(CatalogUnavailable::new(format!(
                "catalog at {} contains no cocktails",
                self.path
            )));
        }
        Ok(Arc::clone(&self.catalog))
    }
}

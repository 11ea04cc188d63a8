//! Catalog snapshots and the data-access seam used by the recommender.
//!
//! A [`Catalog`] is an immutable, validated set of [`CatalogEntity`]
//! values. The [`CatalogSource`] trait lets the recommender obtain a
//! snapshot without caring how it was loaded.

use std::collections::HashSet;
use std::sync::Arc;

use thiserror::Error;

use crate::CatalogEntity;

/// Errors returned by [`Catalog::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two entities shared an identifier.
    #[error("catalog contains duplicate entity id '{id}'")]
    DuplicateId {
        /// The repeated identifier.
        id: String,
    },
}

/// Validated snapshot of catalog entities.
///
/// Identifiers are unique within a snapshot. Entities keep the order in
/// which they were supplied.
///
/// # Examples
/// ```
/// use mixology_core::{Catalog, CatalogEntity};
///
/// let catalog = Catalog::new(vec![
///     CatalogEntity::builder("a", "Alpha").build(),
///     CatalogEntity::builder("b", "Beta").build(),
/// ])?;
/// assert_eq!(catalog.len(), 2);
/// assert!(catalog.get("b").is_some());
/// # Ok::<(), mixology_core::CatalogError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    entities: Vec<CatalogEntity>,
}

impl Catalog {
    /// Validate and construct a catalog snapshot.
    ///
    /// # Errors
    /// Returns [`CatalogError::DuplicateId`] when two entities share an id.
    pub fn new(entities: Vec<CatalogEntity>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(entities.len());
        for entity in &entities {
            if !seen.insert(entity.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: entity.id.clone(),
                });
            }
        }
        Ok(Self { entities })
    }

    /// Construct an empty catalog.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            entities: Vec::new(),
        }
    }

    /// Borrow the entities in load order.
    #[must_use]
    pub fn entities(&self) -> &[CatalogEntity] {
        &self.entities
    }

    /// Look up an entity by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CatalogEntity> {
        self.entities.iter().find(|entity| entity.id == id)
    }

    /// Number of entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Report whether the catalog has no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// Raised when no catalog data can be supplied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("catalog unavailable: {reason}")]
pub struct CatalogUnavailable {
    /// Human-readable explanation from the source.
    pub reason: String,
}

impl CatalogUnavailable {
    /// Construct the condition with an explanation.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Supply catalog snapshots to the recommender.
///
/// Implementations must be thread-safe so a recommender can serve
/// concurrent sessions. Returning an empty catalog is allowed; callers
/// treat it the same as [`CatalogUnavailable`].
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use mixology_core::{Catalog, CatalogEntity, CatalogSource};
///
/// let source = Arc::new(Catalog::new(vec![CatalogEntity::builder("a", "Alpha").build()])?);
/// assert_eq!(source.snapshot().map(|c| c.len()), Ok(1));
/// # Ok::<(), mixology_core::CatalogError>(())
/// ```
pub trait CatalogSource: Send + Sync {
    /// Return the current catalog snapshot.
    ///
    /// # Errors
    /// Returns [`CatalogUnavailable`] when the collaborator cannot supply
    /// data.
    fn snapshot(&self) -> Result<Arc<Catalog>, CatalogUnavailable>;
}

impl CatalogSource for Arc<Catalog> {
    fn snapshot(&self) -> Result<Arc<Catalog>, CatalogUnavailable> {
        Ok(Self::clone(self))
    }
}

impl CatalogSource for Option<Arc<Catalog>> {
    fn snapshot(&self) -> Result<Arc<Catalog>, CatalogUnavailable> {
        self.clone()
            .ok_or_else(|| CatalogUnavailable::new("no catalog has been loaded"))
    }
}

use geoquiz_core::model::{RegionData, RegionId};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors surfaced while building or loading a question catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("duplicate region id: {0}")]
    Duplicate(RegionId),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("catalog key {key} does not match embedded id {id:?}")]
    IdMismatch { key: String, id: String },

    #[error("invalid catalog record for region {region}: {source}")]
    InvalidRecord {
        region: String,
        #[source]
        source: geoquiz_core::Error,
    },
}

/// Read-only question catalog contract.
///
/// Catalogs are pre-loaded and never mutated, so lookups are synchronous and
/// hand out borrowed data.
pub trait CatalogRepository: Send + Sync {
    /// Fetch a region by id.
    fn region(&self, id: &RegionId) -> Option<&RegionData>;

    /// All region ids, sorted.
    fn region_ids(&self) -> Vec<RegionId>;

    /// Number of regions in the catalog.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, id: &RegionId) -> bool {
        self.region(id).is_some()
    }
}

/// Catalog held entirely in memory, keyed and iterated by region id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    regions: BTreeMap<RegionId, RegionData>,
}

impl InMemoryCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a list of regions.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Duplicate` if two regions share an id.
    pub fn from_regions(
        regions: impl IntoIterator<Item = RegionData>,
    ) -> Result<Self, StorageError> {
        let mut catalog = Self::new();
        for region in regions {
            catalog.insert(region)?;
        }
        Ok(catalog)
    }

    /// Add a region while assembling the catalog.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Duplicate` if the id is already present.
    pub fn insert(&mut self, region: RegionData) -> Result<(), StorageError> {
        if self.regions.contains_key(region.id()) {
            return Err(StorageError::Duplicate(region.id().clone()));
        }
        self.regions.insert(region.id().clone(), region);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegionData> {
        self.regions.values()
    }
}

impl CatalogRepository for InMemoryCatalog {
    fn region(&self, id: &RegionId) -> Option<&RegionData> {
        self.regions.get(id)
    }

    fn region_ids(&self) -> Vec<RegionId> {
        self.regions.keys().cloned().collect()
    }

    fn len(&self) -> usize {
        self.regions.len()
    }
}

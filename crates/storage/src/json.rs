//! JSON catalog loading.
//!
//! The on-disk shape is an object keyed by region id:
//!
//! ```json
//! {
//!   "varna": {
//!     "id": "varna",
//!     "name": "Варна",
//!     "questions": [
//!       { "question": "…", "options": ["…", "…", "…"], "correctIndex": 1 }
//!     ]
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use geoquiz_core::model::{RegionData, RegionId, RegionQuestion};
use serde::Deserialize;
use tracing::{debug, info};

use crate::repository::{CatalogRepository, InMemoryCatalog, StorageError};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RegionRecord {
    id: String,
    name: String,
    questions: Vec<QuestionRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct QuestionRecord {
    question: String,
    options: Vec<String>,
    correct_index: u8,
}

fn invalid(region: &str, e: impl Into<geoquiz_core::Error>) -> StorageError {
    StorageError::InvalidRecord {
        region: region.to_owned(),
        source: e.into(),
    }
}

fn map_question(region: &str, record: QuestionRecord) -> Result<RegionQuestion, StorageError> {
    RegionQuestion::new(record.question, record.options, record.correct_index)
        .map_err(|e| invalid(region, e))
}

fn map_region(key: &str, record: RegionRecord) -> Result<RegionData, StorageError> {
    if record.id != key {
        return Err(StorageError::IdMismatch {
            key: key.to_owned(),
            id: record.id,
        });
    }
    let id = RegionId::new(record.id).map_err(|e| invalid(key, e))?;
    let questions = record
        .questions
        .into_iter()
        .map(|q| map_question(key, q))
        .collect::<Result<Vec<_>, _>>()?;
    RegionData::new(id, record.name, questions).map_err(|e| invalid(key, e))
}

/// Parse and validate a catalog from a JSON string.
///
/// # Errors
///
/// Returns `StorageError::Serialization` for malformed JSON and
/// `StorageError::InvalidRecord` for the first region that fails validation.
pub fn load_catalog_str(json: &str) -> Result<InMemoryCatalog, StorageError> {
    let records: BTreeMap<String, RegionRecord> =
        serde_json::from_str(json).map_err(|e| StorageError::Serialization(e.to_string()))?;

    let mut catalog = InMemoryCatalog::new();
    for (key, record) in records {
        let region = map_region(&key, record)?;
        debug!(region = %region.id(), "loaded catalog region");
        catalog.insert(region)?;
    }
    Ok(catalog)
}

/// Read and validate a catalog file.
///
/// # Errors
///
/// Returns `StorageError::Io` if the file cannot be read, otherwise the same
/// errors as [`load_catalog_str`].
pub fn load_catalog_file(path: impl AsRef<Path>) -> Result<InMemoryCatalog, StorageError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)?;
    let catalog = load_catalog_str(&raw)?;
    info!(path = %path.display(), regions = catalog.len(), "question catalog loaded");
    Ok(catalog)
}

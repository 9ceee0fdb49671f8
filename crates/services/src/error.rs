//! Shared error types for the services crate.

use thiserror::Error;

use geoquiz_core::model::{QuizSettingsError, RegionId};
use storage::StorageError;

/// Errors emitted when starting a quiz session.
///
/// The host turns these into logged no-ops; they never reach the UI.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("region {0} is not in the catalog")]
    UnknownRegion(RegionId),
    #[error("a session for region {0} is already active")]
    SessionActive(RegionId),
}

/// Errors emitted while reading configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("{var} is not a valid number: {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    #[error(transparent)]
    Settings(#[from] QuizSettingsError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error("no catalog path configured")]
    MissingCatalogPath,
    #[error("question catalog is empty")]
    EmptyCatalog,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

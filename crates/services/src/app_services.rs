use std::sync::Arc;

use geoquiz_core::model::QuizSettings;
use storage::{CatalogRepository, load_catalog_file};
use tracing::info;

use crate::Clock;
use crate::config::QuizConfig;
use crate::error::AppServicesError;
use crate::sessions::QuizHost;

/// Assembles app-facing services around a loaded question catalog.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    settings: QuizSettings,
    catalog: Arc<dyn CatalogRepository>,
}

impl AppServices {
    /// Build services over an already loaded catalog.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::EmptyCatalog` if the catalog has no regions.
    pub fn new(
        catalog: Arc<dyn CatalogRepository>,
        settings: QuizSettings,
        clock: Clock,
    ) -> Result<Self, AppServicesError> {
        if catalog.is_empty() {
            return Err(AppServicesError::EmptyCatalog);
        }
        Ok(Self {
            clock,
            settings,
            catalog,
        })
    }

    /// Load the catalog named by `config` and build services.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::MissingCatalogPath` if no path is configured,
    /// `AppServicesError::Storage` if the catalog fails to load, and
    /// `AppServicesError::EmptyCatalog` if it has no regions.
    pub fn from_config(config: &QuizConfig, clock: Clock) -> Result<Self, AppServicesError> {
        let path = config
            .catalog_path
            .as_ref()
            .ok_or(AppServicesError::MissingCatalogPath)?;
        let catalog = load_catalog_file(path)?;
        info!(path = %path.display(), "app services ready");
        Self::new(Arc::new(catalog), config.settings.clone(), clock)
    }

    /// Same as [`from_config`](Self::from_config) using `GEOQUIZ_*` variables.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Config` for invalid variables, otherwise the
    /// errors of [`from_config`](Self::from_config).
    pub fn from_env(clock: Clock) -> Result<Self, AppServicesError> {
        let config = QuizConfig::from_env()?;
        Self::from_config(&config, clock)
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<dyn CatalogRepository> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    /// Fresh host with an empty results store.
    #[must_use]
    pub fn quiz_host(&self) -> QuizHost {
        QuizHost::new(Arc::clone(&self.catalog), self.settings.clone(), self.clock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::InMemoryCatalog;

    #[test]
    fn empty_catalog_is_rejected() {
        let err = AppServices::new(
            Arc::new(InMemoryCatalog::new()),
            QuizSettings::default(),
            Clock::default(),
        )
        .err()
        .unwrap();
        assert!(matches!(err, AppServicesError::EmptyCatalog));
    }

    #[test]
    fn missing_catalog_path_is_reported() {
        let err = AppServices::from_config(&QuizConfig::default(), Clock::default())
            .err()
            .unwrap();
        assert!(matches!(err, AppServicesError::MissingCatalogPath));
    }
}

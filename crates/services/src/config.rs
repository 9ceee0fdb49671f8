use std::env;
use std::path::PathBuf;
use std::time::Duration;

use geoquiz_core::model::{QuizSettings, QuizSettingsDraft};

use crate::error::ConfigError;

pub const CATALOG_PATH_VAR: &str = "GEOQUIZ_CATALOG_PATH";
pub const GOOD_RATIO_VAR: &str = "GEOQUIZ_GOOD_RATIO";
pub const CLOSE_DELAY_MS_VAR: &str = "GEOQUIZ_CLOSE_DELAY_MS";

/// Runtime configuration: where the catalog lives and the quiz tunables.
#[derive(Clone, Debug, Default)]
pub struct QuizConfig {
    pub catalog_path: Option<PathBuf>,
    pub settings: QuizSettings,
}

impl QuizConfig {
    /// Read configuration from `GEOQUIZ_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a numeric variable does not parse or the
    /// resulting settings fail validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    ///
    /// # Errors
    ///
    /// See [`from_env`](Self::from_env).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
        };

        let good_ratio = var(GOOD_RATIO_VAR)
            .map(|raw| {
                raw.parse::<f64>().map_err(|_| ConfigError::InvalidNumber {
                    var: GOOD_RATIO_VAR,
                    value: raw,
                })
            })
            .transpose()?;
        let close_delay = var(CLOSE_DELAY_MS_VAR)
            .map(|raw| {
                raw.parse::<u64>()
                    .map(Duration::from_millis)
                    .map_err(|_| ConfigError::InvalidNumber {
                        var: CLOSE_DELAY_MS_VAR,
                        value: raw,
                    })
            })
            .transpose()?;

        let settings = QuizSettingsDraft {
            good_ratio,
            close_delay,
        }
        .validate()?;

        Ok(Self {
            catalog_path: var(CATALOG_PATH_VAR).map(PathBuf::from),
            settings,
        })
    }
}

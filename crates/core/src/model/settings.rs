use std::time::Duration;
use thiserror::Error;

use crate::model::result::DEFAULT_GOOD_RATIO;

/// Default cosmetic delay before the quiz popup is torn down.
pub const DEFAULT_CLOSE_DELAY: Duration = Duration::from_millis(300);

const MAX_CLOSE_DELAY: Duration = Duration::from_secs(5);

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum QuizSettingsError {
    #[error("good ratio must be in (0, 1), got {0}")]
    InvalidGoodRatio(f64),

    #[error("close delay must be at most 5s, got {0:?}")]
    InvalidCloseDelay(Duration),
}

/// Tunables shared by the results store and the UI collaborators.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSettings {
    good_ratio: f64,
    close_delay: Duration,
}

#[derive(Debug, Clone, Default)]
pub struct QuizSettingsDraft {
    pub good_ratio: Option<f64>,
    pub close_delay: Option<Duration>,
}

impl QuizSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill unset fields with defaults and validate.
    ///
    /// # Errors
    ///
    /// Returns `QuizSettingsError` if the good ratio is outside `(0, 1)` or the
    /// close delay exceeds five seconds.
    pub fn validate(self) -> Result<QuizSettings, QuizSettingsError> {
        let good_ratio = self.good_ratio.unwrap_or(DEFAULT_GOOD_RATIO);
        if !(good_ratio > 0.0 && good_ratio < 1.0) {
            return Err(QuizSettingsError::InvalidGoodRatio(good_ratio));
        }

        let close_delay = self.close_delay.unwrap_or(DEFAULT_CLOSE_DELAY);
        if close_delay > MAX_CLOSE_DELAY {
            return Err(QuizSettingsError::InvalidCloseDelay(close_delay));
        }

        Ok(QuizSettings {
            good_ratio,
            close_delay,
        })
    }
}

impl QuizSettings {
    #[must_use]
    pub fn good_ratio(&self) -> f64 {
        self.good_ratio
    }

    /// Rendering-only delay; results are recorded before it starts.
    #[must_use]
    pub fn close_delay(&self) -> Duration {
        self.close_delay
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            good_ratio: DEFAULT_GOOD_RATIO,
            close_delay: DEFAULT_CLOSE_DELAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_draft_yields_defaults() {
        let settings = QuizSettingsDraft::new().validate().unwrap();
        assert_eq!(settings, QuizSettings::default());
        assert_eq!(settings.close_delay(), Duration::from_millis(300));
    }

    #[test]
    fn rejects_out_of_range_ratio() {
        for ratio in [0.0, 1.0, -0.5, f64::NAN] {
            let err = QuizSettingsDraft {
                good_ratio: Some(ratio),
                ..QuizSettingsDraft::default()
            }
            .validate()
            .unwrap_err();
            assert!(matches!(err, QuizSettingsError::InvalidGoodRatio(_)));
        }
    }

    #[test]
    fn rejects_long_close_delay() {
        let err = QuizSettingsDraft {
            close_delay: Some(Duration::from_secs(10)),
            ..QuizSettingsDraft::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, QuizSettingsError::InvalidCloseDelay(Duration::from_secs(10)));
    }
}

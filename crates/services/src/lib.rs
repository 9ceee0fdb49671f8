#![forbid(unsafe_code)]

pub mod app_services;
pub mod config;
pub mod error;
pub mod results;
pub mod sessions;
pub mod views;

pub use geoquiz_core::Clock;

pub use app_services::AppServices;
pub use config::QuizConfig;
pub use error::{AppServicesError, ConfigError, SessionError};
pub use results::{CompletionMonitor, HeaderStats, QuizSummary, ResultsSnapshot, ResultsStore};
pub use sessions::{
    FinishedSession, HostEvent, QuizHost, QuizSession, SessionAction, SessionPhase, Transition,
};
pub use views::{LegendEntry, RegionBadge, RegionMarker, legend, region_markers};

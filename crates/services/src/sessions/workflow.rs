use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use geoquiz_core::Clock;
use geoquiz_core::model::{AnswerIndex, QuizSettings, RegionId, RegionResult};
use storage::CatalogRepository;

use super::service::QuizSession;
use super::state::{SessionAction, Transition};
use crate::error::SessionError;
use crate::results::{CompletionMonitor, QuizSummary, ResultsStore};

/// A finalized attempt, as written to the results store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishedSession {
    pub region_id: RegionId,
    pub result: RegionResult,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

/// What a host action did, for the UI to react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// Invalid or ignored action; nothing changed.
    Ignored,
    SessionStarted(RegionId),
    /// The active session changed locally (selection, reveal, next question).
    SessionUpdated,
    /// The active session was closed without a result.
    SessionAbandoned(RegionId),
    ResultRecorded(FinishedSession),
    /// The recorded result completed the map for the first time.
    QuizCompleted {
        finished: FinishedSession,
        summary: QuizSummary,
    },
}

/// Session host: runs at most one quiz session and owns the results.
///
/// Every user action degrades to [`HostEvent::Ignored`] instead of failing.
/// Finalizing records the result before the event is returned; any close
/// animation the UI plays afterwards cannot delay or repeat the write.
pub struct QuizHost {
    clock: Clock,
    settings: QuizSettings,
    catalog: Arc<dyn CatalogRepository>,
    results: ResultsStore,
    monitor: CompletionMonitor,
    active: Option<QuizSession>,
}

impl QuizHost {
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogRepository>, settings: QuizSettings, clock: Clock) -> Self {
        let results = ResultsStore::new(catalog.as_ref(), &settings);
        Self {
            clock,
            settings,
            catalog,
            results,
            monitor: CompletionMonitor::new(),
            active: None,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &dyn CatalogRepository {
        self.catalog.as_ref()
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    #[must_use]
    pub fn results(&self) -> &ResultsStore {
        &self.results
    }

    #[must_use]
    pub fn active_session(&self) -> Option<&QuizSession> {
        self.active.as_ref()
    }

    /// Start a session for `region_id`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownRegion` for ids outside the catalog and
    /// `SessionError::SessionActive` while another session is open.
    pub fn start_session(&mut self, region_id: &RegionId) -> Result<&QuizSession, SessionError> {
        if let Some(active) = &self.active {
            return Err(SessionError::SessionActive(active.region_id().clone()));
        }
        let region = self
            .catalog
            .region(region_id)
            .ok_or_else(|| SessionError::UnknownRegion(region_id.clone()))?;

        let session = QuizSession::start(region, self.clock.now());
        debug!(region = %region_id, "quiz session started");
        Ok(&*self.active.insert(session))
    }

    /// UI entry point for clicking a region: starts a session or does nothing.
    pub fn select_region(&mut self, region_id: &RegionId) -> HostEvent {
        match self.start_session(region_id) {
            Ok(_) => HostEvent::SessionStarted(region_id.clone()),
            Err(err) => {
                debug!(error = %err, "region selection ignored");
                HostEvent::Ignored
            }
        }
    }

    pub fn select_option(&mut self, index: AnswerIndex) -> HostEvent {
        self.dispatch(SessionAction::Select(index))
    }

    pub fn confirm(&mut self) -> HostEvent {
        self.dispatch(SessionAction::Confirm)
    }

    pub fn advance(&mut self) -> HostEvent {
        self.dispatch(SessionAction::Advance)
    }

    pub fn close(&mut self) -> HostEvent {
        self.dispatch(SessionAction::Close)
    }

    /// Forward an action to the active session and apply its effect.
    pub fn dispatch(&mut self, action: SessionAction) -> HostEvent {
        let Some(session) = self.active.as_mut() else {
            debug!(?action, "no active session");
            return HostEvent::Ignored;
        };

        match session.apply(action) {
            Transition::Applied => HostEvent::SessionUpdated,
            Transition::Ignored(_) => HostEvent::Ignored,
            Transition::Abandoned => {
                let region_id = session.region_id().clone();
                self.active = None;
                debug!(region = %region_id, "quiz session abandoned");
                HostEvent::SessionAbandoned(region_id)
            }
            Transition::Finalized { score, total } => {
                let region_id = session.region_id().clone();
                let started_at = session.started_at();
                self.active = None;
                self.finish(region_id, started_at, score, total)
            }
        }
    }

    fn finish(
        &mut self,
        region_id: RegionId,
        started_at: DateTime<Utc>,
        score: u32,
        total: u32,
    ) -> HostEvent {
        if !self.results.record_result(&region_id, score, total) {
            return HostEvent::Ignored;
        }
        let Some(result) = self.results.get(&region_id).copied() else {
            return HostEvent::Ignored;
        };
        info!(region = %region_id, %result, "quiz session finalized");

        let finished = FinishedSession {
            region_id,
            result,
            started_at,
            completed_at: self.clock.now(),
        };
        match self.monitor.observe(&self.results) {
            Some(summary) => HostEvent::QuizCompleted { finished, summary },
            None => HostEvent::ResultRecorded(finished),
        }
    }

    /// Clear all results and start over; any open session is discarded.
    pub fn restart(&mut self) {
        if let Some(session) = self.active.take() {
            debug!(region = %session.region_id(), "discarding active session on restart");
        }
        self.results.clear();
        self.monitor.reset();
        info!("quiz restarted");
    }

    #[cfg(test)]
    fn advance_clock(&mut self, delta: chrono::Duration) {
        self.clock.advance(delta);
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

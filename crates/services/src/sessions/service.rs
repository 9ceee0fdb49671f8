use chrono::{DateTime, Utc};
use std::fmt;
use tracing::debug;

use geoquiz_core::model::{AnswerIndex, RegionData, RegionId, RegionQuestion};

use super::progress::SessionProgress;
use super::state::{SessionAction, SessionPhase, SessionState, Transition, transition};
use super::view::QuestionView;

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One attempt at a region's fixed question sequence.
///
/// Wraps the pure [`transition`] function with the region data it runs over.
/// The session never touches the results store; callers act on the
/// [`Transition::Finalized`] effect.
#[derive(Clone)]
pub struct QuizSession {
    region: RegionData,
    state: SessionState,
    started_at: DateTime<Utc>,
}

impl QuizSession {
    /// Start a fresh session. `total` is always re-derived from the region.
    #[must_use]
    pub fn start(region: &RegionData, started_at: DateTime<Utc>) -> Self {
        Self {
            region: region.clone(),
            state: SessionState::new(region.total()),
            started_at,
        }
    }

    #[must_use]
    pub fn region_id(&self) -> &RegionId {
        self.region.id()
    }

    #[must_use]
    pub fn region(&self) -> &RegionData {
        &self.region
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.state.phase()
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state.phase().is_terminal()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&RegionQuestion> {
        if self.is_finished() {
            return None;
        }
        self.region.question(self.state.question_index())
    }

    pub fn select_option(&mut self, index: AnswerIndex) -> Transition {
        self.apply(SessionAction::Select(index))
    }

    pub fn confirm(&mut self) -> Transition {
        self.apply(SessionAction::Confirm)
    }

    pub fn advance(&mut self) -> Transition {
        self.apply(SessionAction::Advance)
    }

    pub fn close(&mut self) -> Transition {
        self.apply(SessionAction::Close)
    }

    /// Apply an action and keep the resulting state.
    pub fn apply(&mut self, action: SessionAction) -> Transition {
        let (next, effect) = transition(&self.state, action, &self.region);
        if let Transition::Ignored(reason) = effect {
            debug!(region = %self.region.id(), ?action, ?reason, "session action ignored");
        }
        self.state = next;
        effect
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            question_number: self.state.question_index() + 1,
            total: self.state.total() as usize,
            score: self.state.score(),
            is_last_question: self.state.is_last_question(),
            is_finished: self.is_finished(),
        }
    }

    /// View of the question on screen; `None` once the session has ended.
    #[must_use]
    pub fn question_view(&self) -> Option<QuestionView<'_>> {
        let question = self.current_question()?;
        let revealed = self.state.is_revealed();
        Some(QuestionView {
            region_name: self.region.name(),
            number: self.state.question_index() + 1,
            total: self.state.total() as usize,
            prompt: question.prompt(),
            options: question.options(),
            selected: self.state.selected(),
            revealed,
            correct: revealed.then(|| question.correct_index()),
            is_last: self.state.is_last_question(),
        })
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("region_id", self.region.id())
            .field("state", &self.state)
            .field("started_at", &self.started_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

use geoquiz_core::model::{AnswerIndex, RegionData};

//
// ─── STATES & ACTIONS ──────────────────────────────────────────────────────────
//

/// Named states of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// The current question has not been confirmed yet.
    AwaitingSelection,
    /// The current answer is confirmed and locked.
    Revealed,
    /// The last question was advanced past; the score is final.
    Finalized,
    /// Closed before finalizing; nothing is reported.
    Abandoned,
}

impl SessionPhase {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionPhase::Finalized | SessionPhase::Abandoned)
    }
}

/// User actions a session host can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    Select(AnswerIndex),
    Confirm,
    Advance,
    Close,
}

/// Why an action left the state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredReason {
    /// Selection or confirmation after the answer was revealed.
    AnswerLocked,
    /// Confirmation without a selected option.
    NoSelection,
    /// Advance before the current answer was revealed.
    NotRevealed,
    /// Any action after finalize or abandon.
    SessionEnded,
}

/// Observable effect of applying one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Local state changed; nothing to report.
    Applied,
    Ignored(IgnoredReason),
    /// Terminal: report `(score, total)` to the results store.
    Finalized { score: u32, total: u32 },
    /// Terminal: discard without reporting.
    Abandoned,
}

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Snapshot of a session's progress through its question sequence.
///
/// Invariant: `score <= question_index + (revealed ? 1 : 0)`; a question adds
/// to the score only when it is revealed with the correct option selected.
/// `revealed` survives into the terminal phases unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    phase: SessionPhase,
    question_index: usize,
    selected: Option<AnswerIndex>,
    revealed: bool,
    score: u32,
    total: u32,
}

impl SessionState {
    /// Initial state for a session over `total` questions.
    #[must_use]
    pub fn new(total: u32) -> Self {
        Self {
            phase: SessionPhase::AwaitingSelection,
            question_index: 0,
            selected: None,
            revealed: false,
            score: 0,
            total,
        }
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn question_index(&self) -> usize {
        self.question_index
    }

    #[must_use]
    pub fn selected(&self) -> Option<AnswerIndex> {
        self.selected
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.question_index + 1 >= self.total as usize
    }

    /// Whether the score is within what the answered questions allow.
    #[must_use]
    pub fn score_is_consistent(&self) -> bool {
        self.score as usize <= self.question_index + usize::from(self.revealed)
    }

    fn ignored(&self, reason: IgnoredReason) -> (SessionState, Transition) {
        (self.clone(), Transition::Ignored(reason))
    }
}

//
// ─── TRANSITIONS ───────────────────────────────────────────────────────────────
//

/// Pure transition function: `(state, action) -> (state', effect)`.
///
/// The score is incremented exactly once per question, at confirmation time.
/// Finalizing reports the accumulated score as-is.
#[must_use]
pub fn transition(
    state: &SessionState,
    action: SessionAction,
    region: &RegionData,
) -> (SessionState, Transition) {
    if state.phase.is_terminal() {
        return state.ignored(IgnoredReason::SessionEnded);
    }

    let (next, effect) = match (state.phase, action) {
        (_, SessionAction::Close) => {
            let next = SessionState {
                phase: SessionPhase::Abandoned,
                ..state.clone()
            };
            (next, Transition::Abandoned)
        }

        (SessionPhase::AwaitingSelection, SessionAction::Select(index)) => {
            let next = SessionState {
                selected: Some(index),
                ..state.clone()
            };
            (next, Transition::Applied)
        }
        (SessionPhase::Revealed, SessionAction::Select(_) | SessionAction::Confirm) => {
            return state.ignored(IgnoredReason::AnswerLocked);
        }

        (SessionPhase::AwaitingSelection, SessionAction::Confirm) => {
            let Some(selected) = state.selected else {
                return state.ignored(IgnoredReason::NoSelection);
            };
            let correct = region
                .question(state.question_index)
                .is_some_and(|q| q.is_correct(selected));
            let next = SessionState {
                phase: SessionPhase::Revealed,
                revealed: true,
                score: state.score + u32::from(correct),
                ..state.clone()
            };
            (next, Transition::Applied)
        }

        (SessionPhase::AwaitingSelection, SessionAction::Advance) => {
            return state.ignored(IgnoredReason::NotRevealed);
        }
        (SessionPhase::Revealed, SessionAction::Advance) if state.is_last_question() => {
            let next = SessionState {
                phase: SessionPhase::Finalized,
                ..state.clone()
            };
            let effect = Transition::Finalized {
                score: next.score,
                total: next.total,
            };
            (next, effect)
        }
        (SessionPhase::Revealed, SessionAction::Advance) => {
            let next = SessionState {
                phase: SessionPhase::AwaitingSelection,
                question_index: state.question_index + 1,
                selected: None,
                revealed: false,
                ..state.clone()
            };
            (next, Transition::Applied)
        }

        (SessionPhase::Finalized | SessionPhase::Abandoned, _) => {
            return state.ignored(IgnoredReason::SessionEnded);
        }
    };

    debug_assert!(next.score_is_consistent(), "score exceeds answered questions");
    (next, effect)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

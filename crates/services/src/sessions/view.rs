use geoquiz_core::model::{AnswerIndex, OPTIONS_PER_QUESTION};

/// Display state of a single answer option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionState {
    Idle,
    Selected,
    /// The correct option, shown once the answer is revealed.
    RevealedCorrect,
    /// The selected option after a wrong reveal.
    Incorrect,
}

/// Presentation-agnostic view of the question currently on screen.
///
/// Borrowed from the session; the UI decides labels, icons and wording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView<'a> {
    pub region_name: &'a str,
    /// 1-based question number.
    pub number: usize,
    pub total: usize,
    pub prompt: &'a str,
    pub options: &'a [String; OPTIONS_PER_QUESTION],
    pub selected: Option<AnswerIndex>,
    pub revealed: bool,
    /// Only exposed after the answer is revealed.
    pub correct: Option<AnswerIndex>,
    pub is_last: bool,
}

impl QuestionView<'_> {
    /// `Some(true)` / `Some(false)` once revealed, `None` before.
    #[must_use]
    pub fn answered_correctly(&self) -> Option<bool> {
        match (self.revealed, self.selected, self.correct) {
            (true, Some(selected), Some(correct)) => Some(selected == correct),
            _ => None,
        }
    }

    /// Confirm is offered only for an unrevealed question with a selection.
    #[must_use]
    pub fn can_confirm(&self) -> bool {
        !self.revealed && self.selected.is_some()
    }

    #[must_use]
    pub fn option_states(&self) -> [OptionState; OPTIONS_PER_QUESTION] {
        let mut states = [OptionState::Idle; OPTIONS_PER_QUESTION];
        for index in AnswerIndex::all() {
            let is_selected = self.selected == Some(index);
            states[index.as_usize()] = if self.revealed {
                if self.correct == Some(index) {
                    OptionState::RevealedCorrect
                } else if is_selected {
                    OptionState::Incorrect
                } else {
                    OptionState::Idle
                }
            } else if is_selected {
                OptionState::Selected
            } else {
                OptionState::Idle
            };
        }
        states
    }
}

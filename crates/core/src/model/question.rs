use std::fmt;
use thiserror::Error;

/// Number of answer options every catalog question carries.
pub const OPTIONS_PER_QUESTION: usize = 3;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("expected 3 options, got {0}")]
    WrongOptionCount(usize),

    #[error("option {0} cannot be empty")]
    EmptyOption(usize),

    #[error("answer index {0} is out of range")]
    InvalidAnswerIndex(u8),
}

//
// ─── ANSWER INDEX ──────────────────────────────────────────────────────────────
//

/// Position of an option within a question, always in `0..OPTIONS_PER_QUESTION`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnswerIndex(u8);

impl AnswerIndex {
    /// Converts a raw option position into an `AnswerIndex`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::InvalidAnswerIndex` for values outside `0..=2`.
    pub fn new(value: u8) -> Result<Self, QuestionError> {
        if usize::from(value) < OPTIONS_PER_QUESTION {
            Ok(Self(value))
        } else {
            Err(QuestionError::InvalidAnswerIndex(value))
        }
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn as_usize(self) -> usize {
        usize::from(self.0)
    }

    /// All valid indices in display order.
    pub fn all() -> impl Iterator<Item = AnswerIndex> {
        (0..OPTIONS_PER_QUESTION as u8).map(AnswerIndex)
    }
}

impl fmt::Display for AnswerIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// One multiple-choice question about a region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionQuestion {
    prompt: String,
    options: [String; OPTIONS_PER_QUESTION],
    correct: AnswerIndex,
}

impl RegionQuestion {
    /// Builds a validated question.
    ///
    /// Prompt and options are trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt or any option is blank, the option
    /// count is not exactly three, or `correct_index` is out of range.
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_index: u8,
    ) -> Result<Self, QuestionError> {
        let prompt: String = prompt.into();
        let prompt = prompt.trim().to_owned();
        if prompt.is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }

        let options: Vec<String> = options.into_iter().map(|o| o.trim().to_owned()).collect();
        if let Some(pos) = options.iter().position(String::is_empty) {
            return Err(QuestionError::EmptyOption(pos));
        }
        let options: [String; OPTIONS_PER_QUESTION] = options
            .try_into()
            .map_err(|v: Vec<String>| QuestionError::WrongOptionCount(v.len()))?;

        Ok(Self {
            prompt,
            options,
            correct: AnswerIndex::new(correct_index)?,
        })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String; OPTIONS_PER_QUESTION] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, index: AnswerIndex) -> &str {
        &self.options[index.as_usize()]
    }

    #[must_use]
    pub fn correct_index(&self) -> AnswerIndex {
        self.correct
    }

    #[must_use]
    pub fn is_correct(&self, answer: AnswerIndex) -> bool {
        answer == self.correct
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

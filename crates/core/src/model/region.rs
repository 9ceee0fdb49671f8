use thiserror::Error;

use crate::model::ids::RegionId;
use crate::model::question::RegionQuestion;

/// Every catalog region is quizzed with exactly this many questions.
pub const QUESTIONS_PER_REGION: usize = 3;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RegionError {
    #[error("region name cannot be empty")]
    EmptyName,

    #[error("expected 3 questions, got {0}")]
    WrongQuestionCount(usize),
}

/// A catalog region: its id, display name and fixed question sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionData {
    id: RegionId,
    name: String,
    questions: [RegionQuestion; QUESTIONS_PER_REGION],
}

impl RegionData {
    /// # Errors
    ///
    /// Returns `RegionError::EmptyName` for a blank name and
    /// `RegionError::WrongQuestionCount` unless exactly three questions are given.
    pub fn new(
        id: RegionId,
        name: impl Into<String>,
        questions: Vec<RegionQuestion>,
    ) -> Result<Self, RegionError> {
        let name: String = name.into();
        let name = name.trim().to_owned();
        if name.is_empty() {
            return Err(RegionError::EmptyName);
        }
        let questions: [RegionQuestion; QUESTIONS_PER_REGION] = questions
            .try_into()
            .map_err(|v: Vec<RegionQuestion>| RegionError::WrongQuestionCount(v.len()))?;

        Ok(Self {
            id,
            name,
            questions,
        })
    }

    #[must_use]
    pub fn id(&self) -> &RegionId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn questions(&self) -> &[RegionQuestion; QUESTIONS_PER_REGION] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&RegionQuestion> {
        self.questions.get(index)
    }

    /// Number of questions, used as the `total` of a finalized result.
    #[must_use]
    pub fn total(&self) -> u32 {
        QUESTIONS_PER_REGION as u32
    }
}

use thiserror::Error;

use crate::model::{
    QuestionError, QuizSettingsError, RegionError, RegionIdError, RegionResultError,
};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    RegionId(#[from] RegionIdError),
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Region(#[from] RegionError),
    #[error(transparent)]
    Result(#[from] RegionResultError),
    #[error(transparent)]
    Settings(#[from] QuizSettingsError),
}

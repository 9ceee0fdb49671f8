mod ids;
mod question;
mod region;
mod result;
mod settings;

pub use ids::{RegionId, RegionIdError};
pub use question::{AnswerIndex, OPTIONS_PER_QUESTION, QuestionError, RegionQuestion};
pub use region::{QUESTIONS_PER_REGION, RegionData, RegionError};
pub use result::{DEFAULT_GOOD_RATIO, RegionResult, RegionResultError, ResultTier};
pub use settings::{DEFAULT_CLOSE_DELAY, QuizSettings, QuizSettingsDraft, QuizSettingsError};

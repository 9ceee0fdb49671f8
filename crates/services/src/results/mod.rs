mod completion;
mod store;
mod summary;

pub use completion::CompletionMonitor;
pub use store::{ResultsSnapshot, ResultsStore};
pub use summary::{HeaderStats, QuizSummary};

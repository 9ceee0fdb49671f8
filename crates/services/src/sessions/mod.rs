mod progress;
mod service;
mod state;
mod view;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use progress::SessionProgress;
pub use service::QuizSession;
pub use state::{
    IgnoredReason, SessionAction, SessionPhase, SessionState, Transition, transition,
};
pub use view::{OptionState, QuestionView};
pub use workflow::{FinishedSession, HostEvent, QuizHost};

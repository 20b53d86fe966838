mod event;
mod workflow;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use event::{QuizEvent, QuizOutcome};
pub use workflow::QuizController;

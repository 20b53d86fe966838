use quiz_core::TimerEpoch;
use quiz_core::model::{ExamId, OptionId};

/// Discrete actions accepted by the quiz controller.
///
/// Everything the presentation layer can do, plus the timer tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizEvent {
    SelectExam(ExamId),
    SelectOption { question: usize, option: OptionId },
    Submit,
    GoBack,
    Retry,
    Tick(TimerEpoch),
}

/// What a dispatched event did to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizOutcome {
    Unchanged,
    Updated,
    /// The attempt moved to review; `forced` when the countdown ran out.
    Submitted { forced: bool },
}

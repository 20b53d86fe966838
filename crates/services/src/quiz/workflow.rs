use std::sync::Arc;

use quiz_core::model::{Exam, ExamId, OptionId, QuizSettings};
use quiz_core::{QuizSession, SelectOutcome, SubmitOutcome, TickOutcome, TimerEpoch};
use storage::{ExamRepository, QuestionRepository, Storage, StorageError};
use tracing::{debug, info, warn};

use super::event::{QuizEvent, QuizOutcome};
use crate::error::QuizError;

/// Owns the quiz session and applies events to it.
///
/// Every state change goes through a named transition; `dispatch` routes events to
/// them. Loading a question set on exam selection is part of the transition, not a
/// reaction to it.
#[derive(Clone)]
pub struct QuizController {
    exams: Arc<dyn ExamRepository>,
    questions: Arc<dyn QuestionRepository>,
    session: QuizSession,
}

impl QuizController {
    #[must_use]
    pub fn new(storage: &Storage, settings: QuizSettings) -> Self {
        Self {
            exams: Arc::clone(&storage.exams),
            questions: Arc::clone(&storage.questions),
            session: QuizSession::new(settings),
        }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// Epoch of the running countdown, `None` when no tick source should exist.
    #[must_use]
    pub fn timer_epoch(&self) -> Option<TimerEpoch> {
        self.session.timer_epoch()
    }

    /// The exam catalog in display order.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Storage` if the catalog cannot be read.
    pub fn catalog(&self) -> Result<Vec<Exam>, QuizError> {
        Ok(self.exams.list_exams()?)
    }

    /// Display title of the selected exam; the raw id when it is not in the catalog.
    #[must_use]
    pub fn selected_title(&self) -> Option<String> {
        let id = self.session.selected_exam()?;
        Some(
            self.exams
                .get_exam(id)
                .map_or_else(|_| id.to_string(), |exam| exam.title().to_string()),
        )
    }

    /// Apply one event.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Storage` when loading a question set fails for a reason
    /// other than an unknown exam. The session is left untouched in that case.
    pub fn dispatch(&mut self, event: QuizEvent) -> Result<QuizOutcome, QuizError> {
        match event {
            QuizEvent::SelectExam(exam_id) => self.select_exam(exam_id),
            QuizEvent::SelectOption { question, option } => {
                Ok(self.select_option(question, option))
            }
            QuizEvent::Submit => Ok(self.submit()),
            QuizEvent::GoBack => Ok(self.go_back()),
            QuizEvent::Retry => Ok(self.retry()),
            QuizEvent::Tick(epoch) => Ok(self.tick(epoch)),
        }
    }

    /// Select an exam, load its questions and start a fresh attempt.
    ///
    /// An exam without a question set yields an empty quiz.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Storage` for storage failures other than `NotFound`.
    pub fn select_exam(&mut self, exam_id: ExamId) -> Result<QuizOutcome, QuizError> {
        let questions = match self.questions.questions_for(&exam_id) {
            Ok(questions) => questions,
            Err(StorageError::NotFound) => {
                warn!(exam = %exam_id, "no question set for exam, starting empty quiz");
                Vec::new()
            }
            Err(err) => return Err(err.into()),
        };
        let count = questions.len();
        let epoch = self.session.begin(exam_id, questions);
        info!(questions = count, epoch = epoch.value(), "exam selected");
        Ok(QuizOutcome::Updated)
    }

    pub fn select_option(&mut self, question: usize, option: OptionId) -> QuizOutcome {
        match self.session.select_option(question, option) {
            SelectOutcome::Stored => {
                debug!(question, %option, "answer stored");
                QuizOutcome::Updated
            }
            SelectOutcome::Locked => {
                debug!(question, "answer ignored after submission");
                QuizOutcome::Unchanged
            }
        }
    }

    pub fn submit(&mut self) -> QuizOutcome {
        match self.session.submit() {
            SubmitOutcome::Submitted => {
                self.log_submitted(false);
                QuizOutcome::Submitted { forced: false }
            }
            SubmitOutcome::AlreadySubmitted | SubmitOutcome::NoExam => QuizOutcome::Unchanged,
        }
    }

    pub fn go_back(&mut self) -> QuizOutcome {
        if self.session.selected_exam().is_none() {
            return QuizOutcome::Unchanged;
        }
        self.session.go_back();
        debug!("returned to catalog");
        QuizOutcome::Updated
    }

    pub fn retry(&mut self) -> QuizOutcome {
        match self.session.retry() {
            Some(epoch) => {
                info!(epoch = epoch.value(), "attempt restarted");
                QuizOutcome::Updated
            }
            None => QuizOutcome::Unchanged,
        }
    }

    pub fn tick(&mut self, epoch: TimerEpoch) -> QuizOutcome {
        match self.session.tick(epoch) {
            TickOutcome::Running { .. } => QuizOutcome::Updated,
            TickOutcome::Expired => {
                self.log_submitted(true);
                QuizOutcome::Submitted { forced: true }
            }
            TickOutcome::Ignored => {
                debug!(epoch = epoch.value(), "stale tick ignored");
                QuizOutcome::Unchanged
            }
        }
    }

    fn log_submitted(&self, forced: bool) {
        if let Some(score) = self.session.score() {
            info!(
                forced,
                score = score.score,
                answered = score.total_answered,
                questions = score.total_questions,
                elapsed_secs = self.session.elapsed_secs(),
                "attempt submitted"
            );
        }
    }
}

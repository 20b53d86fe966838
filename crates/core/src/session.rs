//! State of one quiz attempt and its transitions.

use crate::model::{Answers, ExamId, OptionId, Question, QuizSettings};
use crate::scoring::{self, QuestionReview, Score};
use crate::timer::{Countdown, TickOutcome, TimerEpoch, format_clock};

/// Which screen the session state selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizScreen {
    Catalog,
    Active,
    Results,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    Stored,
    /// Answers are frozen after submission.
    Locked,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted,
    AlreadySubmitted,
    NoExam,
}

/// Ephemeral session: selected exam, active questions, answers, countdown and
/// the submitted flag.
///
/// Answers only change while `submitted` is false. The countdown runs only while
/// an exam is selected and the attempt is not submitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizSession {
    selected_exam: Option<ExamId>,
    questions: Vec<Question>,
    answers: Answers,
    countdown: Countdown,
    submitted: bool,
}

impl QuizSession {
    #[must_use]
    pub fn new(settings: QuizSettings) -> Self {
        Self {
            selected_exam: None,
            questions: Vec::new(),
            answers: Answers::new(),
            countdown: Countdown::new(settings.time_limit_secs()),
            submitted: false,
        }
    }

    /// Select an exam with its question set and start a fresh attempt.
    pub fn begin(&mut self, exam: ExamId, questions: Vec<Question>) -> TimerEpoch {
        self.selected_exam = Some(exam);
        self.questions = questions;
        self.answers.clear();
        self.submitted = false;
        self.countdown.restart()
    }

    /// Record `option_id` for `question_index` unless the attempt is submitted.
    ///
    /// Neither the index nor the option id is checked against the question set.
    pub fn select_option(&mut self, question_index: usize, option_id: OptionId) -> SelectOutcome {
        if self.submitted {
            return SelectOutcome::Locked;
        }
        self.answers.choose(question_index, option_id);
        SelectOutcome::Stored
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.selected_exam.is_none() {
            return SubmitOutcome::NoExam;
        }
        if self.submitted {
            return SubmitOutcome::AlreadySubmitted;
        }
        self.submitted = true;
        SubmitOutcome::Submitted
    }

    /// Abandon the attempt and return to the catalog.
    pub fn go_back(&mut self) {
        self.selected_exam = None;
        self.questions.clear();
        self.answers.clear();
        self.submitted = false;
        self.countdown.restart();
    }

    /// Restart the same question set. Returns `None` when no exam is selected.
    pub fn retry(&mut self) -> Option<TimerEpoch> {
        self.selected_exam.as_ref()?;
        self.answers.clear();
        self.submitted = false;
        Some(self.countdown.restart())
    }

    /// Apply one timer tick scheduled for `epoch`.
    ///
    /// The tick that reaches zero submits the attempt in the same call; after that
    /// `timer_epoch()` is `None` and further ticks are ignored.
    pub fn tick(&mut self, epoch: TimerEpoch) -> TickOutcome {
        if self.timer_epoch() != Some(epoch) {
            return TickOutcome::Ignored;
        }
        match self.countdown.tick() {
            TickOutcome::Expired => {
                self.submitted = true;
                TickOutcome::Expired
            }
            other => other,
        }
    }

    /// Epoch of the running countdown, or `None` when the timer must be stopped.
    #[must_use]
    pub fn timer_epoch(&self) -> Option<TimerEpoch> {
        (self.selected_exam.is_some() && !self.submitted).then(|| self.countdown.epoch())
    }

    #[must_use]
    pub fn screen(&self) -> QuizScreen {
        match (&self.selected_exam, self.submitted) {
            (None, _) => QuizScreen::Catalog,
            (Some(_), false) => QuizScreen::Active,
            (Some(_), true) => QuizScreen::Results,
        }
    }

    #[must_use]
    pub fn selected_exam(&self) -> Option<&ExamId> {
        self.selected_exam.as_ref()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    #[must_use]
    pub fn time_left(&self) -> u32 {
        self.countdown.remaining()
    }

    #[must_use]
    pub fn elapsed_secs(&self) -> u32 {
        self.countdown.elapsed()
    }

    /// Elapsed time as `m:ss`.
    #[must_use]
    pub fn elapsed_label(&self) -> String {
        format_clock(self.countdown.elapsed())
    }

    /// Score of the attempt; only available once submitted.
    #[must_use]
    pub fn score(&self) -> Option<Score> {
        self.submitted
            .then(|| scoring::score(&self.questions, &self.answers))
    }

    #[must_use]
    pub fn review(&self) -> Option<Vec<QuestionReview<'_>>> {
        self.submitted
            .then(|| scoring::review(&self.questions, &self.answers))
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new(QuizSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnswerOption;

    fn ssc_questions() -> Vec<Question> {
        vec![Question::new(
            None,
            "Pick A",
            vec![
                AnswerOption::new(OptionId::new(1), "A"),
                AnswerOption::new(OptionId::new(2), "B"),
            ],
            OptionId::new(1),
        )]
    }

    fn started() -> (QuizSession, TimerEpoch) {
        let mut session = QuizSession::default();
        let epoch = session.begin(ExamId::new("ssc"), ssc_questions());
        (session, epoch)
    }

    #[test]
    fn starts_on_catalog_with_stopped_timer() {
        let session = QuizSession::default();
        assert_eq!(session.screen(), QuizScreen::Catalog);
        assert_eq!(session.timer_epoch(), None);
        assert_eq!(session.time_left(), 600);
        assert!(session.score().is_none());
    }

    #[test]
    fn begin_resets_attempt() {
        let (mut session, epoch) = started();
        session.select_option(0, OptionId::new(2));
        session.tick(epoch);
        session.submit();

        let epoch = session.begin(ExamId::new("ssc"), ssc_questions());
        assert_eq!(session.screen(), QuizScreen::Active);
        assert!(session.answers().is_empty());
        assert_eq!(session.time_left(), 600);
        assert!(!session.is_submitted());
        assert_eq!(session.timer_epoch(), Some(epoch));
    }

    #[test]
    fn select_after_submit_is_locked() {
        let (mut session, _) = started();
        session.select_option(0, OptionId::new(1));
        session.submit();
        let before = session.answers().clone();
        assert_eq!(session.select_option(0, OptionId::new(2)), SelectOutcome::Locked);
        assert_eq!(session.answers(), &before);
    }

    #[test]
    fn out_of_range_question_is_stored_and_counted() {
        let (mut session, _) = started();
        assert_eq!(session.select_option(5, OptionId::new(1)), SelectOutcome::Stored);
        assert_eq!(session.answers().get(5), Some(OptionId::new(1)));

        session.submit();
        let score = session.score().unwrap();
        assert_eq!(score.total_answered, 1);
        assert_eq!(score.score, 0);
        assert_eq!(score.wrong(), 1);
    }

    #[test]
    fn unknown_option_id_is_stored() {
        let (mut session, _) = started();
        assert_eq!(session.select_option(0, OptionId::new(99)), SelectOutcome::Stored);
        assert_eq!(session.answers().get(0), Some(OptionId::new(99)));
    }

    #[test]
    fn submit_is_idempotent() {
        let (mut session, _) = started();
        session.select_option(0, OptionId::new(1));
        assert_eq!(session.submit(), SubmitOutcome::Submitted);
        let answers = session.answers().clone();
        assert_eq!(session.submit(), SubmitOutcome::AlreadySubmitted);
        assert!(session.is_submitted());
        assert_eq!(session.answers(), &answers);
        assert_eq!(session.screen(), QuizScreen::Results);
    }

    #[test]
    fn submit_without_exam_does_nothing() {
        let mut session = QuizSession::default();
        assert_eq!(session.submit(), SubmitOutcome::NoExam);
        assert!(!session.is_submitted());
    }

    #[test]
    fn timer_expiry_submits_exactly_once() {
        let (mut session, epoch) = started();
        let mut expirations = 0;
        for _ in 0..600 {
            if session.tick(epoch) == TickOutcome::Expired {
                expirations += 1;
            }
        }
        assert_eq!(expirations, 1);
        assert!(session.is_submitted());
        assert_eq!(session.time_left(), 0);
        assert_eq!(session.timer_epoch(), None);

        assert_eq!(session.tick(epoch), TickOutcome::Ignored);
        assert_eq!(session.time_left(), 0);
        assert_eq!(session.elapsed_label(), "10:00");
    }

    #[test]
    fn ticks_after_manual_submit_are_ignored() {
        let (mut session, epoch) = started();
        session.tick(epoch);
        session.submit();
        assert_eq!(session.tick(epoch), TickOutcome::Ignored);
        assert_eq!(session.time_left(), 599);
        assert_eq!(session.elapsed_label(), "0:01");
    }

    #[test]
    fn stale_epoch_cannot_decrement() {
        let (mut session, old) = started();
        let fresh = session.retry().unwrap();
        assert_eq!(session.tick(old), TickOutcome::Ignored);
        assert_eq!(session.time_left(), 600);
        assert_eq!(session.tick(fresh), TickOutcome::Running { remaining: 599 });
    }

    #[test]
    fn retry_keeps_exam_and_questions() {
        let (mut session, epoch) = started();
        session.select_option(0, OptionId::new(1));
        session.tick(epoch);
        session.submit();

        assert!(session.retry().is_some());
        assert_eq!(session.selected_exam(), Some(&ExamId::new("ssc")));
        assert_eq!(session.questions(), ssc_questions().as_slice());
        assert!(session.answers().is_empty());
        assert_eq!(session.time_left(), 600);
        assert!(!session.is_submitted());
    }

    #[test]
    fn retry_without_exam_is_noop() {
        let mut session = QuizSession::default();
        assert!(session.retry().is_none());
        assert_eq!(session.screen(), QuizScreen::Catalog);
    }

    #[test]
    fn go_back_returns_to_catalog_and_stops_timer() {
        let (mut session, epoch) = started();
        session.select_option(0, OptionId::new(1));
        session.go_back();
        assert_eq!(session.screen(), QuizScreen::Catalog);
        assert!(session.questions().is_empty());
        assert!(session.answers().is_empty());
        assert_eq!(session.timer_epoch(), None);
        assert_eq!(session.tick(epoch), TickOutcome::Ignored);
    }

    #[test]
    fn scores_example_attempts() {
        let (mut session, _) = started();
        session.select_option(0, OptionId::new(1));
        session.submit();
        let score = session.score().unwrap();
        assert_eq!((score.score, score.total_answered), (1, 1));

        session.retry();
        session.select_option(0, OptionId::new(2));
        session.submit();
        let score = session.score().unwrap();
        assert_eq!((score.score, score.total_answered), (0, 1));

        session.retry();
        session.submit();
        let score = session.score().unwrap();
        assert_eq!((score.score, score.total_answered), (0, 0));
    }

    #[test]
    fn custom_time_limit_expires_early() {
        let mut session = QuizSession::new(QuizSettings::new(2).unwrap());
        let epoch = session.begin(ExamId::new("ssc"), ssc_questions());
        assert_eq!(session.tick(epoch), TickOutcome::Running { remaining: 1 });
        assert_eq!(session.tick(epoch), TickOutcome::Expired);
        assert_eq!(session.screen(), QuizScreen::Results);
    }
}

//! Pure scoring of a submitted attempt.

use crate::model::{AnswerOption, Answers, OptionId, Question};

/// Tally of a submitted attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub score: usize,
    pub total_answered: usize,
    pub total_questions: usize,
}

impl Score {
    /// Answered questions that did not score.
    #[must_use]
    pub fn wrong(&self) -> usize {
        self.total_answered.saturating_sub(self.score)
    }
}

/// Whether `chosen` counts as the right answer to `question`.
///
/// Correctness compares option text, so two options with the same text are
/// interchangeable even when their ids differ. An id that matches no option never
/// scores.
#[must_use]
pub fn is_correct(question: &Question, chosen: OptionId) -> bool {
    match (question.option(chosen), question.correct_option()) {
        (Some(chosen), Some(correct)) => chosen.text == correct.text,
        _ => false,
    }
}

#[must_use]
pub fn score(questions: &[Question], answers: &Answers) -> Score {
    let score = questions
        .iter()
        .enumerate()
        .filter(|(index, question)| {
            answers
                .get(*index)
                .is_some_and(|chosen| is_correct(question, chosen))
        })
        .count();

    Score {
        score,
        total_answered: answers.len(),
        total_questions: questions.len(),
    }
}

/// Annotation of one option on the results screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionMark {
    Plain,
    /// The option is the answer key.
    Correct,
    /// The option was chosen and is not the answer key.
    WrongChoice,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionReview<'a> {
    pub option: &'a AnswerOption,
    pub selected: bool,
    pub mark: OptionMark,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionReview<'a> {
    pub index: usize,
    pub question: &'a Question,
    pub chosen: Option<OptionId>,
    pub correct: bool,
    pub options: Vec<OptionReview<'a>>,
}

/// Per-question breakdown for the results screen.
#[must_use]
pub fn review<'a>(questions: &'a [Question], answers: &Answers) -> Vec<QuestionReview<'a>> {
    questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let chosen = answers.get(index);
            let options = question
                .options
                .iter()
                .map(|option| {
                    let selected = chosen == Some(option.option_id);
                    let mark = if option.option_id == question.answer_id {
                        OptionMark::Correct
                    } else if selected {
                        OptionMark::WrongChoice
                    } else {
                        OptionMark::Plain
                    };
                    OptionReview {
                        option,
                        selected,
                        mark,
                    }
                })
                .collect();

            QuestionReview {
                index,
                question,
                chosen,
                correct: chosen.is_some_and(|id| is_correct(question, id)),
                options,
            }
        })
        .collect()
}

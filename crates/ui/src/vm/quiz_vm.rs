use quiz_core::model::{Exam, ExamId, OptionId};
use quiz_core::scoring::OptionMark;
use quiz_core::{QuizScreen, QuizSession};
use services::{QuizController, QuizError};

use super::time_fmt::time_taken_label;

#[derive(Clone, Debug, PartialEq)]
pub struct ExamCardVm {
    pub id: ExamId,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OptionVm {
    pub option_id: OptionId,
    pub text: String,
    pub checked: bool,
    pub mark: OptionMark,
}

impl OptionVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.mark {
            OptionMark::Plain => "option",
            OptionMark::Correct => "option correct",
            OptionMark::WrongChoice => "option wrong",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuestionVm {
    pub index: usize,
    pub label: String,
    pub prompt: String,
    pub options: Vec<OptionVm>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub score: usize,
    pub total_questions: usize,
    pub answered: usize,
    pub wrong: usize,
}

/// Everything one screen needs, derived from the controller.
#[derive(Clone, Debug, PartialEq)]
pub enum QuizPageVm {
    Catalog {
        exams: Vec<ExamCardVm>,
    },
    Active {
        title: String,
        time_taken: String,
        questions: Vec<QuestionVm>,
    },
    Results {
        title: String,
        time_taken: String,
        results: ResultsVm,
        questions: Vec<QuestionVm>,
    },
}

#[must_use]
pub fn map_exam_cards(exams: &[Exam]) -> Vec<ExamCardVm> {
    exams
        .iter()
        .map(|exam| ExamCardVm {
            id: exam.id().clone(),
            title: exam.title().to_string(),
            description: exam.description().to_string(),
        })
        .collect()
}

fn question_label(index: usize) -> String {
    format!("Q{}:", index + 1)
}

#[must_use]
pub fn map_active_questions(session: &QuizSession) -> Vec<QuestionVm> {
    session
        .questions()
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let chosen = session.answers().get(index);
            QuestionVm {
                index,
                label: question_label(index),
                prompt: question.question.clone(),
                options: question
                    .options
                    .iter()
                    .map(|option| OptionVm {
                        option_id: option.option_id,
                        text: option.text.clone(),
                        checked: chosen == Some(option.option_id),
                        mark: OptionMark::Plain,
                    })
                    .collect(),
            }
        })
        .collect()
}

/// Annotated questions for the results screen; empty before submission.
#[must_use]
pub fn map_review_questions(session: &QuizSession) -> Vec<QuestionVm> {
    session
        .review()
        .unwrap_or_default()
        .into_iter()
        .map(|review| QuestionVm {
            index: review.index,
            label: question_label(review.index),
            prompt: review.question.question.clone(),
            options: review
                .options
                .into_iter()
                .map(|option| OptionVm {
                    option_id: option.option.option_id,
                    text: option.option.text.clone(),
                    checked: option.selected,
                    mark: option.mark,
                })
                .collect(),
        })
        .collect()
}

/// # Errors
///
/// Returns `QuizError` if the catalog cannot be read.
pub fn build_page(controller: &QuizController) -> Result<QuizPageVm, QuizError> {
    let session = controller.session();
    let title = controller.selected_title().unwrap_or_default();
    let time_taken = time_taken_label(session.elapsed_secs());

    let page = match session.screen() {
        QuizScreen::Catalog => QuizPageVm::Catalog {
            exams: map_exam_cards(&controller.catalog()?),
        },
        QuizScreen::Active => QuizPageVm::Active {
            title,
            time_taken,
            questions: map_active_questions(session),
        },
        QuizScreen::Results => {
            let score = session.score().unwrap_or_default();
            QuizPageVm::Results {
                title,
                time_taken,
                results: ResultsVm {
                    score: score.score,
                    total_questions: score.total_questions,
                    answered: score.total_answered,
                    wrong: score.wrong(),
                },
                questions: map_review_questions(session),
            }
        }
    };
    Ok(page)
}

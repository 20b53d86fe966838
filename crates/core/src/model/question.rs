use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{OptionId, QuestionId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question has no options")]
    NoOptions,

    #[error("option id {0} appears more than once")]
    DuplicateOption(OptionId),

    #[error("answer id {0} does not match any option")]
    MissingAnswer(OptionId),
}

/// One selectable choice of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    #[serde(rename = "optionId")]
    pub option_id: OptionId,
    pub text: String,
}

impl AnswerOption {
    #[must_use]
    pub fn new(option_id: OptionId, text: impl Into<String>) -> Self {
        Self {
            option_id,
            text: text.into(),
        }
    }
}

/// A multiple-choice question as authored in the question bundles.
///
/// The shape mirrors the bundled JSON documents: `question`, `options`, `answerId`
/// and an optional `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<QuestionId>,
    pub question: String,
    pub options: Vec<AnswerOption>,
    #[serde(rename = "answerId")]
    pub answer_id: OptionId,
}

impl Question {
    #[must_use]
    pub fn new(
        id: Option<QuestionId>,
        question: impl Into<String>,
        options: Vec<AnswerOption>,
        answer_id: OptionId,
    ) -> Self {
        Self {
            id,
            question: question.into(),
            options,
            answer_id,
        }
    }

    /// Looks up an option by id.
    #[must_use]
    pub fn option(&self, option_id: OptionId) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.option_id == option_id)
    }

    /// The option referenced by `answer_id`, if the question was authored correctly.
    #[must_use]
    pub fn correct_option(&self) -> Option<&AnswerOption> {
        self.option(self.answer_id)
    }

    /// Authoring check: option ids are unique and exactly one matches `answer_id`.
    ///
    /// Nothing calls this while loading; it exists for data tests and tooling.
    ///
    /// # Errors
    ///
    /// Returns the first `QuestionError` found.
    pub fn check_answer_key(&self) -> Result<(), QuestionError> {
        if self.options.is_empty() {
            return Err(QuestionError::NoOptions);
        }
        let mut seen = HashSet::with_capacity(self.options.len());
        for option in &self.options {
            if !seen.insert(option.option_id) {
                return Err(QuestionError::DuplicateOption(option.option_id));
            }
        }
        if !seen.contains(&self.answer_id) {
            return Err(QuestionError::MissingAnswer(self.answer_id));
        }
        Ok(())
    }
}

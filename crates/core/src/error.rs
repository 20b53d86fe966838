use thiserror::Error;

use crate::model::{ExamError, QuestionError, SettingsError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Exam(#[from] ExamError),
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::ExamId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExamError {
    #[error("exam id cannot be empty")]
    EmptyId,

    #[error("exam title cannot be empty")]
    EmptyTitle,
}

/// An exam category shown in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    id: ExamId,
    title: String,
    description: String,
}

impl Exam {
    /// Creates a new catalog entry.
    ///
    /// # Errors
    ///
    /// Returns `ExamError::EmptyId` or `ExamError::EmptyTitle` when either is blank.
    pub fn new(
        id: ExamId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, ExamError> {
        if id.as_str().trim().is_empty() {
            return Err(ExamError::EmptyId);
        }
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ExamError::EmptyTitle);
        }

        Ok(Self {
            id,
            title,
            description: description.into(),
        })
    }

    #[must_use]
    pub fn id(&self) -> &ExamId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

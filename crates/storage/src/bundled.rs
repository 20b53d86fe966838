//! Question sets compiled into the binary.

use std::collections::HashMap;

use quiz_core::model::{Exam, ExamId, Question};
use tracing::debug;

use crate::catalog::builtin_exams;
use crate::repository::{ExamRepository, QuestionRepository, StorageError};

const BUNDLES: [(&str, &str); 3] = [
    ("upsc", include_str!("../data/upsc.json")),
    ("ssc", include_str!("../data/ssc.json")),
    ("bank", include_str!("../data/bank.json")),
];

/// Read-only repository over the built-in catalog and its bundled question sets.
///
/// Documents are parsed once when loaded; answer keys are not checked here.
#[derive(Debug, Clone)]
pub struct BundledRepository {
    exams: Vec<Exam>,
    questions: HashMap<ExamId, Vec<Question>>,
}

impl BundledRepository {
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if a bundled document is malformed.
    pub fn load() -> Result<Self, StorageError> {
        let exams = builtin_exams()?;
        let mut questions = HashMap::with_capacity(BUNDLES.len());
        for (exam, raw) in BUNDLES {
            let set: Vec<Question> = serde_json::from_str(raw)
                .map_err(|e| StorageError::Serialization(format!("{exam}: {e}")))?;
            debug!(exam, questions = set.len(), "loaded question bundle");
            questions.insert(ExamId::new(exam), set);
        }
        Ok(Self { exams, questions })
    }
}

impl ExamRepository for BundledRepository {
    fn list_exams(&self) -> Result<Vec<Exam>, StorageError> {
        Ok(self.exams.clone())
    }

    fn get_exam(&self, id: &ExamId) -> Result<Exam, StorageError> {
        self.exams
            .iter()
            .find(|exam| exam.id() == id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }
}

impl QuestionRepository for BundledRepository {
    fn questions_for(&self, exam_id: &ExamId) -> Result<Vec<Question>, StorageError> {
        self.questions
            .get(exam_id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }
}

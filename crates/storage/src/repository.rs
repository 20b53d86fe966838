use quiz_core::model::{Exam, ExamError, ExamId, Question};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::bundled::BundledRepository;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    Catalog(#[from] ExamError),
}

/// Read access to the exam catalog.
pub trait ExamRepository: Send + Sync {
    /// All exams in display order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the catalog cannot be read.
    fn list_exams(&self) -> Result<Vec<Exam>, StorageError>;

    /// Fetch a single exam.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the id is not in the catalog.
    fn get_exam(&self, id: &ExamId) -> Result<Exam, StorageError>;
}

/// Read access to the per-exam question sets.
pub trait QuestionRepository: Send + Sync {
    /// The full question set of an exam, in authored order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if no set exists for the id.
    fn questions_for(&self, exam_id: &ExamId) -> Result<Vec<Question>, StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    exams: Arc<Mutex<Vec<Exam>>>,
    questions: Arc<Mutex<HashMap<ExamId, Vec<Question>>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an exam, replacing an existing entry with the same id in place.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn upsert_exam(&self, exam: Exam) -> Result<(), StorageError> {
        let mut guard = self
            .exams
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        match guard.iter_mut().find(|existing| existing.id() == exam.id()) {
            Some(existing) => *existing = exam,
            None => guard.push(exam),
        }
        Ok(())
    }

    /// Replace the question set of an exam.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn put_questions(
        &self,
        exam_id: ExamId,
        questions: Vec<Question>,
    ) -> Result<(), StorageError> {
        let mut guard = self
            .questions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(exam_id, questions);
        Ok(())
    }
}

impl ExamRepository for InMemoryRepository {
    fn list_exams(&self) -> Result<Vec<Exam>, StorageError> {
        let guard = self
            .exams
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    fn get_exam(&self, id: &ExamId) -> Result<Exam, StorageError> {
        let guard = self
            .exams
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard
            .iter()
            .find(|exam| exam.id() == id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }
}

impl QuestionRepository for InMemoryRepository {
    fn questions_for(&self, exam_id: &ExamId) -> Result<Vec<Question>, StorageError> {
        let guard = self
            .questions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.get(exam_id).cloned().ok_or(StorageError::NotFound)
    }
}

/// Aggregates catalog and question repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub exams: Arc<dyn ExamRepository>,
    pub questions: Arc<dyn QuestionRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_in_memory(InMemoryRepository::new())
    }

    #[must_use]
    pub fn from_in_memory(repo: InMemoryRepository) -> Self {
        let exams: Arc<dyn ExamRepository> = Arc::new(repo.clone());
        let questions: Arc<dyn QuestionRepository> = Arc::new(repo);
        Self { exams, questions }
    }

    /// Storage backed by the question sets compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if a bundled document fails to parse.
    pub fn bundled() -> Result<Self, StorageError> {
        let repo = Arc::new(BundledRepository::load()?);
        let exams: Arc<dyn ExamRepository> = repo.clone();
        let questions: Arc<dyn QuestionRepository> = repo;
        Ok(Self { exams, questions })
    }
}

//! Shared error types for the services crate.

use thiserror::Error;

use storage::StorageError;

/// Errors emitted by the quiz controller.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

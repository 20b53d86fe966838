#![forbid(unsafe_code)]

pub mod bundled;
pub mod catalog;
pub mod repository;

pub use bundled::BundledRepository;
pub use repository::{
    ExamRepository, InMemoryRepository, QuestionRepository, Storage, StorageError,
};

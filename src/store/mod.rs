//! The content store facade.
//!
//! The store is the sole source of truth for lessons, flashcards, the
//! per-user mastery record and the global topic-order record. The core
//! consumes whole snapshots from it and sends narrow mutation intents
//! back; every mutation is a single fire-and-forget write whose outcome is
//! surfaced to the caller, with no retry policy and no transactions
//! spanning writes.

mod file;
mod memory;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::flashcards::Flashcard;
use crate::lessons::Lesson;
use crate::progress::MasteryRecord;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Lesson not found: {0}")]
    LessonNotFound(Uuid),

    #[error("Flashcard not found: {0}")]
    FlashcardNotFound(Uuid),

    #[error("Write rejected: {0}")]
    Rejected(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Remote document store seam.
///
/// Reads return full snapshots; derived views (ordering, progress,
/// grouping) are recomputed from the latest snapshot on every change.
/// Writes are independent of one another: multi-write operations such as
/// the reorder swap or CSV ingestion are sequences of separate calls, any
/// of which may fail without rolling back the others.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn lessons(&self) -> Result<Vec<Lesson>>;
    async fn flashcards(&self) -> Result<Vec<Flashcard>>;
    async fn mastery(&self) -> Result<MasteryRecord>;
    async fn topic_order(&self) -> Result<Vec<String>>;

    /// Insert a lesson, or replace it wholesale if the id already exists.
    async fn put_lesson(&self, lesson: Lesson) -> Result<()>;

    async fn delete_lesson(&self, id: Uuid) -> Result<()>;

    /// Partial update of a single lesson's `order` field.
    async fn apply_lesson_order(&self, id: Uuid, new_order: i64) -> Result<()>;

    /// Full overwrite of the global topic-order record.
    async fn set_topic_order(&self, order: Vec<String>) -> Result<()>;

    /// Full overwrite of the per-user mastery record.
    async fn set_mastery(&self, record: MasteryRecord) -> Result<()>;

    /// Append one flashcard record.
    async fn create_flashcard(&self, topic: String, front: String, back: String)
        -> Result<Flashcard>;

    async fn delete_flashcard(&self, id: Uuid) -> Result<()>;
}

//! studium — topic-grouped lessons with per-user mastery tracking and a
//! flashcard study mode, backed by a remote document store.
//!
//! The store is reached only through the [`store::ContentStore`] trait:
//! read-only snapshots in, mutation intents out. Everything derived from a
//! snapshot (topic order, lesson order, progress, flashcard grouping) is
//! recomputed in full from the latest snapshot; there is no incremental
//! state to keep consistent.

pub mod flashcards;
pub mod lessons;
pub mod progress;
pub mod service;
pub mod store;

pub use service::{ImportSummary, StudyService};
pub use store::{ContentStore, JsonFileStore, MemoryStore, StoreError};

//! Flashcards: topic-tagged question/answer pairs, study sessions over
//! them, and CSV ingestion.

mod import;
mod models;
mod session;

pub use import::{parse_flashcards_csv, CsvImportError, CsvParseOutcome, CsvRecord};
pub use models::{group_by_topic, Flashcard};
pub use session::StudySession;

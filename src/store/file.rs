//! JSON-file content store.
//!
//! Directory structure:
//! ```text
//! <data-dir>/
//! ├── lessons/
//! │   └── {lesson-id}.json
//! ├── flashcards/
//! │   └── {card-id}.json
//! ├── mastery.json       # Single per-user mastery record
//! └── topic_order.json   # Array of topic names
//! ```

use std::fs;
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::flashcards::Flashcard;
use crate::lessons::Lesson;
use crate::progress::MasteryRecord;

use super::{ContentStore, Result, StoreError};

/// A content store persisted as pretty-printed JSON files, one per lesson
/// and flashcard, with single-record files for mastery and topic order.
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Platform data directory for the app, e.g. `~/.local/share/studium`.
    pub fn default_data_dir() -> Option<PathBuf> {
        dirs::data_dir().map(|p| p.join("studium"))
    }

    /// Create the directory layout if it does not exist yet.
    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(self.lessons_dir())?;
        fs::create_dir_all(self.flashcards_dir())?;
        Ok(())
    }

    fn lessons_dir(&self) -> PathBuf {
        self.data_dir.join("lessons")
    }

    fn flashcards_dir(&self) -> PathBuf {
        self.data_dir.join("flashcards")
    }

    fn lesson_path(&self, id: Uuid) -> PathBuf {
        self.lessons_dir().join(format!("{}.json", id))
    }

    fn flashcard_path(&self, id: Uuid) -> PathBuf {
        self.flashcards_dir().join(format!("{}.json", id))
    }

    fn mastery_path(&self) -> PathBuf {
        self.data_dir.join("mastery.json")
    }

    fn topic_order_path(&self) -> PathBuf {
        self.data_dir.join("topic_order.json")
    }

    fn read_dir_records<T: DeserializeOwned>(&self, dir: PathBuf) -> Result<Vec<T>> {
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let mut records = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.extension().map_or(false, |ext| ext == "json") {
                let content = fs::read_to_string(&path)?;
                records.push(serde_json::from_str(&content)?);
            }
        }
        Ok(records)
    }

    fn write_record<T: Serialize>(&self, path: PathBuf, record: &T) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(record)?)?;
        Ok(())
    }
}

#[async_trait]
impl ContentStore for JsonFileStore {
    async fn lessons(&self) -> Result<Vec<Lesson>> {
        self.read_dir_records(self.lessons_dir())
    }

    async fn flashcards(&self) -> Result<Vec<Flashcard>> {
        self.read_dir_records(self.flashcards_dir())
    }

    async fn mastery(&self) -> Result<MasteryRecord> {
        let path = self.mastery_path();
        if !path.exists() {
            return Ok(MasteryRecord::default());
        }
        let content = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&content)?)
    }

    async fn topic_order(&self) -> Result<Vec<String>> {
        let path = self.topic_order_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&content)?)
    }

    async fn put_lesson(&self, lesson: Lesson) -> Result<()> {
        self.init()?;
        self.write_record(self.lesson_path(lesson.id), &lesson)
    }

    async fn delete_lesson(&self, id: Uuid) -> Result<()> {
        let path = self.lesson_path(id);
        if !path.exists() {
            return Err(StoreError::LessonNotFound(id));
        }
        fs::remove_file(path)?;
        Ok(())
    }

    async fn apply_lesson_order(&self, id: Uuid, new_order: i64) -> Result<()> {
        let path = self.lesson_path(id);
        if !path.exists() {
            return Err(StoreError::LessonNotFound(id));
        }
        let content = fs::read_to_string(&path)?;
        let mut lesson: Lesson = serde_json::from_str(&content)?;
        lesson.order = new_order;
        lesson.updated_at = Utc::now();
        self.write_record(path, &lesson)
    }

    async fn set_topic_order(&self, order: Vec<String>) -> Result<()> {
        self.init()?;
        self.write_record(self.topic_order_path(), &order)
    }

    async fn set_mastery(&self, record: MasteryRecord) -> Result<()> {
        self.init()?;
        self.write_record(self.mastery_path(), &record)
    }

    async fn create_flashcard(
        &self,
        topic: String,
        front: String,
        back: String,
    ) -> Result<Flashcard> {
        self.init()?;
        let card = Flashcard::new(topic, front, back);
        self.write_record(self.flashcard_path(card.id), &card)?;
        Ok(card)
    }

    async fn delete_flashcard(&self, id: Uuid) -> Result<()> {
        let path = self.flashcard_path(id);
        if !path.exists() {
            return Err(StoreError::FlashcardNotFound(id));
        }
        fs::remove_file(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (JsonFileStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().to_path_buf());
        store.init().unwrap();
        (store, temp_dir)
    }

    #[tokio::test]
    async fn test_round_trip_across_reopen() {
        let (store, temp) = create_test_store();

        let lesson = Lesson::new("Networking", "TCP", "<p>handshake</p>");
        store.put_lesson(lesson.clone()).await.unwrap();
        let card = store
            .create_flashcard("CS".to_string(), "LIFO?".to_string(), "Stack".to_string())
            .await
            .unwrap();

        let mut mastery = MasteryRecord::default();
        mastery.toggle(lesson.id);
        mastery.set_note(lesson.id, "revisit the diagram");
        store.set_mastery(mastery.clone()).await.unwrap();
        store
            .set_topic_order(vec!["Networking".to_string()])
            .await
            .unwrap();

        // Reopen the same directory.
        let reopened = JsonFileStore::new(temp.path().to_path_buf());
        let lessons = reopened.lessons().await.unwrap();
        assert_eq!(lessons.len(), 1);
        assert_eq!(lessons[0].title, "TCP");
        assert_eq!(reopened.flashcards().await.unwrap(), vec![card]);
        assert_eq!(reopened.mastery().await.unwrap(), mastery);
        assert_eq!(reopened.topic_order().await.unwrap(), vec!["Networking"]);
    }

    #[tokio::test]
    async fn test_empty_store_reads_defaults() {
        let (store, _temp) = create_test_store();
        assert!(store.lessons().await.unwrap().is_empty());
        assert!(store.flashcards().await.unwrap().is_empty());
        assert_eq!(store.mastery().await.unwrap(), MasteryRecord::default());
        assert!(store.topic_order().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_apply_lesson_order_rewrites_only_order() {
        let (store, _temp) = create_test_store();
        let mut lesson = Lesson::new("T", "Title", "body");
        lesson.order = 1;
        store.put_lesson(lesson.clone()).await.unwrap();

        store.apply_lesson_order(lesson.id, 7).await.unwrap();

        let lessons = store.lessons().await.unwrap();
        assert_eq!(lessons[0].order, 7);
        assert_eq!(lessons[0].title, "Title");
        assert_eq!(lessons[0].body, "body");
    }

    #[tokio::test]
    async fn test_delete_missing_records_fail() {
        let (store, _temp) = create_test_store();
        assert!(store.delete_lesson(Uuid::new_v4()).await.is_err());
        assert!(store.delete_flashcard(Uuid::new_v4()).await.is_err());
    }
}

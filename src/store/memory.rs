//! In-memory content store, used by tests and as a reference
//! implementation of the facade's semantics.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::flashcards::Flashcard;
use crate::lessons::Lesson;
use crate::progress::MasteryRecord;

use super::{ContentStore, Result, StoreError};

#[derive(Debug, Default)]
struct MemoryInner {
    lessons: Vec<Lesson>,
    flashcards: Vec<Flashcard>,
    mastery: MasteryRecord,
    topic_order: Vec<String>,
}

/// A content store held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<MemoryInner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn lessons(&self) -> Result<Vec<Lesson>> {
        Ok(self.inner.read().await.lessons.clone())
    }

    async fn flashcards(&self) -> Result<Vec<Flashcard>> {
        Ok(self.inner.read().await.flashcards.clone())
    }

    async fn mastery(&self) -> Result<MasteryRecord> {
        Ok(self.inner.read().await.mastery.clone())
    }

    async fn topic_order(&self) -> Result<Vec<String>> {
        Ok(self.inner.read().await.topic_order.clone())
    }

    async fn put_lesson(&self, lesson: Lesson) -> Result<()> {
        let mut inner = self.inner.write().await;
        match inner.lessons.iter_mut().find(|l| l.id == lesson.id) {
            Some(existing) => *existing = lesson,
            None => inner.lessons.push(lesson),
        }
        Ok(())
    }

    async fn delete_lesson(&self, id: Uuid) -> Result<()> {
        let mut inner = self.inner.write().await;
        let before = inner.lessons.len();
        inner.lessons.retain(|l| l.id != id);
        if inner.lessons.len() == before {
            return Err(StoreError::LessonNotFound(id));
        }
        Ok(())
    }

    async fn apply_lesson_order(&self, id: Uuid, new_order: i64) -> Result<()> {
        let mut inner = self.inner.write().await;
        let lesson = inner
            .lessons
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(StoreError::LessonNotFound(id))?;
        lesson.order = new_order;
        Ok(())
    }

    async fn set_topic_order(&self, order: Vec<String>) -> Result<()> {
        self.inner.write().await.topic_order = order;
        Ok(())
    }

    async fn set_mastery(&self, record: MasteryRecord) -> Result<()> {
        self.inner.write().await.mastery = record;
        Ok(())
    }

    async fn create_flashcard(
        &self,
        topic: String,
        front: String,
        back: String,
    ) -> Result<Flashcard> {
        let card = Flashcard::new(topic, front, back);
        self.inner.write().await.flashcards.push(card.clone());
        Ok(card)
    }

    async fn delete_flashcard(&self, id: Uuid) -> Result<()> {
        let mut inner = self.inner.write().await;
        let before = inner.flashcards.len();
        inner.flashcards.retain(|c| c.id != id);
        if inner.flashcards.len() == before {
            return Err(StoreError::FlashcardNotFound(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_lesson_inserts_then_replaces() {
        let store = MemoryStore::new();
        let mut lesson = Lesson::new("T", "Title", "body");
        store.put_lesson(lesson.clone()).await.unwrap();

        lesson.title = "Renamed".to_string();
        store.put_lesson(lesson.clone()).await.unwrap();

        let lessons = store.lessons().await.unwrap();
        assert_eq!(lessons.len(), 1);
        assert_eq!(lessons[0].title, "Renamed");
    }

    #[tokio::test]
    async fn test_apply_lesson_order_unknown_id_fails() {
        let store = MemoryStore::new();
        let err = store.apply_lesson_order(Uuid::new_v4(), 5).await.unwrap_err();
        assert!(matches!(err, StoreError::LessonNotFound(_)));
    }

    #[tokio::test]
    async fn test_flashcard_create_and_delete() {
        let store = MemoryStore::new();
        let card = store
            .create_flashcard("CS".to_string(), "LIFO?".to_string(), "Stack".to_string())
            .await
            .unwrap();
        assert_eq!(store.flashcards().await.unwrap().len(), 1);

        store.delete_flashcard(card.id).await.unwrap();
        assert!(store.flashcards().await.unwrap().is_empty());
        assert!(store.delete_flashcard(card.id).await.is_err());
    }
}

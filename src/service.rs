//! Orchestration of user actions over a content store.
//!
//! Every method takes the latest snapshot from the store, derives what it
//! needs, and sends mutation intents back. Multi-write operations (the
//! reorder swap, CSV ingestion, bulk deletes) are sequences of independent
//! writes with no transaction around them.

use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::flashcards::{parse_flashcards_csv, CsvImportError, StudySession};
use crate::lessons::{
    derive_topic_order, next_order_for_topic, plan_lesson_move, Lesson, LessonDraft, MoveDirection,
};
use crate::progress::MasteryRecord;
use crate::store::{ContentStore, Result, StoreError};

/// User-facing summary of a CSV ingestion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    /// Rows accepted by the parser and persisted.
    pub added: usize,
    /// Rows the parser rejected (short or incomplete).
    pub rejected: usize,
    /// Accepted rows whose store write failed.
    pub failed: usize,
}

impl fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} flashcards added, {} rejected",
            self.added, self.rejected
        )?;
        if self.failed > 0 {
            write!(f, ", {} failed to save", self.failed)?;
        }
        Ok(())
    }
}

/// The study application core, bound to one content store.
pub struct StudyService<S: ContentStore> {
    store: S,
}

impl<S: ContentStore> StudyService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Topic display order derived from the current snapshots.
    pub async fn ordered_topics(&self) -> Result<Vec<String>> {
        let lessons = self.store.lessons().await?;
        let order = self.store.topic_order().await?;
        Ok(derive_topic_order(&lessons, &order))
    }

    /// Create a lesson (assigning it the next order slot in its topic) or
    /// edit an existing one, leaving its order untouched.
    pub async fn save_lesson(&self, draft: LessonDraft) -> Result<Lesson> {
        let lessons = self.store.lessons().await?;
        let lesson = match draft.id {
            Some(id) => {
                let mut lesson = lessons
                    .iter()
                    .find(|l| l.id == id)
                    .cloned()
                    .ok_or(StoreError::LessonNotFound(id))?;
                lesson.topic = draft.topic.trim().to_string();
                lesson.title = draft.title.trim().to_string();
                lesson.body = draft.body;
                lesson.updated_at = Utc::now();
                lesson
            }
            None => {
                let mut lesson =
                    Lesson::new(draft.topic.trim(), draft.title.trim(), draft.body);
                lesson.order = next_order_for_topic(&lessons, &lesson.topic);
                lesson
            }
        };
        self.store.put_lesson(lesson.clone()).await?;
        Ok(lesson)
    }

    pub async fn delete_lesson(&self, id: Uuid) -> Result<()> {
        self.store.delete_lesson(id).await
    }

    /// Swap a lesson with its neighbour in the given direction.
    ///
    /// Returns `false` for the boundary no-op. The swap is two independent
    /// writes; if the second fails after the first, both lessons briefly
    /// share an order value and the title tie-break keeps their display
    /// order deterministic until the next successful move.
    pub async fn move_lesson(&self, lesson_id: Uuid, direction: MoveDirection) -> Result<bool> {
        let lessons = self.store.lessons().await?;
        let Some([target, neighbour]) = plan_lesson_move(&lessons, lesson_id, direction) else {
            return Ok(false);
        };
        self.store
            .apply_lesson_order(target.lesson_id, target.new_order)
            .await?;
        self.store
            .apply_lesson_order(neighbour.lesson_id, neighbour.new_order)
            .await?;
        Ok(true)
    }

    /// Persist a full permutation of topic names as the new topic order.
    pub async fn commit_topic_order(&self, order: Vec<String>) -> Result<()> {
        self.store.set_topic_order(order).await
    }

    /// Flip the mastered flag for a lesson, overwriting the whole record.
    pub async fn toggle_mastery(&self, lesson_id: Uuid) -> Result<MasteryRecord> {
        let mut record = self.store.mastery().await?;
        record.toggle(lesson_id);
        self.store.set_mastery(record.clone()).await?;
        Ok(record)
    }

    /// Replace the note for a lesson, overwriting the whole record.
    pub async fn set_note(
        &self,
        lesson_id: Uuid,
        text: impl Into<String> + Send,
    ) -> Result<MasteryRecord> {
        let mut record = self.store.mastery().await?;
        record.set_note(lesson_id, text);
        self.store.set_mastery(record.clone()).await?;
        Ok(record)
    }

    /// Start a shuffled study session over one topic's flashcards.
    pub async fn start_session(&self, topic: &str) -> Result<StudySession> {
        let cards = self.store.flashcards().await?;
        let deck: Vec<_> = cards.into_iter().filter(|c| c.topic == topic).collect();
        Ok(StudySession::start(topic, deck))
    }

    /// Parse a flashcard CSV and persist the accepted rows one at a time.
    ///
    /// Ingestion is at-least-once and non-atomic: a failed write is logged,
    /// counted, and skipped; earlier writes are not rolled back. Parse
    /// errors (empty file, unresolvable columns) abort before any write.
    pub async fn import_flashcards_csv(
        &self,
        raw: &str,
    ) -> std::result::Result<ImportSummary, CsvImportError> {
        let outcome = parse_flashcards_csv(raw)?;
        let mut summary = ImportSummary {
            rejected: outcome.rejected,
            ..Default::default()
        };

        for record in outcome.records {
            match self
                .store
                .create_flashcard(record.topic.clone(), record.front, record.back)
                .await
            {
                Ok(_) => summary.added += 1,
                Err(err) => {
                    log::warn!("flashcard write failed (topic '{}'): {}", record.topic, err);
                    summary.failed += 1;
                }
            }
        }

        log::info!("CSV import finished: {}", summary);
        Ok(summary)
    }

    /// Delete flashcards by id, one write per card. Stops at the first
    /// failing write; prior deletions stand.
    pub async fn delete_flashcards(&self, ids: &[Uuid]) -> Result<usize> {
        for id in ids {
            self.store.delete_flashcard(*id).await?;
        }
        Ok(ids.len())
    }
}

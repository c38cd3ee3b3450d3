//! Data models for per-user progress

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The per-user progress record: mastered lesson ids plus free-text notes
/// keyed by lesson id.
///
/// The record is a single aggregate, fully overwritten on every mutation.
/// Concurrent note edits and mastery toggles from two clients can therefore
/// lose one another's update; the store offers no field-level transactions
/// and this is an accepted limitation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasteryRecord {
    #[serde(default)]
    pub mastered: BTreeSet<Uuid>,
    #[serde(default)]
    pub notes: HashMap<Uuid, String>,
}

impl MasteryRecord {
    pub fn is_mastered(&self, lesson_id: Uuid) -> bool {
        self.mastered.contains(&lesson_id)
    }

    /// Flip the mastered flag for a lesson.
    pub fn toggle(&mut self, lesson_id: Uuid) {
        if !self.mastered.insert(lesson_id) {
            self.mastered.remove(&lesson_id);
        }
    }

    pub fn set_note(&mut self, lesson_id: Uuid, text: impl Into<String>) {
        self.notes.insert(lesson_id, text.into());
    }

    pub fn note(&self, lesson_id: Uuid) -> Option<&str> {
        self.notes.get(&lesson_id).map(String::as_str)
    }
}
